//! Canvas interaction and navigation functionality.
//!
//! This module handles view panning, zooming, node dragging, and coordinate
//! transformations between screen and canvas space.

use super::state::DiagramApp;
use crate::types::*;
use eframe::egui;

impl DiagramApp {
    /// Converts screen coordinates to canvas coordinates accounting for zoom and pan.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels)
    ///
    /// # Returns
    ///
    /// The corresponding position in canvas space
    pub fn screen_to_canvas(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas.offset) / self.canvas.zoom_factor
    }

    /// Converts canvas coordinates to screen coordinates accounting for zoom and pan.
    ///
    /// # Arguments
    ///
    /// * `canvas_pos` - Position in canvas space
    ///
    /// # Returns
    ///
    /// The corresponding position in screen space (pixels)
    pub fn canvas_to_screen(&self, canvas_pos: egui::Pos2) -> egui::Pos2 {
        canvas_pos * self.canvas.zoom_factor + self.canvas.offset
    }

    /// Handles middle-click or Cmd/Ctrl+left-click view panning.
    ///
    /// Uses Cmd on macOS and Ctrl on other platforms for modifier-based panning.
    /// Panning moves the view only; node coordinates are untouched.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_panning(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        // modifiers.command automatically uses Cmd on macOS and Ctrl elsewhere
        let should_pan = ui.input(|i| {
            i.pointer.middle_down() || (i.pointer.primary_down() && i.modifiers.command)
        });

        if should_pan {
            if let Some(current_pos) = response.interact_pointer_pos() {
                if !self.interaction.is_panning {
                    self.interaction.is_panning = true;
                    self.interaction.last_pan_pos = Some(current_pos);
                } else if let Some(last_pos) = self.interaction.last_pan_pos {
                    let delta = current_pos - last_pos;
                    self.canvas.offset += delta;
                    self.interaction.last_pan_pos = Some(current_pos);
                }
            }
        } else {
            self.interaction.is_panning = false;
            self.interaction.last_pan_pos = None;
        }
    }

    /// Handles scroll wheel zooming.
    ///
    /// Zooms in/out while keeping the pointer position fixed in canvas space.
    /// Zoom range is clamped between `MIN_ZOOM` and `MAX_ZOOM`. Only zooms if
    /// the cursor is over the canvas widget.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_zoom(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);

        if scroll_delta != 0.0 {
            let mouse_pos = ui
                .input(|i| i.pointer.hover_pos())
                .or_else(|| response.interact_pointer_pos());

            if let Some(mouse_pos) = mouse_pos {
                if !response.rect.contains(mouse_pos) {
                    return;
                }

                // Canvas position under the cursor before the zoom change
                let canvas_pos_before_zoom = self.screen_to_canvas(mouse_pos);

                let zoom_delta = if scroll_delta > 0.0 {
                    crate::constants::ZOOM_STEP
                } else {
                    -crate::constants::ZOOM_STEP
                };
                let old_zoom = self.canvas.zoom_factor;
                self.canvas.zoom_factor = (self.canvas.zoom_factor + zoom_delta)
                    .clamp(crate::constants::MIN_ZOOM, crate::constants::MAX_ZOOM);

                if (self.canvas.zoom_factor - old_zoom).abs() > f32::EPSILON {
                    // Adjust the offset so that canvas position stays under the cursor
                    let screen_pos_after_zoom = self.canvas_to_screen(canvas_pos_before_zoom);
                    self.canvas.offset += mouse_pos - screen_pos_after_zoom;
                }
            }
        }
    }

    /// Handles the node drag protocol with the left mouse button.
    ///
    /// A drag session starts when the primary button is pressed over a node,
    /// produces a clamped position update on every pointer move, and ends on
    /// release. One session exists at a time.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_node_dragging(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        if ui.input(|i| i.pointer.primary_down()) && !self.interaction.is_panning {
            if let Some(current_pos) = response.interact_pointer_pos() {
                let canvas_pos = self.screen_to_canvas(current_pos);

                if let Some(dragging_id) = self.interaction.dragging_node {
                    // Continue the active session: apply the clamped update immediately
                    self.update_dragged_node_position(dragging_id, canvas_pos);
                } else if ui.input(|i| i.pointer.primary_pressed()) {
                    // A press this frame may start a new session, but only on a node
                    if let Some(node_id) = self.find_node_at_position(canvas_pos) {
                        self.start_node_drag(node_id, canvas_pos);
                    }
                }
            }
        } else if let Some(dragging_id) = self.interaction.dragging_node.take() {
            // Pointer released: the session is destroyed, the highlight clears
            log::debug!("drag ended for node {dragging_id}");
            self.interaction.drag_offset = egui::Vec2::ZERO;
        }
    }

    /// Starts a drag session for the specified node.
    ///
    /// Records the offset from the pointer to the node's top-left corner so
    /// the node doesn't jump under the cursor.
    ///
    /// # Arguments
    ///
    /// * `node_id` - ID of the node to start dragging
    /// * `canvas_pos` - Current pointer position in canvas space
    fn start_node_drag(&mut self, node_id: NodeId, canvas_pos: egui::Pos2) {
        if let Some(node) = self.registry.get(node_id) {
            self.interaction.dragging_node = Some(node_id);
            self.interaction.drag_offset = egui::pos2(node.x, node.y) - canvas_pos;
            log::debug!("drag started for node {node_id}");
        }
    }

    /// Updates the position of the currently dragged node.
    ///
    /// The registry clamps the target position to the canvas bounds, so the
    /// node never leaves the diagram no matter where the pointer goes.
    ///
    /// # Arguments
    ///
    /// * `node_id` - ID of the node being dragged
    /// * `canvas_pos` - Current pointer position in canvas space
    fn update_dragged_node_position(&mut self, node_id: NodeId, canvas_pos: egui::Pos2) {
        let target = canvas_pos + self.interaction.drag_offset;
        self.registry.update_position(node_id, target.x, target.y);
    }

    /// Finds the node at the given canvas position, if any.
    ///
    /// Walks the registry back-to-front so that on overlap the top-most
    /// (last drawn) node wins.
    ///
    /// # Arguments
    ///
    /// * `pos` - Position in canvas space to check
    ///
    /// # Returns
    ///
    /// The ID of the node at that position, or `None` if no node is there
    pub fn find_node_at_position(&self, pos: egui::Pos2) -> Option<NodeId> {
        self.registry
            .nodes()
            .iter()
            .rev()
            .find(|node| node.contains(pos.x, pos.y))
            .map(|node| node.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_canvas_roundtrip() {
        let mut app = DiagramApp::default();
        app.canvas.offset = egui::vec2(120.0, 80.0);
        app.canvas.zoom_factor = 2.0;

        let screen = egui::pos2(300.0, 200.0);
        let canvas = app.screen_to_canvas(screen);
        let back = app.canvas_to_screen(canvas);

        assert!((back - screen).length() < 1e-3);
    }

    #[test]
    fn test_find_node_prefers_topmost_on_overlap() {
        let mut app = DiagramApp::default();
        let first = app.registry.add(100.0, 100.0);
        let second = app.registry.add(110.0, 110.0);

        // Point inside both rectangles: the later (top-most) node wins
        assert_eq!(app.find_node_at_position(egui::pos2(120.0, 115.0)), Some(second));
        // Point only inside the first
        assert_eq!(app.find_node_at_position(egui::pos2(102.0, 102.0)), Some(first));
        // Point inside neither
        assert_eq!(app.find_node_at_position(egui::pos2(300.0, 300.0)), None);
    }

    #[test]
    fn test_panning_leaves_node_coordinates_unchanged() {
        let mut app = DiagramApp::default();
        let before: Vec<(f32, f32)> = app.registry.nodes().iter().map(|n| (n.x, n.y)).collect();

        app.canvas.offset += egui::vec2(50.0, -30.0);
        app.canvas.zoom_factor = 3.0;

        let after: Vec<(f32, f32)> = app.registry.nodes().iter().map(|n| (n.x, n.y)).collect();
        assert_eq!(before, after);
    }
}
