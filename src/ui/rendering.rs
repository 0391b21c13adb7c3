//! Canvas rendering functionality for the diagram.
//!
//! This module handles all drawing operations: the canvas boundary, the
//! dotted ring-topology lines between consecutive nodes, and the VM node
//! rectangles themselves.

use super::state::DiagramApp;
use crate::constants;
use crate::types::*;
use eframe::egui;
use eframe::epaint::StrokeKind;

impl DiagramApp {
    /// Renders all diagram elements on the canvas.
    ///
    /// Elements are drawn in layers: the canvas boundary first, then the
    /// ring connection lines, then nodes on top, ensuring proper visual
    /// hierarchy.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_diagram_elements(&self, painter: &egui::Painter) {
        self.draw_canvas_boundary(painter);
        self.draw_ring_connections(painter);
        for node in self.registry.nodes() {
            self.draw_node(painter, node);
        }
    }

    /// Draws the fixed-size diagram boundary rectangle.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    fn draw_canvas_boundary(&self, painter: &egui::Painter) {
        let min = self.canvas_to_screen(egui::Pos2::ZERO);
        let max = self.canvas_to_screen(egui::pos2(
            constants::CANVAS_WIDTH,
            constants::CANVAS_HEIGHT,
        ));
        let rect = egui::Rect::from_min_max(min, max);

        let (fill, border) = if self.dark_mode {
            (
                egui::Color32::from_gray(28),
                egui::Color32::from_gray(160),
            )
        } else {
            (egui::Color32::WHITE, egui::Color32::BLACK)
        };

        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, border), StrokeKind::Inside);
    }

    /// Draws the dotted ring-topology lines between consecutive nodes.
    ///
    /// Node *i* connects to node *(i+1) mod n*; the edge set comes from
    /// [`ring_edges`], which suppresses self-edges and draws the two-node
    /// ring as a single segment.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    fn draw_ring_connections(&self, painter: &egui::Painter) {
        let nodes = self.registry.nodes();
        let line_color = if self.dark_mode {
            egui::Color32::from_gray(180)
        } else {
            egui::Color32::DARK_GRAY
        };
        let stroke = egui::Stroke::new(1.5, line_color);

        for (from_idx, to_idx) in ring_edges(nodes.len()) {
            let from = &nodes[from_idx];
            let to = &nodes[to_idx];
            let start = self.canvas_to_screen(egui::pos2(
                from.x + from.width / 2.0,
                from.y + from.height / 2.0,
            ));
            let end = self.canvas_to_screen(egui::pos2(
                to.x + to.width / 2.0,
                to.y + to.height / 2.0,
            ));
            painter.extend(egui::Shape::dashed_line(
                &[start, end],
                stroke,
                constants::DASH_LENGTH,
                constants::DASH_GAP,
            ));
        }
    }

    /// Renders a single VM node with appropriate styling and label.
    ///
    /// The node being dragged is highlighted with an orange fill and a
    /// heavier accent border; all others are blue with a plain border.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `node` - The node to render
    pub fn draw_node(&self, painter: &egui::Painter, node: &Node) {
        let min = self.canvas_to_screen(egui::pos2(node.x, node.y));
        let size = egui::vec2(node.width, node.height) * self.canvas.zoom_factor;
        let rect = egui::Rect::from_min_size(min, size);

        let is_dragging = Some(node.id) == self.interaction.dragging_node;
        let fill = if is_dragging {
            egui::Color32::from_rgb(251, 146, 60)
        } else {
            egui::Color32::from_rgb(59, 130, 246)
        };
        let (stroke_color, stroke_width) = if is_dragging {
            (egui::Color32::from_rgb(255, 165, 0), 3.0)
        } else {
            (egui::Color32::BLACK, 2.0)
        };

        painter.rect_filled(rect, constants::NODE_CORNER_RADIUS, fill);
        painter.rect_stroke(
            rect,
            constants::NODE_CORNER_RADIUS,
            egui::Stroke::new(stroke_width, stroke_color),
            StrokeKind::Outside,
        );

        // Zoom-aware label, centered in the node
        let font_size = (12.0 * self.canvas.zoom_factor).clamp(8.0, 48.0);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "VM",
            egui::FontId::proportional(font_size),
            egui::Color32::WHITE,
        );
    }
}
