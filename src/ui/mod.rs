//! Main user interface module for the VM network diagram editor.
//!
//! Composes the node registry, drag handling, and the context menu state
//! machine into the rendered application: a top toolbar plus the central
//! diagram canvas.

mod canvas;
mod rendering;
mod state;

pub use state::{ContextMenuState, DiagramApp, MenuState};

use crate::constants;
use eframe::egui;

/// Storage key under which UI settings are persisted between runs.
const STORAGE_KEY: &str = "app_state";

impl eframe::App for DiagramApp {
    /// Persist UI settings between restarts. The diagram itself is skipped.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(STORAGE_KEY, json);
            }
            Err(err) => {
                log::error!("failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Handles the overall UI layout: the top toolbar and the central canvas
    /// area. All diagram state changes happen synchronously here, driven by
    /// the frame's pointer events.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        // Restore the stored window size once per session
        if !self.applied_viewport_restore {
            if let Some((w, h)) = self.window_inner_size {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
            }
            self.applied_viewport_restore = true;
        }
        // Capture the current window inner size to persist on save
        let size = ctx.input(|i| i.screen_rect().size());
        self.window_inner_size = Some((size.x, size.y));

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl DiagramApp {
    /// Builds the application, restoring persisted UI settings if available.
    ///
    /// # Arguments
    ///
    /// * `storage` - The eframe storage handle from the creation context
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut app = storage
            .and_then(|s| s.get_string(STORAGE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("ignoring saved app state: {err}");
                    None
                }
            })
            .unwrap_or_default();
        // Only UI settings survive a restart; the diagram starts fresh
        app.reset_non_ui_fields();
        app
    }

    /// Renders the top toolbar.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add VM").clicked() {
                self.add_node_at(egui::pos2(
                    (constants::CANVAS_WIDTH - constants::NODE_WIDTH) / 2.0,
                    (constants::CANVAS_HEIGHT - constants::NODE_HEIGHT) / 2.0,
                ));
            }

            ui.separator();

            if ui.button("Reset View").clicked() {
                self.canvas.zoom_factor = 1.0;
                self.view_initialized = false;
            }
            ui.label(format!("Zoom: {:.0}%", self.canvas.zoom_factor * 100.0));

            ui.separator();

            ui.label(format!("VMs: {}", self.registry.len()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.dark_mode, "Dark mode");
            });
        });
    }

    /// Renders the main canvas area and handles user interactions.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        // Center the diagram in the available area on the first frame
        if !self.view_initialized {
            let diagram_half = egui::vec2(constants::CANVAS_WIDTH, constants::CANVAS_HEIGHT)
                * (self.canvas.zoom_factor * 0.5);
            self.canvas.offset = response.rect.center().to_vec2() - diagram_half;
            self.view_initialized = true;
        }

        self.handle_canvas_panning(ui, &response);
        self.handle_canvas_zoom(ui, &response);
        self.handle_canvas_interactions(&response);
        self.handle_node_dragging(ui, &response);

        self.render_diagram_elements(&painter);

        if self.context_menu.state != MenuState::Hidden {
            self.draw_context_menu(ui);
        }
    }

    /// Routes right-clicks to the context menu state machine.
    ///
    /// A right-click over a node transitions to the delete menu; a
    /// right-click on empty canvas (inside the diagram bounds) transitions
    /// to the add menu. The single transition picks exactly one successor
    /// state, so the two menus are mutually exclusive.
    ///
    /// # Arguments
    ///
    /// * `response` - The canvas response
    fn handle_canvas_interactions(&mut self, response: &egui::Response) {
        if response.secondary_clicked()
            && !self.interaction.is_panning
            && self.interaction.dragging_node.is_none()
        {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                let canvas_pos = self.screen_to_canvas(screen_pos);

                if let Some(node_id) = self.find_node_at_position(canvas_pos) {
                    self.context_menu.state = MenuState::DeleteMenu {
                        node_id,
                        screen_pos,
                    };
                    self.context_menu.just_opened = true;
                } else if canvas_pos.x >= 0.0
                    && canvas_pos.x <= constants::CANVAS_WIDTH
                    && canvas_pos.y >= 0.0
                    && canvas_pos.y <= constants::CANVAS_HEIGHT
                {
                    self.context_menu.state = MenuState::AddMenu {
                        screen_pos,
                        canvas_pos,
                    };
                    self.context_menu.just_opened = true;
                } else {
                    // Right-click outside the diagram dismisses any open menu
                    self.context_menu.state = MenuState::Hidden;
                }
            }
        }
    }

    /// Renders the active context menu and applies its actions.
    ///
    /// Confirm and cancel both return the state machine to `Hidden`, as does
    /// a left-click outside the menu after the opening frame.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_context_menu(&mut self, ui: &mut egui::Ui) {
        let menu = self.context_menu.state.clone();
        let screen_pos = match menu {
            MenuState::Hidden => return,
            MenuState::AddMenu { screen_pos, .. } | MenuState::DeleteMenu { screen_pos, .. } => {
                screen_pos
            }
        };

        let area_response = egui::Area::new(egui::Id::new("context_menu"))
            .fixed_pos(screen_pos)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| match menu {
                        MenuState::Hidden => {}
                        MenuState::AddMenu { canvas_pos, .. } => {
                            ui.label("Add a new VM at the clicked position");
                            ui.separator();
                            ui.horizontal(|ui| {
                                if ui.button("Add VM").clicked() {
                                    self.add_node_at(canvas_pos);
                                    self.context_menu.state = MenuState::Hidden;
                                }
                                if ui.button("Cancel").clicked() {
                                    self.context_menu.state = MenuState::Hidden;
                                }
                            });
                        }
                        MenuState::DeleteMenu { node_id, .. } => {
                            ui.horizontal(|ui| {
                                if ui.button("Delete").clicked() {
                                    self.delete_node(node_id);
                                    self.context_menu.state = MenuState::Hidden;
                                }
                                if ui.button("Cancel").clicked() {
                                    self.context_menu.state = MenuState::Hidden;
                                }
                            });
                        }
                    });
                })
            });

        // Handle click-outside-to-close after the first frame
        if !self.context_menu.just_opened && ui.input(|i| i.pointer.primary_clicked()) {
            if let Some(click_pos) = ui.input(|i| i.pointer.interact_pos()) {
                if !area_response.response.rect.contains(click_pos) {
                    self.context_menu.state = MenuState::Hidden;
                }
            }
        }

        self.context_menu.just_opened = false;
    }

    /// Adds a new node at the given canvas position.
    ///
    /// # Arguments
    ///
    /// * `canvas_pos` - Requested top-left corner in canvas coordinates
    pub fn add_node_at(&mut self, canvas_pos: egui::Pos2) {
        let id = self.registry.add(canvas_pos.x, canvas_pos.y);
        log::info!("added VM {id} at ({:.0}, {:.0})", canvas_pos.x, canvas_pos.y);
    }

    /// Deletes the node with the given id, if it still exists.
    ///
    /// # Arguments
    ///
    /// * `node_id` - ID of the node to delete
    pub fn delete_node(&mut self, node_id: crate::types::NodeId) {
        self.registry.remove(node_id);
        if self.interaction.dragging_node == Some(node_id) {
            self.interaction.dragging_node = None;
        }
        log::info!("deleted VM {node_id}");
    }
}
