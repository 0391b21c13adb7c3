//! Application state management structures.
//!
//! This module contains the state structures that track the application's
//! current UI state: view navigation, the active drag session, the context
//! menu state machine, and the top-level app struct.

use crate::types::*;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// State related to view navigation and display.
///
/// Tracks the current pan offset and zoom level of the diagram view. These
/// only affect how the canvas is presented; node coordinates always live in
/// canvas space.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasState {
    /// Current view pan offset (in screen space)
    #[serde(skip)]
    pub offset: egui::Vec2,
    /// Current zoom level (1.0 = normal, 2.0 = 2x zoom, 0.5 = 50% zoom)
    pub zoom_factor: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            zoom_factor: 1.0,
        }
    }
}

/// State related to user interactions with nodes and the canvas.
///
/// The drag-session fields exist only between pointer-down on a node and the
/// matching pointer-up.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionState {
    /// Node currently being dragged by the user
    #[serde(skip)]
    pub dragging_node: Option<NodeId>,
    /// Offset from the pointer to the dragged node's top-left corner,
    /// in canvas space
    #[serde(skip)]
    pub drag_offset: egui::Vec2,
    /// Whether the user is currently panning the view
    #[serde(skip)]
    pub is_panning: bool,
    /// Last pointer position during a panning operation
    #[serde(skip)]
    pub last_pan_pos: Option<egui::Pos2>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            dragging_node: None,
            drag_offset: egui::Vec2::ZERO,
            is_panning: false,
            last_pan_pos: None,
        }
    }
}

/// The context menu state machine.
///
/// Exactly one variant is active at a time, so a right-click resolves to
/// either the add menu or the delete menu, never both.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    /// No menu is showing
    #[default]
    Hidden,
    /// "Add VM" menu opened by right-clicking empty canvas
    AddMenu {
        /// Screen position where the menu should appear
        screen_pos: egui::Pos2,
        /// Canvas position where a confirmed node will be placed
        canvas_pos: egui::Pos2,
    },
    /// "Delete" menu opened by right-clicking a node
    DeleteMenu {
        /// The node the menu acts on
        node_id: NodeId,
        /// Screen position where the menu should appear
        screen_pos: egui::Pos2,
    },
}

/// State related to context menu display and interaction.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuState {
    /// Current state machine position
    #[serde(skip)]
    pub state: MenuState,
    /// Flag to prevent the menu from closing on the click that opened it
    #[serde(skip)]
    pub just_opened: bool,
}

impl Default for ContextMenuState {
    fn default() -> Self {
        Self {
            state: MenuState::Hidden,
            just_opened: false,
        }
    }
}

/// The main application structure containing UI state and the diagram data.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic. The diagram itself is never
/// persisted; only UI settings survive a restart.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramApp {
    /// The node registry being edited
    #[serde(skip)]
    pub registry: NodeRegistry,
    /// View navigation state
    pub canvas: CanvasState,
    /// User interaction state
    pub interaction: InteractionState,
    /// Context menu state
    pub context_menu: ContextMenuState,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Persisted last known window inner size in logical points
    /// Stored as a simple tuple to avoid depending on serde for egui types
    pub window_inner_size: Option<(f32, f32)>,
    /// Whether we've already applied the stored window geometry this session
    #[serde(skip)]
    pub applied_viewport_restore: bool,
    /// Whether the view has been centered on the diagram this session
    #[serde(skip)]
    pub view_initialized: bool,
}

impl Default for DiagramApp {
    fn default() -> Self {
        Self {
            registry: NodeRegistry::with_initial_node(),
            canvas: CanvasState::default(),
            interaction: InteractionState::default(),
            context_menu: ContextMenuState::default(),
            dark_mode: true,
            window_inner_size: None,
            applied_viewport_restore: false,
            view_initialized: false,
        }
    }
}

impl DiagramApp {
    /// Serializes the application state to JSON.
    ///
    /// Only UI settings are serialized; diagram fields are skipped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string containing the serialized app state
    ///
    /// # Returns
    ///
    /// A `DiagramApp` instance, or an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resets any non-UI related fields in the [DiagramApp], so that when
    /// state is restored only settings related to the UI are retained.
    pub fn reset_non_ui_fields(&mut self) {
        *self = Self {
            dark_mode: self.dark_mode,
            window_inner_size: self.window_inner_size,
            canvas: CanvasState {
                zoom_factor: self.canvas.zoom_factor,
                ..CanvasState::default()
            },
            ..Default::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_seeds_one_node() {
        let app = DiagramApp::default();
        assert_eq!(app.registry.len(), 1);
        assert_eq!(app.context_menu.state, MenuState::Hidden);
        assert!(app.interaction.dragging_node.is_none());
    }

    #[test]
    fn test_reset_non_ui_fields_keeps_settings() {
        let mut app = DiagramApp::default();
        app.dark_mode = false;
        app.canvas.zoom_factor = 2.0;
        app.registry.add(100.0, 100.0);
        app.context_menu.state = MenuState::AddMenu {
            screen_pos: egui::pos2(10.0, 10.0),
            canvas_pos: egui::pos2(10.0, 10.0),
        };

        app.reset_non_ui_fields();

        assert!(!app.dark_mode);
        assert_eq!(app.canvas.zoom_factor, 2.0);
        // Diagram and transient menu state are back to defaults
        assert_eq!(app.registry.len(), 1);
        assert_eq!(app.context_menu.state, MenuState::Hidden);
    }

    #[test]
    fn test_ui_settings_survive_json_roundtrip() {
        let mut app = DiagramApp::default();
        app.dark_mode = false;
        app.canvas.zoom_factor = 1.5;
        app.window_inner_size = Some((800.0, 600.0));
        app.registry.add(200.0, 200.0);

        let json = app.to_json().unwrap();
        let mut restored = DiagramApp::from_json(&json).unwrap();

        assert!(!restored.dark_mode);
        assert_eq!(restored.canvas.zoom_factor, 1.5);
        assert_eq!(restored.window_inner_size, Some((800.0, 600.0)));

        // The diagram is not persisted; restoring rebuilds the seed diagram
        restored.reset_non_ui_fields();
        assert_eq!(restored.registry.len(), 1);
        assert!(!restored.dark_mode);
    }
}
