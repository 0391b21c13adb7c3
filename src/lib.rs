//! # VM Network Diagram
//!
//! A visual diagram editor for placing virtual-machine placeholder nodes on a
//! fixed-size canvas. Nodes are connected by dotted lines in a ring topology:
//! each node connects to its successor in insertion order, with the last
//! wrapping back to the first.
//!
//! ## Features
//! - Interactive node placement via right-click context menu
//! - Drag-and-drop repositioning, clamped to the canvas bounds
//! - Right-click deletion of individual nodes
//! - Dotted ring-topology connection rendering
//! - View panning and zooming

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use types::*;
pub use ui::DiagramApp;

/// Runs the diagram application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop. Persisted UI settings (theme, window size, zoom) are restored
/// from the previous session; the diagram itself always starts fresh.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use vm_diagram::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "VM Network Diagram",
        options,
        Box::new(|cc| Ok(Box::new(DiagramApp::from_storage(cc.storage)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_default() {
        let registry = NodeRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_seeded_registry_matches_original_diagram() {
        let registry = NodeRegistry::with_initial_node();
        let node = &registry.nodes()[0];
        assert_eq!((node.x, node.y), (50.0, 50.0));
    }
}
