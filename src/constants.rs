//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering and interactions.

// Diagram canvas
/// Width of the diagram canvas in canvas units.
pub const CANVAS_WIDTH: f32 = 400.0;
/// Height of the diagram canvas in canvas units.
pub const CANVAS_HEIGHT: f32 = 400.0;

// Node dimensions
/// Default node width in canvas units.
pub const NODE_WIDTH: f32 = 50.0;
/// Default node height in canvas units.
pub const NODE_HEIGHT: f32 = 30.0;
/// Corner radius for node rectangles (in screen pixels after transform).
pub const NODE_CORNER_RADIUS: f32 = 4.0;

// Ring connection lines
/// Length of each dash in the dotted ring lines (screen pixels).
pub const DASH_LENGTH: f32 = 4.0;
/// Gap between dashes in the dotted ring lines (screen pixels).
pub const DASH_GAP: f32 = 4.0;

// View navigation
/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.25;
/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 5.0;
/// Zoom step applied per scroll event.
pub const ZOOM_STEP: f32 = 0.025;

// Seed diagram
/// Position of the node the diagram starts with.
pub const INITIAL_NODE_POS: (f32, f32) = (50.0, 50.0);
