// src/geometry.rs

/// A position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Distance from the pointer to the image's top-left corner.
///
/// The anchor is always the top-left corner, so moving down/right grows the
/// image and moving up/left shrinks it, whatever the image's alignment.
pub fn drag_distance(pointer: Point, origin: Point) -> f64 {
    let dx = pointer.x - origin.x;
    let dy = pointer.y - origin.y;
    (dx * dx + dy * dy).sqrt()
}

/// New width for a drag that started at `initial_distance` with the image
/// `initial_width` wide. Returns `None` for a zero (or non-finite) baseline.
pub fn scaled_width(initial_width: f64, initial_distance: f64, distance: f64) -> Option<f64> {
    if initial_distance == 0.0 || !initial_distance.is_finite() {
        return None;
    }
    Some(distance * initial_width / initial_distance)
}

/// Format a CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
