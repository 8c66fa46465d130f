//! Pointer tracker
//!
//! Stores the latest pointer position and paints a soft glow under it.
//! Updates are O(1) and never draw; drawing happens only inside a frame.

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::geometry::Point;
use super::surface::Surface;

/// Glow drawn under the pointer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub radius: f64,
    /// Centre colour; fades to the same colour at zero alpha
    pub color: Rgba,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            radius: 60.0,
            color: Rgba::new(139, 92, 246, 0.2),
        }
    }
}

/// Last known pointer position for one view
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Point,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move event. Last write wins.
    pub fn update(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// True once the pointer has moved off the origin on both axes
    pub fn is_set(&self) -> bool {
        self.position.x > 0.0 && self.position.y > 0.0
    }

    pub fn reset(&mut self) {
        self.position = Point::ORIGIN;
    }
}

/// Paint the glow under the pointer. Returns whether anything was drawn.
pub fn render_highlight<S: Surface>(
    surface: &mut S,
    pointer: &PointerState,
    highlight: &Highlight,
) -> bool {
    if !pointer.is_set() {
        return false;
    }

    surface.fill_radial_gradient(
        pointer.position(),
        highlight.radius,
        highlight.color,
        highlight.color.transparent(),
    );
    true
}
