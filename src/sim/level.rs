//! Level bounds geometry
//!
//! The playable area is the canvas minus the frame border and the header
//! band across the top. Derived once at startup, static for the session.

use glam::Vec2;

use crate::consts::{BORDER_WIDTH, HEADER_HEIGHT};

/// Static rectangle constraining square movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Level {
    /// Derive the playable area from the canvas dimensions
    pub fn from_canvas(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            x: BORDER_WIDTH,
            y: HEADER_HEIGHT,
            width: canvas_width - 2.0 * BORDER_WIDTH,
            height: canvas_height - HEADER_HEIGHT - BORDER_WIDTH,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point lies inside the bounds (half-open on the far edges)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
