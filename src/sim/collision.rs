//! Axis-aligned collision tests
//!
//! Pipe contact uses strict overlap: rectangles that merely share an edge do
//! not collide. Playfield bounds are inclusive: touching the ceiling or the
//! ground ends the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict interior overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Playfield edge the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Ceiling,
    Ground,
}

/// Check a rectangle against the ceiling (y = 0) and the ground line
pub fn out_of_bounds(rect: &Rect, floor: f32) -> Option<Boundary> {
    if rect.top() <= 0.0 {
        Some(Boundary::Ceiling)
    } else if rect.bottom() >= floor {
        Some(Boundary::Ground)
    } else {
        None
    }
}
