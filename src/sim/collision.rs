//! Axis-aligned box collision
//!
//! Rectangles are half-open: a rect at `x` with width `w` covers `[x, x + w)`.
//! Two rects that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (origin = top-left corner, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Point containment
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x < max.x && point.y >= self.origin.y && point.y < max.y
    }

    /// Positive-area overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.origin.x < b_max.x
            && other.origin.x < a_max.x
            && self.origin.y < b_max.y
            && other.origin.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(49.9, 49.9)));
        assert!(!rect.contains(Vec2::new(50.0, 20.0)));
        assert!(!rect.contains(Vec2::new(20.0, 50.0)));
        assert!(!rect.contains(Vec2::new(9.0, 20.0)));
    }

    #[test]
    fn test_overlap() {
        let pea = Rect::new(100.0, 120.0, 20.0, 20.0);
        let zombie = Rect::new(115.0, 100.0, 50.0, 80.0);
        assert!(pea.overlaps(&zombie));
        assert!(zombie.overlaps(&pea));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(20.0, 0.0, 20.0, 20.0);
        assert!(!a.overlaps(&b));

        let c = Rect::new(0.0, 20.0, 20.0, 20.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_different_rows_do_not_overlap() {
        // Pea in row 0 (y = 120..140) vs zombie in row 1 (y = 180..260)
        let pea = Rect::new(300.0, 120.0, 20.0, 20.0);
        let zombie = Rect::new(300.0, 180.0, 50.0, 80.0);
        assert!(!pea.overlaps(&zombie));
    }
}
