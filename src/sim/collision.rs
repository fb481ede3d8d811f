//! Collision detection for axis-aligned geometry
//!
//! Everything in the playfield is tested as an axis-aligned bounding box:
//! the ball uses the square that encloses its circle, bricks and the paddle
//! use their rectangles directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in game space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Box enclosing a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not intersect,
    /// and a box with zero area never intersects anything.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let left = self.min.x.max(other.min.x);
        let right = self.max.x.min(other.max.x);
        let top = self.min.y.max(other.min.y);
        let bottom = self.max.y.min(other.max.y);
        left < right && top < bottom
    }
}

/// Which playfield boundaries a box is touching or beyond
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    /// Bottom edge strictly past the floor (ball is lost)
    pub floor: bool,
}

impl WallContact {
    /// Touching either side wall
    pub fn side(&self) -> bool {
        self.left || self.right
    }
}

/// Classify a box against a `width` × `height` playfield anchored at the origin
pub fn wall_contact(bounds: &Aabb, width: f32, height: f32) -> WallContact {
    WallContact {
        left: bounds.left() <= 0.0,
        right: bounds.right() >= width,
        top: bounds.top() <= 0.0,
        floor: bounds.bottom() > height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::from_rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_rect(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::from_rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_rect(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_zero_area_box_never_intersects() {
        let a = Aabb::from_rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let collapsed = Aabb::from_rect(Vec2::new(5.0, 5.0), Vec2::ZERO);
        assert!(!a.intersects(&collapsed));
    }

    #[test]
    fn test_circle_box_encloses_circle() {
        let b = Aabb::from_circle(Vec2::new(100.0, 50.0), 8.0);
        assert_eq!(b.left(), 92.0);
        assert_eq!(b.right(), 108.0);
        assert_eq!(b.top(), 42.0);
        assert_eq!(b.bottom(), 58.0);
        assert_eq!(b.size(), Vec2::splat(16.0));
    }

    #[test]
    fn test_wall_contact_classification() {
        let inside = Aabb::from_circle(Vec2::new(400.0, 300.0), 8.0);
        assert_eq!(wall_contact(&inside, 800.0, 600.0), WallContact::default());

        let at_left = Aabb::from_circle(Vec2::new(8.0, 300.0), 8.0);
        let contact = wall_contact(&at_left, 800.0, 600.0);
        assert!(contact.left && contact.side() && !contact.right);

        let at_right = Aabb::from_circle(Vec2::new(792.0, 300.0), 8.0);
        assert!(wall_contact(&at_right, 800.0, 600.0).right);

        let at_top = Aabb::from_circle(Vec2::new(400.0, 8.0), 8.0);
        assert!(wall_contact(&at_top, 800.0, 600.0).top);

        // Exactly on the floor is not yet lost
        let on_floor = Aabb::from_circle(Vec2::new(400.0, 592.0), 8.0);
        assert!(!wall_contact(&on_floor, 800.0, 600.0).floor);
        let past_floor = Aabb::from_circle(Vec2::new(400.0, 593.0), 8.0);
        assert!(wall_contact(&past_floor, 800.0, 600.0).floor);
    }
}
