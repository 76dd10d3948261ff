//! Axis-aligned bounding boxes
//!
//! Everything in Coin Catcher collides as a rectangle, including the round
//! coins and hazards (their bounding square).

use glam::Vec2;

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Rectangle with top-left corner `pos` and extent `size`
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Square with top-left corner `pos`
    #[inline]
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
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

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_player_catches_coin() {
        let player = Aabb::new(Vec2::new(215.0, 590.0), Vec2::splat(50.0));
        let coin = Aabb::square(Vec2::new(230.0, 575.0), 20.0);
        assert!(player.overlaps(&coin));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 20.0);
        let b = Aabb::square(Vec2::new(20.0, 0.0), 20.0);
        let c = Aabb::square(Vec2::new(0.0, 20.0), 20.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_center() {
        let a = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(50.0, 30.0));
        assert_eq!(a.center(), Vec2::new(35.0, 35.0));
    }

    fn rect() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..100.0, 1.0f32..100.0)
            .prop_map(|(x, y, w, h)| Aabb::new(Vec2::new(x, y), Vec2::new(w, h)))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn overlap_is_reflexive(a in rect()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn disjoint_rects_never_overlap(a in rect(), gap in 0.0f32..50.0, h in 1.0f32..100.0) {
            let b = Aabb::new(Vec2::new(a.right() + gap, a.top()), Vec2::new(10.0, h));
            prop_assert!(!a.overlaps(&b));
            let below = Aabb::new(Vec2::new(a.left(), a.bottom() + gap), Vec2::new(10.0, h));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
