//! Square-hitbox entities: the head, the fruit and every tail segment

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{self, Quad};

/// A positioned, uniformly scaled square
///
/// `shape` always matches `pos` and `scale`; every mutator regenerates or
/// shifts it in the same call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pos: Vec2,
    prev_pos: Vec2,
    scale: f32,
    shape: Quad,
}

impl Entity {
    pub fn new(pos: Vec2, scale: f32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            scale,
            shape: geometry::square(pos, scale),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Position before the last move
    #[inline]
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn shape(&self) -> &Quad {
        &self.shape
    }

    /// Move to `pos` with a new scale, remembering where we were
    pub fn set_position(&mut self, pos: Vec2, scale: f32) {
        self.prev_pos = self.pos;
        self.pos = pos;
        self.scale = scale;
        self.shape = self.generate_shape(scale);
    }

    /// Overwrite the remembered previous position
    pub fn set_prev_pos(&mut self, pos: Vec2) {
        self.prev_pos = pos;
    }

    /// Corners of a square of half-width `scale` around the current position
    pub fn generate_shape(&self, scale: f32) -> Quad {
        geometry::square(self.pos, scale)
    }

    /// Shift position and shape together. Does not touch `prev_pos`.
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
        geometry::translate(&mut self.shape, delta);
    }
}

/// True when `a`'s center lies within twice `b`'s scale of `b`'s center.
///
/// Only `b`'s scale is used, so argument order matters.
#[inline]
pub fn has_collided(a: &Entity, b: &Entity) -> bool {
    geometry::distance(a.pos, b.pos) < b.scale * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_position_records_previous() {
        let mut e = Entity::new(Vec2::new(0.1, 0.2), 0.03);
        e.set_position(Vec2::new(0.5, 0.5), 0.03);
        assert_eq!(e.prev_pos(), Vec2::new(0.1, 0.2));
        assert_eq!(e.pos(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_translate_keeps_shape_in_sync() {
        let mut e = Entity::new(Vec2::ZERO, 0.035);
        e.translate(Vec2::new(0.25, -0.1));
        let expected = geometry::square(Vec2::new(0.25, -0.1), 0.035);
        for (a, b) in e.shape().iter().zip(expected.iter()) {
            assert!((*a - *b).length() < 1e-6);
        }
    }

    #[test]
    fn test_collision_boundary_is_exclusive() {
        let a = Entity::new(Vec2::ZERO, 0.035);
        let b = Entity::new(Vec2::new(0.5, 0.0), 0.25);
        // distance 0.5 == 0.25 * 2
        assert!(!has_collided(&a, &b));
        let c = Entity::new(Vec2::new(0.49, 0.0), 0.25);
        assert!(has_collided(&a, &c));
    }

    #[test]
    fn test_collision_uses_second_scale() {
        let small = Entity::new(Vec2::ZERO, 0.01);
        let large = Entity::new(Vec2::new(0.1, 0.0), 0.1);
        assert!(has_collided(&small, &large));
        assert!(!has_collided(&large, &small));
    }

    proptest! {
        #[test]
        fn prop_set_position_builds_exact_square(
            x in -1f32..1.0, y in -1f32..1.0, s in 0.001f32..0.5,
        ) {
            let mut e = Entity::new(Vec2::ZERO, 0.025);
            e.set_position(Vec2::new(x, y), s);
            let q = e.shape();
            prop_assert_eq!(q[0], Vec2::new(x - s, y + s));
            prop_assert_eq!(q[1], Vec2::new(x + s, y + s));
            prop_assert_eq!(q[2], Vec2::new(x - s, y - s));
            prop_assert_eq!(q[3], Vec2::new(x + s, y - s));
            prop_assert_eq!(e.scale(), s);
        }

        #[test]
        fn prop_collision_matches_distance_rule(
            ax in -1f32..1.0, ay in -1f32..1.0,
            bx in -1f32..1.0, by in -1f32..1.0,
            s in 0.001f32..0.5,
        ) {
            let a = Entity::new(Vec2::new(ax, ay), 0.035);
            let b = Entity::new(Vec2::new(bx, by), s);
            let d = geometry::distance(a.pos(), b.pos());
            prop_assert_eq!(has_collided(&a, &b), d < s * 2.0);
        }
    }
}
