//! Geometry helpers on top of `glam::Vec2`
//!
//! Shapes are axis-aligned squares stored as four corners in
//! triangle-strip order: top-left, top-right, bottom-left, bottom-right.

use glam::Vec2;

/// Four corner points of an entity's shape
pub type Quad = [Vec2; 4];

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Divide by a scalar, returning `v` untouched when `s` is exactly zero
#[inline]
pub fn div_or_keep(v: Vec2, s: f32) -> Vec2 {
    if s != 0.0 { v / s } else { v }
}

/// Square of half-width `half` centered at `center`
pub fn square(center: Vec2, half: f32) -> Quad {
    [
        Vec2::new(center.x - half, center.y + half),
        Vec2::new(center.x + half, center.y + half),
        Vec2::new(center.x - half, center.y - half),
        Vec2::new(center.x + half, center.y - half),
    ]
}

/// Shift every corner by `delta`
pub fn translate(quad: &mut Quad, delta: Vec2) {
    for corner in quad.iter_mut() {
        *corner += delta;
    }
}

/// Rotate every corner about the origin by `angle` radians (counter-clockwise)
pub fn rotate(quad: &mut Quad, angle: f32) {
    let rot = Vec2::from_angle(angle);
    for corner in quad.iter_mut() {
        *corner = rot.rotate(*corner);
    }
}

/// Scale every corner about the origin, per axis
pub fn scale(quad: &mut Quad, sx: f32, sy: f32) {
    let factor = Vec2::new(sx, sy);
    for corner in quad.iter_mut() {
        *corner *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_square_corner_order() {
        let q = square(Vec2::new(0.5, -0.5), 0.1);
        assert!(close(q[0], Vec2::new(0.4, -0.4)));
        assert!(close(q[1], Vec2::new(0.6, -0.4)));
        assert!(close(q[2], Vec2::new(0.4, -0.6)));
        assert!(close(q[3], Vec2::new(0.6, -0.6)));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut q = square(Vec2::new(1.0, 0.0), 0.0);
        rotate(&mut q, FRAC_PI_2);
        for corner in q {
            assert!(close(corner, Vec2::new(0.0, 1.0)));
        }
    }

    #[test]
    fn test_scale_per_axis() {
        let mut q = square(Vec2::new(1.0, 1.0), 1.0);
        scale(&mut q, 2.0, 0.5);
        assert!(close(q[0], Vec2::new(0.0, 1.0)));
        assert!(close(q[3], Vec2::new(4.0, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_divide_by_zero_keeps_vector(x in -1e6f32..1e6, y in -1e6f32..1e6) {
            let v = Vec2::new(x, y);
            prop_assert_eq!(div_or_keep(v, 0.0), v);
        }

        #[test]
        fn prop_distance_symmetric_and_non_negative(
            ax in -10f32..10.0, ay in -10f32..10.0,
            bx in -10f32..10.0, by in -10f32..10.0,
        ) {
            let (a, b) = (Vec2::new(ax, ay), Vec2::new(bx, by));
            prop_assert!(distance(a, b) >= 0.0);
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn prop_translate_matches_recentered_square(
            cx in -1f32..1.0, cy in -1f32..1.0,
            dx in -1f32..1.0, dy in -1f32..1.0,
            half in 0.001f32..0.5,
        ) {
            let mut q = square(Vec2::new(cx, cy), half);
            translate(&mut q, Vec2::new(dx, dy));
            let expected = square(Vec2::new(cx + dx, cy + dy), half);
            for (a, b) in q.iter().zip(expected.iter()) {
                prop_assert!(close(*a, *b));
            }
        }
    }
}
