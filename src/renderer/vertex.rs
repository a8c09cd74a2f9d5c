//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::EntityKind;
use crate::sim::Quad;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Four vertices in triangle-strip order
pub fn quad_strip(quad: &Quad, color: [f32; 4]) -> [Vertex; 4] {
    quad.map(|corner| Vertex::new(corner.x, corner.y, color))
}

/// Colors for game elements
pub mod colors {
    use super::EntityKind;

    pub const HEAD: [f32; 4] = [0.1, 0.6, 0.1, 1.0];
    pub const TAIL: [f32; 4] = [0.1, 0.5, 0.1, 1.0];
    pub const FRUIT: [f32; 4] = [0.85, 0.2, 0.15, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];

    pub fn for_kind(kind: EntityKind) -> [f32; 4] {
        match kind {
            EntityKind::Head => HEAD,
            EntityKind::Tail => TAIL,
            EntityKind::Fruit => FRUIT,
        }
    }

    /// `#rrggbb` for canvas fill styles
    pub fn to_css(color: [f32; 4]) -> String {
        let [r, g, b, _] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::square;
    use glam::Vec2;

    #[test]
    fn test_quad_strip_preserves_corner_order() {
        let quad = square(Vec2::new(0.5, 0.5), 0.25);
        let verts = quad_strip(&quad, colors::HEAD);
        assert_eq!(verts[0].position, [0.25, 0.75]);
        assert_eq!(verts[3].position, [0.75, 0.25]);
        assert!(verts.iter().all(|v| v.color == colors::HEAD));
    }

    #[test]
    fn test_vertex_is_plain_bytes() {
        let verts = [Vertex::new(1.0, 2.0, colors::FRUIT)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), std::mem::size_of::<Vertex>());
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(colors::to_css([1.0, 0.0, 0.5, 1.0]), "#ff0080");
    }
}
