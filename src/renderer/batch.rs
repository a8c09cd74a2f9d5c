//! Headless renderer that collects vertex data for upload

use super::vertex::{Vertex, colors, quad_strip};
use super::{EntityKind, Hud, Renderer};
use crate::sim::Quad;

/// One frame's worth of quads, four strip vertices each
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub vertices: Vec<Vertex>,
    pub kinds: Vec<EntityKind>,
    pub hud: Option<Hud>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.kinds.clear();
        self.hud = None;
    }

    pub fn quad_count(&self) -> usize {
        self.kinds.len()
    }

    /// Raw bytes for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices[..])
    }
}

impl Renderer for VertexBatch {
    fn draw_quad(&mut self, kind: EntityKind, quad: &Quad) {
        self.vertices
            .extend_from_slice(&quad_strip(quad, colors::for_kind(kind)));
        self.kinds.push(kind);
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.hud = Some(hud.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::present;
    use crate::sim::{Difficulty, Entity, GameState};
    use crate::consts::TAIL_SCALE;
    use glam::Vec2;

    #[test]
    fn test_present_draws_everything_in_order() {
        let mut state = GameState::new(Difficulty::Easy, Vec2::new(0.5, 0.5));
        state.tail.push(Entity::new(Vec2::new(0.0, -0.07), TAIL_SCALE));
        state.tail.push(Entity::new(Vec2::new(0.0, -0.14), TAIL_SCALE));
        state.score = 4;
        state.high_score = 9;

        let mut batch = VertexBatch::new();
        present(&state, &mut batch);

        assert_eq!(
            batch.kinds,
            vec![EntityKind::Head, EntityKind::Fruit, EntityKind::Tail, EntityKind::Tail]
        );
        assert_eq!(batch.vertices.len(), 16);
        assert_eq!(batch.as_bytes().len(), 16 * 24);

        let hud = batch.hud.as_ref().map(|h| (h.score_text(), h.high_score_text()));
        assert_eq!(
            hud,
            Some(("Score: 4".to_string(), "High Score: 9".to_string()))
        );

        batch.clear();
        assert_eq!(batch.quad_count(), 0);
        assert!(batch.hud.is_none());
    }
}
