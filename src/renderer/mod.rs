//! Rendering adapter
//!
//! The simulation exposes geometry; renderers turn it into draw calls.

pub mod batch;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod vertex;

pub use batch::VertexBatch;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use vertex::Vertex;

use crate::sim::{Difficulty, GamePhase, GameState, Quad};

/// What an entity is, for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Head,
    Fruit,
    Tail,
}

/// Text overlay contents
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn high_score_text(&self) -> String {
        format!("High Score: {}", self.high_score)
    }
}

/// Draw-call sink
pub trait Renderer {
    /// Draw one entity's four-corner shape
    fn draw_quad(&mut self, kind: EntityKind, quad: &Quad);
    /// Show score and status
    fn draw_hud(&mut self, hud: &Hud);
}

/// Draw the whole session: head, fruit, tail, then the HUD
pub fn present<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.draw_quad(EntityKind::Head, state.head.shape());
    renderer.draw_quad(EntityKind::Fruit, state.fruit.shape());
    for segment in &state.tail {
        renderer.draw_quad(EntityKind::Tail, segment.shape());
    }
    renderer.draw_hud(&Hud {
        score: state.score,
        high_score: state.high_score,
        level: state.level,
        difficulty: state.difficulty,
        phase: state.phase,
    });
}
