//! 2D canvas renderer for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::vertex::colors;
use super::{EntityKind, Hud, Renderer};
use crate::sim::{GamePhase, Quad};

/// Draws quads on a canvas and mirrors the HUD into DOM elements
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    document: Document,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Returns None if the canvas has no 2D context
    pub fn new(canvas: &HtmlCanvasElement, document: Document) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            document,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Clear to the background colour; call once per frame before `present`
    pub fn begin_frame(&self) {
        self.ctx.set_fill_style_str(&colors::to_css(colors::BACKGROUND));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    /// Normalized device coordinates to canvas pixels (y up)
    fn to_pixels(&self, x: f32, y: f32) -> (f64, f64) {
        (
            (x as f64 + 1.0) * 0.5 * self.width,
            (1.0 - y as f64) * 0.5 * self.height,
        )
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw_quad(&mut self, kind: EntityKind, quad: &Quad) {
        // Strip order: top-left, top-right, bottom-left, bottom-right
        let (left, top) = self.to_pixels(quad[0].x, quad[0].y);
        let (right, bottom) = self.to_pixels(quad[3].x, quad[3].y);
        self.ctx.set_fill_style_str(&colors::to_css(colors::for_kind(kind)));
        self.ctx.fill_rect(left, top, right - left, bottom - top);
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.set_text("hud-score", &hud.score_text());
        self.set_text("hud-high-score", &hud.high_score_text());
        self.set_text("hud-level", &format!("Level: {}", hud.level));
        self.set_text("hud-difficulty", hud.difficulty.as_str());
        let status = match hud.phase {
            GamePhase::NotStarted => "Press Enter to start, Tab to change difficulty",
            GamePhase::Playing => "",
            GamePhase::Paused => "Paused",
            GamePhase::GameOver => "Game over - Enter to retry, Tab to change difficulty",
        };
        self.set_text("hud-status", status);
    }
}
