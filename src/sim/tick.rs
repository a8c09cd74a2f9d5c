//! Per-frame simulation step
//!
//! Order within a frame is fixed: fruit expiry, head motion, tail follow
//! (with self-collision), fruit collision, wall collision.

use glam::Vec2;

use super::entity::{Entity, has_collided};
use super::geometry::{distance, div_or_keep};
use super::spawn::PointSource;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Advance the session by `dt` seconds of wall-clock time.
///
/// `now_ms` is a non-decreasing clock reading used for fruit expiry.
/// Nothing happens while paused or over.
pub fn tick<P: PointSource + ?Sized>(state: &mut GameState, dt: f32, now_ms: u64, points: &mut P) {
    if state.is_over() || state.is_paused() {
        return;
    }

    // Fruit expiry
    if now_ms.saturating_sub(state.fruit_spawn_ms) > state.fruit_lifetime_ms {
        let pos = points.random_point();
        state.fruit.set_position(pos, FRUIT_SCALE);
        state.fruit_spawn_ms = now_ms;
        log::debug!("Fruit expired, moved to ({:.3}, {:.3})", pos.x, pos.y);
        state.events.push(GameEvent::FruitExpired { pos });
    }

    // Head motion
    let head_pos = state.head.pos();
    state.head.set_prev_pos(head_pos);
    state.head.translate(state.velocity * dt);

    if follow_tail(state) {
        state.game_over();
        return;
    }

    if has_collided(&state.head, &state.fruit) {
        eat_fruit(state, now_ms, points);
    } else if out_of_bounds(state.head.pos()) {
        state.game_over();
    }
}

/// Pull each segment toward its leader, last segment first.
///
/// Returns true if a non-adjacent segment ends up on the head.
fn follow_tail(state: &mut GameState) -> bool {
    let head = state.head.pos();
    for i in (0..state.tail.len()).rev() {
        let leader = if i == 0 { head } else { state.tail[i - 1].pos() };
        let segment = &mut state.tail[i];
        let gap = distance(segment.pos(), leader);
        // Coincident with the leader: no direction to follow this frame
        if gap != 0.0 {
            let dir = div_or_keep(leader - segment.pos(), gap);
            segment.set_position(leader - dir * TAIL_SPACING, TAIL_SCALE);
        } else {
            segment.set_prev_pos(segment.pos());
        }
        if i > 0 && has_collided(&state.head, &state.tail[i]) {
            log::debug!("Head hit tail segment {}", i);
            return true;
        }
    }
    false
}

fn eat_fruit<P: PointSource + ?Sized>(state: &mut GameState, now_ms: u64, points: &mut P) {
    state.fruit.set_position(points.random_point(), FRUIT_SCALE);

    let anchor = state
        .tail
        .last()
        .map(Entity::prev_pos)
        .unwrap_or_else(|| state.head.prev_pos());
    state
        .tail
        .push(Entity::new(anchor + state.trail_offset, TAIL_SCALE));

    state.score += 1;
    state.fruit_spawn_ms = now_ms;
    log::debug!("Fruit eaten, score {}", state.score);
    state.events.push(GameEvent::FruitEaten { score: state.score });

    if state.score == state.level_score {
        state.next_level();
    }
}

#[inline]
fn out_of_bounds(pos: Vec2) -> bool {
    pos.x.abs() > WALL_BOUND || pos.y.abs() > WALL_BOUND
}
