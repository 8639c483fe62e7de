//! Position integration for entities and the player ship
//!
//! `delta` is normalized frame time: one nominal 60 Hz frame is 1.0, so
//! motion is independent of the actual display refresh rate. The driver
//! clamps delta to `[0, MAX_DELTA]` before it reaches the sim.

use super::state::GameState;
use crate::consts::*;

/// Advance every entity and the player by one tick.
///
/// Entities fall straight down at their sampled speed. The player eases
/// toward the buffered pointer x by exponential smoothing rather than
/// snapping, and its y stays pinned to the bottom margin. Off-screen
/// entities are culled afterwards by the collision pass, which gets the
/// first look so a pickup on the bottom edge still counts.
pub fn advance(state: &mut GameState, delta: f32) {
    for c in &mut state.collectibles {
        c.pos.y += c.speed * delta;
    }
    for h in &mut state.hazards {
        h.pos.y += h.speed * delta;
    }

    let player = &mut state.player;
    player.pos.x += (player.target_x - player.pos.x) * PLAYER_SMOOTHING;
    player.pos.y = state.field_height - PLAYER_BOTTOM_MARGIN;
}
