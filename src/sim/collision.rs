//! Proximity classification between the player and live entities
//!
//! Every entity's fate is decided independently from the player's
//! position this tick: collected, hazard hit, culled off-screen, or
//! kept. Collection is checked before the off-screen cull so an orb
//! grabbed right at the bottom edge still scores.

use super::state::GameState;
use crate::consts::*;

/// Outcome of one tick's collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Number of collectibles picked up this tick
    pub collected: u32,
    /// A hazard touched the player; the session ends
    pub hazard_hit: bool,
}

/// Classify every entity against the player, rebuilding both
/// collections with only the survivors.
///
/// A hazard hit short-circuits nothing here: remaining entities are
/// still classified so the pass reports a single consistent outcome,
/// and the state machine acts on the result exactly once.
pub fn resolve(state: &mut GameState) -> TickEvents {
    let player = state.player.pos;
    let bottom = state.field_height;
    let mut events = TickEvents::default();

    state.collectibles.retain(|c| {
        if c.pos.distance(player) < COLLECT_RADIUS {
            events.collected += 1;
            return false;
        }
        // Off-screen cull
        c.pos.y <= bottom + c.radius
    });

    state.hazards.retain(|h| {
        if h.pos.distance(player) < h.radius + PLAYER_RADIUS {
            events.hazard_hit = true;
            return false;
        }
        h.pos.y <= bottom + h.radius
    });

    events
}
