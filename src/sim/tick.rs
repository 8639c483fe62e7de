//! Per-tick simulation step
//!
//! One call per display-refresh signal. Input arrives pre-buffered: the
//! platform layer writes the latest pointer/resize samples and one-shot
//! commands into a `TickInput`, and the tick consumes them exactly once,
//! so handler timing can never race a step in progress.

use super::collision::{self, TickEvents};
use super::kinematics;
use super::spawn;
use super::state::{Collectible, GamePhase, GameState, Hazard, Player};
use crate::consts::*;
use crate::highscore::ScoreStore;

/// Buffered input consumed by a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x relative to the play field
    pub pointer_x: Option<f32>,
    /// Latest play-field size, if it changed
    pub resize: Option<(f32, f32)>,
    /// Begin a session (start screen button)
    pub start: bool,
    /// Restart after game over
    pub reset: bool,
}

/// Immutable per-tick view handed to the draw adapter.
///
/// The renderer only ever sees positions and radii; how they are drawn
/// is entirely its business.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub player: &'a Player,
    pub collectibles: &'a [Collectible],
    pub hazards: &'a [Hazard],
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
}

impl GameState {
    /// Capture the current frame for rendering
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            player: &self.player,
            collectibles: &self.collectibles,
            hazards: &self.hazards,
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
        }
    }
}

/// Advance the game by one tick.
///
/// `delta` is normalized frame time (1.0 = one 60 Hz frame); zero,
/// negative, or runaway values are clamped rather than rejected, so a
/// backgrounded tab resumes without simulating seconds of fall in one
/// step. Outside `Playing` the commands and resize still apply but no
/// simulation runs.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    delta: f32,
    store: &mut dyn ScoreStore,
) -> TickEvents {
    if let Some((w, h)) = input.resize {
        state.resize(w, h);
    }
    if input.start {
        state.start();
    }
    if input.reset {
        state.reset();
    }

    if state.phase != GamePhase::Playing {
        return TickEvents::default();
    }

    let delta = delta.clamp(0.0, MAX_DELTA);

    if let Some(x) = input.pointer_x {
        state.player.target_x = x.clamp(0.0, state.field_width);
    }

    spawn::spawn(state);
    kinematics::advance(state, delta);
    let events = collision::resolve(state);

    // Score ledger: fixed +1 per pickup, write-through high score
    if events.collected > 0 {
        state.score += events.collected;
        if state.score > state.high_score {
            state.high_score = state.score;
            store.save(state.high_score);
            log::info!("New high score: {}", state.high_score);
        }
    }

    if events.hazard_hit {
        state.game_over();
        log::info!("Game over at score {}", state.score);
    }

    events
}
