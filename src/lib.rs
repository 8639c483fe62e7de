//! Cosmic Collector - a falling-orb arcade mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, kinematics, collisions, game state)
//! - `highscore`: Scalar high-score persistence (LocalStorage on web)
//!
//! Rendering and DOM plumbing live in the wasm entry point (`main.rs`);
//! the sim only ever hands it immutable frame snapshots.

pub mod highscore;
pub mod sim;

pub use highscore::{MemoryStore, ScoreStore};

/// Game configuration constants
///
/// Collision thresholds and spawn rates are hand-tuned; they are kept
/// verbatim as named constants rather than re-derived.
pub mod consts {
    /// Nominal frame interval (ms) - a 60 Hz frame normalizes to delta 1.0
    pub const FRAME_INTERVAL_MS: f32 = 16.67;
    /// Largest delta a single tick will simulate (frames); after a long
    /// suspension the excess time is dropped rather than replayed
    pub const MAX_DELTA: f32 = 3.0;

    /// Per-tick spawn probability for collectibles
    pub const COLLECTIBLE_SPAWN_RATE: f64 = 0.03;
    /// Per-tick spawn probability for hazards
    pub const HAZARD_SPAWN_RATE: f64 = 0.01;
    /// Cap on live entities per kind
    pub const MAX_ENTITIES: usize = 256;

    /// Collectible attribute ranges
    pub const COLLECTIBLE_RADIUS_MIN: f32 = 4.0;
    pub const COLLECTIBLE_RADIUS_MAX: f32 = 12.0;
    pub const COLLECTIBLE_SPEED_MIN: f32 = 2.0;
    pub const COLLECTIBLE_SPEED_MAX: f32 = 4.0;
    /// Spawn height above the top edge
    pub const COLLECTIBLE_SPAWN_Y: f32 = -10.0;

    /// Hazard attribute ranges
    pub const HAZARD_RADIUS_MIN: f32 = 10.0;
    pub const HAZARD_RADIUS_MAX: f32 = 25.0;
    pub const HAZARD_SPEED_MIN: f32 = 1.0;
    pub const HAZARD_SPEED_MAX: f32 = 2.5;
    pub const HAZARD_SPAWN_Y: f32 = -20.0;

    /// Cosmetic hue range (degrees) for collectible glow, cyan to blue
    pub const COLLECTIBLE_HUE_MIN: f32 = 180.0;
    pub const COLLECTIBLE_HUE_MAX: f32 = 240.0;
    pub const COLLECTIBLE_GLOW_MIN: f32 = 0.5;
    pub const COLLECTIBLE_GLOW_MAX: f32 = 1.0;

    /// Distance at which a collectible is picked up
    pub const COLLECT_RADIUS: f32 = 30.0;
    /// Effective player radius for hazard contact
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Exponential smoothing factor for pointer-driven player movement
    pub const PLAYER_SMOOTHING: f32 = 0.15;
    /// Player y offset from the bottom of the play field
    pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;

    /// Default play-field size before the first resize event arrives
    pub const DEFAULT_FIELD_WIDTH: f32 = 672.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 400.0;
}
