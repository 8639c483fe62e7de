//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-scaled stepping with a clamped delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::TickEvents;
pub use state::{Collectible, GamePhase, GameState, Hazard, Player};
pub use tick::{FrameSnapshot, TickInput, tick};
