//! Probabilistic entity spawning
//!
//! One independent Bernoulli trial per entity kind per tick, drawn from
//! the state's seeded RNG so a fixed seed replays the same spawns.

use rand::Rng;

use super::state::{Collectible, GameState, Hazard};
use crate::consts::*;

/// Maybe introduce new entities at the top of the play field.
///
/// The trial runs once per tick regardless of delta, so spawn density
/// tracks the frame rate rather than wall time; the `MAX_ENTITIES` cap
/// keeps a stalled or throttled tab from accumulating entities faster
/// than the cull removes them.
pub fn spawn(state: &mut GameState) {
    if state.collectibles.len() < MAX_ENTITIES
        && state.rng.random::<f64>() < COLLECTIBLE_SPAWN_RATE
    {
        let orb = Collectible::spawn(&mut state.rng, state.field_width);
        state.collectibles.push(orb);
    }

    if state.hazards.len() < MAX_ENTITIES && state.rng.random::<f64>() < HAZARD_SPAWN_RATE {
        let hazard = Hazard::spawn(&mut state.rng, state.field_width);
        state.hazards.push(hazard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::MemoryStore;
    use crate::sim::state::GamePhase;

    fn playing_state(seed: u64) -> GameState {
        let store = MemoryStore::default();
        let mut state = GameState::new(seed, &store);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_spawned_entities_start_at_top() {
        let mut state = playing_state(3);
        for _ in 0..2000 {
            spawn(&mut state);
        }
        assert!(!state.collectibles.is_empty());
        assert!(!state.hazards.is_empty());
        for c in &state.collectibles {
            assert_eq!(c.pos.y, COLLECTIBLE_SPAWN_Y);
            assert!(c.pos.x >= 0.0 && c.pos.x < state.field_width);
        }
        for h in &state.hazards {
            assert_eq!(h.pos.y, HAZARD_SPAWN_Y);
        }
    }

    #[test]
    fn test_spawn_rates_roughly_observed() {
        let mut state = playing_state(11);
        let trials = 20_000;
        let mut collectibles = 0u32;
        let mut hazards = 0u32;
        for _ in 0..trials {
            spawn(&mut state);
            collectibles += state.collectibles.len() as u32;
            hazards += state.hazards.len() as u32;
            // Drain so the population cap never interferes
            state.collectibles.clear();
            state.hazards.clear();
        }
        let c_rate = collectibles as f64 / trials as f64;
        let h_rate = hazards as f64 / trials as f64;
        assert!((c_rate - COLLECTIBLE_SPAWN_RATE).abs() < 0.01, "rate {c_rate}");
        assert!((h_rate - HAZARD_SPAWN_RATE).abs() < 0.005, "rate {h_rate}");
    }

    #[test]
    fn test_spawn_respects_entity_cap() {
        let mut state = playing_state(5);
        for _ in 0..100_000 {
            spawn(&mut state);
        }
        assert!(state.collectibles.len() <= MAX_ENTITIES);
        assert!(state.hazards.len() <= MAX_ENTITIES);
    }

    #[test]
    fn test_spawn_deterministic_for_seed() {
        let mut a = playing_state(99);
        let mut b = playing_state(99);
        for _ in 0..5000 {
            spawn(&mut a);
            spawn(&mut b);
        }
        assert_eq!(a.collectibles.len(), b.collectibles.len());
        assert_eq!(a.hazards.len(), b.hazards.len());
        for (x, y) in a.collectibles.iter().zip(&b.collectibles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.speed, y.speed);
        }
    }
}
