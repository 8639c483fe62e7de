//! Game state and core simulation types
//!
//! Entities are plain data records held in per-kind collections; all
//! per-tick behavior lives in `kinematics`, `collision`, and `spawn`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscore::ScoreStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended by a hazard hit; score frozen for display
    GameOver,
}

/// The player's ship, pinned near the bottom edge of the play field
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Last buffered pointer x; the ship eases toward it each tick
    pub target_x: f32,
}

impl Player {
    /// Center horizontally and pin to the bottom margin
    pub fn centered(field_width: f32, field_height: f32) -> Self {
        let x = field_width / 2.0;
        Self {
            pos: Vec2::new(x, field_height - PLAYER_BOTTOM_MARGIN),
            target_x: x,
        }
    }

    /// Keep the ship inside the field after a resize
    pub fn clamp_to_field(&mut self, field_width: f32, field_height: f32) {
        self.pos.x = self.pos.x.clamp(0.0, field_width);
        self.target_x = self.target_x.clamp(0.0, field_width);
        self.pos.y = field_height - PLAYER_BOTTOM_MARGIN;
    }
}

/// A falling orb; picking it up scores a point
///
/// `hue` and `glow` are cosmetic, passed straight through to the
/// renderer and never read by the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub hue: f32,
    pub glow: f32,
}

impl Collectible {
    /// Sample a fresh orb at the top of the field
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field_width: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * field_width, COLLECTIBLE_SPAWN_Y),
            radius: rng.random_range(COLLECTIBLE_RADIUS_MIN..COLLECTIBLE_RADIUS_MAX),
            speed: rng.random_range(COLLECTIBLE_SPEED_MIN..COLLECTIBLE_SPEED_MAX),
            hue: rng.random_range(COLLECTIBLE_HUE_MIN..COLLECTIBLE_HUE_MAX),
            glow: rng.random_range(COLLECTIBLE_GLOW_MIN..COLLECTIBLE_GLOW_MAX),
        }
    }
}

/// A falling hazard; touching it ends the run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Hazard {
    /// Sample a fresh hazard at the top of the field
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field_width: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * field_width, HAZARD_SPAWN_Y),
            radius: rng.random_range(HAZARD_RADIUS_MIN..HAZARD_RADIUS_MAX),
            speed: rng.random_range(HAZARD_SPEED_MIN..HAZARD_SPEED_MAX),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all spawn decisions
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current session
    pub score: u32,
    /// Best score ever recorded (write-through persisted)
    pub high_score: u32,
    /// Player ship
    pub player: Player,
    /// Live collectibles
    pub collectibles: Vec<Collectible>,
    /// Live hazards
    pub hazards: Vec<Hazard>,
    /// Play-field size in logical pixels
    pub field_width: f32,
    pub field_height: f32,
}

impl GameState {
    /// Create a new game in `Idle`, loading the persisted high score
    pub fn new(seed: u64, store: &dyn ScoreStore) -> Self {
        let high_score = store.load();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            player: Player::centered(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            collectibles: Vec::new(),
            hazards: Vec::new(),
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
        }
    }

    /// Begin a session from the start screen; no-op in any other phase
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
        }
    }

    /// Restart after a game over; no-op in any other phase
    ///
    /// Clears both entity collections, zeroes the score, and re-centers
    /// the player. The persisted high score is untouched.
    pub fn reset(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.collectibles.clear();
            self.hazards.clear();
            self.score = 0;
            self.player = Player::centered(self.field_width, self.field_height);
            self.phase = GamePhase::Playing;
        }
    }

    /// End the session. Entities are discarded so nothing is simulated
    /// (or drawn mid-fall) behind the game-over overlay.
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::Playing {
            self.collectibles.clear();
            self.hazards.clear();
            self.phase = GamePhase::GameOver;
        }
    }

    /// Apply a play-field resize, keeping the player in bounds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field_width = width;
        self.field_height = height;
        self.player.clamp_to_field(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::MemoryStore;

    #[test]
    fn test_new_game_is_idle_and_empty() {
        let store = MemoryStore::default();
        let state = GameState::new(1, &store);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert!(state.collectibles.is_empty());
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_high_score_loaded_from_store() {
        let store = MemoryStore::with_score(42);
        let state = GameState::new(1, &store);
        assert_eq!(state.high_score, 42);
    }

    #[test]
    fn test_start_only_from_idle() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1, &store);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        // Already playing: start is a no-op
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        state.game_over();
        state.start();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reset_only_from_game_over() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1, &store);

        // Idle: reset is a no-op
        state.reset();
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        state.score = 7;
        state.high_score = 15;
        state.game_over();

        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 15);
        assert!(state.collectibles.is_empty());
        assert!(state.hazards.is_empty());
        assert_eq!(state.player.pos.x, state.field_width / 2.0);
    }

    #[test]
    fn test_game_over_clears_entities() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1, &store);
        state.start();
        state
            .collectibles
            .push(Collectible::spawn(&mut state.rng.clone(), 600.0));
        state.hazards.push(Hazard::spawn(&mut state.rng.clone(), 600.0));

        state.game_over();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.collectibles.is_empty());
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_resize_clamps_player() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1, &store);
        state.player.pos.x = 900.0;
        state.player.target_x = 900.0;

        state.resize(500.0, 300.0);
        assert_eq!(state.player.pos.x, 500.0);
        assert_eq!(state.player.pos.y, 300.0 - crate::consts::PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_spawn_attributes_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let c = Collectible::spawn(&mut rng, 640.0);
            assert!(c.radius >= COLLECTIBLE_RADIUS_MIN && c.radius < COLLECTIBLE_RADIUS_MAX);
            assert!(c.speed >= COLLECTIBLE_SPEED_MIN && c.speed < COLLECTIBLE_SPEED_MAX);
            assert!(c.pos.x >= 0.0 && c.pos.x < 640.0);
            assert_eq!(c.pos.y, COLLECTIBLE_SPAWN_Y);

            let h = Hazard::spawn(&mut rng, 640.0);
            assert!(h.radius >= HAZARD_RADIUS_MIN && h.radius < HAZARD_RADIUS_MAX);
            assert!(h.speed >= HAZARD_SPEED_MIN && h.speed < HAZARD_SPEED_MAX);
            assert_eq!(h.pos.y, HAZARD_SPAWN_Y);
        }
    }
}
