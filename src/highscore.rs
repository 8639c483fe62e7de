//! Scalar high-score persistence
//!
//! The ledger only ever needs "load a number, save a number", so that is
//! the whole interface; the sim never sees a storage technology. On web
//! the value lives in LocalStorage as a bare decimal string, so saves
//! written by earlier builds of the game parse unchanged.

/// Narrow load/save interface for the persisted high score
pub trait ScoreStore {
    /// Read the recorded high score; missing or unparsable values are 0
    fn load(&self) -> u32;
    /// Record a new high score (write-through, called on every new max)
    fn save(&mut self, score: u32);
}

/// In-memory store for tests and the native stub
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Option<u32>,
}

impl MemoryStore {
    /// Store pre-seeded with a recorded score
    pub fn with_score(score: u32) -> Self {
        Self { score: Some(score) }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        self.score = Some(score);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    const STORAGE_KEY: &'static str = "cosmicHighScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn load(&self) -> u32 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        match raw {
            // A bare decimal is a valid JSON number
            Some(raw) => match serde_json::from_str::<u32>(raw.trim()) {
                Ok(score) => {
                    log::info!("Loaded high score: {score}");
                    score
                }
                Err(_) => {
                    log::warn!("Ignoring unparsable high score {raw:?}");
                    0
                }
            },
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(Self::STORAGE_KEY, &score.to_string());
            log::info!("High score saved ({score})");
        }
    }
}
