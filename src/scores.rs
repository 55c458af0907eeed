//! Run score persistence
//!
//! Completed runs are appended to a single LocalStorage key as a JSON log.
//! Records are never mutated or deleted; the host UI only ever reads the
//! maximum. Persistence is best-effort: an unavailable or failing store is
//! logged and the game plays on without it.

use serde::{Deserialize, Serialize};

/// One completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    /// ISO-8601 wall-clock time the run ended
    pub timestamp: String,
}

/// Append-only log of completed runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreLog {
    pub records: Vec<ScoreRecord>,
}

impl ScoreLog {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "astro_runner_scores";

    /// Create an empty log
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append one record. Existing records are never touched.
    pub fn append(&mut self, score: u32, timestamp: String) {
        self.records.push(ScoreRecord { score, timestamp });
    }

    /// Highest recorded score; 0 for an empty log
    pub fn max_score(&self) -> u32 {
        self.records.iter().map(|r| r.score).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a backing store exists at all (feature detection)
    #[cfg(target_arch = "wasm32")]
    pub fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some()
    }

    /// Load the log from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(log) = serde_json::from_str::<ScoreLog>(&json) {
                    return log;
                }
            }
        }

        Self::new()
    }

    /// Save the log to LocalStorage (WASM only). Failures are logged and
    /// dropped; the run outcome is unaffected and nothing retries.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("score store unavailable; dropping write");
            return;
        };

        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = storage.set_item(Self::STORAGE_KEY, &json) {
                    log::warn!("score write failed: {e:?}");
                }
            }
            Err(e) => log::warn!("score serialization failed: {e}"),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn available() -> bool {
        false
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Append a completed run to the persisted log (WASM only).
///
/// Fire-and-forget: called once per run by the loop driver after the
/// Over transition, and only for positive scores.
#[cfg(target_arch = "wasm32")]
pub fn record_run(score: u32) {
    let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
    let mut log = ScoreLog::load();
    log.append(score, timestamp);
    log.save();
    log::info!("recorded run score {score}");
}
