//! Runner configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::LINE_CLEAR_PAUSE_MS;

/// Settings for the terminal runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the piece source
    pub seed: u32,
    /// JSON-lines event log; `None` disables logging
    pub log_path: Option<PathBuf>,
    /// Pause after a line clear so the highlight is visible
    pub clear_pause_ms: u32,
    /// Soft drop stays held this long after the last Down press
    pub key_release_timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            clear_pause_ms: LINE_CLEAR_PAUSE_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    ///
    /// - `FRAMETRIS_SEED`: u32 seed (default: from the clock)
    /// - `FRAMETRIS_LOG_PATH`: event log path (default: none)
    /// - `FRAMETRIS_CLEAR_PAUSE_MS`: post-clear pause (default: 500)
    /// - `FRAMETRIS_DISABLE_LOG`: `1` or `true` turns the log off
    /// - `FRAMETRIS_KEY_RELEASE_MS`: soft drop hold after a Down press (default: 300);
    ///   raise it above the terminal's autorepeat delay for a gapless held drop
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("FRAMETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let clear_pause_ms = lookup("FRAMETRIS_CLEAR_PAUSE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LINE_CLEAR_PAUSE_MS);

        let key_release_timeout_ms = lookup("FRAMETRIS_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        let disabled = lookup("FRAMETRIS_DISABLE_LOG")
            .map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true"
            })
            .unwrap_or(false);

        let log_path = lookup("FRAMETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && !disabled)
            .map(PathBuf::from);

        Self {
            seed,
            log_path,
            clear_pause_ms,
            key_release_timeout_ms,
        }
    }
}

/// Seed derived from the wall clock
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
