use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tuning for the speech port. The dialogue machine itself takes no
/// configuration; everything here shapes how prompts are rendered and how
/// long a listen waits for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub voice: String,
    /// How long a listen stays open before reporting that nothing was
    /// heard, in milliseconds.
    pub no_input_timeout_ms: u64,
    /// Settling time between a final recognition result and its delivery,
    /// in milliseconds.
    pub complete_timeout_ms: u64,
    /// Pipe spoken prompts through the system `say` command as well as
    /// printing them.
    pub system_tts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            voice: "en-US-DavisNeural".to_string(),
            no_input_timeout_ms: 5000,
            complete_timeout_ms: 0,
            system_tts: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid settings document")
    }

    /// Reads `path` if it exists. Any problem falls back to defaults with
    /// a warning so a broken settings file never keeps the shell down.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        let loaded = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| Self::from_json(&text));
        match loaded {
            Ok(settings) => settings,
            Err(error) => {
                warn!("Ignoring settings file {}: {:#}", path.display(), error);
                Self::default()
            }
        }
    }
}
