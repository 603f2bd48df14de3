//! Persisted application settings. Load failures fall back to defaults;
//! save failures are logged and otherwise ignored.

use std::fs;
use std::path::PathBuf;

use engine_session::PlayerKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SETTINGS_FILE: &str = "drag_chess_settings.json";

const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub white_player: PlayerKind,
    pub black_player: PlayerKind,
    pub search_depth: u8,
    pub flipped: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            white_player: PlayerKind::Human,
            black_player: PlayerKind::Computer,
            search_depth: DEFAULT_SEARCH_DEPTH,
            flipped: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), %err, "unreadable settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let path = Self::path();
        let contents = match serde_json::to_string_pretty(self) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(%err, "could not serialize settings");
                return;
            }
        };
        if let Err(err) = fs::write(&path, contents) {
            warn!(path = %path.display(), %err, "could not save settings");
        }
    }

    fn path() -> PathBuf {
        PathBuf::from(SETTINGS_FILE)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
