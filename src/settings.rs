//! Host settings
//!
//! Loaded once at startup from a JSON file; any failure falls back to
//! defaults so a missing or corrupt file never blocks play.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display name shown in the HUD and on the game-over banner.
    pub player_name: String,
    /// Terminal bell on hit / game over.
    pub sound: bool,
    /// Show the control hint line under the playfield.
    pub show_hints: bool,
    /// Pin the run seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            sound: true,
            show_hints: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Config file location: `$CHAOS_SURVIVAL_CONFIG` if set, otherwise
    /// `$HOME/.chaos-survival.json`.
    pub fn path() -> PathBuf {
        if let Ok(path) = std::env::var("CHAOS_SURVIVAL_CONFIG") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".chaos-survival.json")
    }

    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "ignoring malformed settings file {}: {err}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Best-effort write; the game runs fine without a settings file.
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(err) = fs::write(Self::path(), json) {
                log::warn!("could not save settings: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.player_name, "Player");
        assert!(settings.sound);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn roundtrips_through_json() {
        let settings = Settings {
            player_name: "Ada".to_string(),
            sound: false,
            show_hints: false,
            seed: Some(42),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Settings = serde_json::from_str(r#"{"player_name":"Ada"}"#).unwrap();
        assert_eq!(back.player_name, "Ada");
        assert!(back.sound);
        assert!(back.show_hints);
        assert!(back.seed.is_none());
    }
}
