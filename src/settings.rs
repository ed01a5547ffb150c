//! Game settings
//!
//! Read from `breakout.json` in the working directory when present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;

/// Settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "breakout.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the serve direction (None = seed from the clock)
    pub seed: Option<u64>,
    /// Pacing delay between ticks
    pub tick_ms: u64,
    /// Present frames in sync with the display
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            vsync: true,
        }
    }
}

impl Settings {
    /// Load settings from [`SETTINGS_FILE`], falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        // A zero delay would spin the tick accumulator
        settings.tick_ms = settings.tick_ms.max(1);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tick_ms, 7);
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "unknown": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tick_ms, 7);
    }

    #[test]
    fn test_zero_tick_clamped() {
        let settings = Settings::from_json(r#"{ "tick_ms": 0 }"#).unwrap();
        assert_eq!(settings.tick_ms, 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/breakout.json"));
        assert_eq!(settings, Settings::default());
    }
}
