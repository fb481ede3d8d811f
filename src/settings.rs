//! Game settings and preferences
//!
//! Gameplay constants are compile-time (`crate::consts`); this file only holds
//! presentation and control preferences, read from an optional JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use crate::sim::PaddleControl;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "BRICK_BREAKER_CONFIG";
/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "brick-breaker.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// TrueType font used for the score/lives overlay
    pub font_path: PathBuf,
    /// Overlay text size in pixels
    pub font_size: f32,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// How keyboard and pointer paddle control are combined
    pub paddle_control: PaddleControl,
    /// Present with vsync (frame-locked physics runs at the display rate)
    pub vsync: bool,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("arial.ttf"),
            font_size: crate::consts::HUD_FONT_SIZE,
            seed: None,
            paddle_control: PaddleControl::MostRecent,
            vsync: true,
            window_title: "Brick Breaker Game".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from `$BRICK_BREAKER_CONFIG` or `./brick-breaker.json`
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    /// Load from a specific file. A missing file yields defaults;
    /// an unreadable or malformed one is logged and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {e}", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// The configured seed, or a fresh random one
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_path, PathBuf::from("arial.ttf"));
        assert_eq!(settings.font_size, 20.0);
        assert_eq!(settings.paddle_control, PaddleControl::MostRecent);
        assert!(settings.seed.is_none());
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "paddle_control": "pointer_override" }"#)
            .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.paddle_control, PaddleControl::PointerOverride);
        assert_eq!(settings.font_path, PathBuf::from("arial.ttf"));
        assert_eq!(settings.resolved_seed(), 42);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "paddle_control": "sideways" }"#).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/brick-breaker.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "brick-breaker-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "font_size": 32.0, "vsync": false }"#).unwrap();
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.font_size, 32.0);
        assert!(!settings.vsync);
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
