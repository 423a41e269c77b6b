//! Game settings and preferences
//!
//! Loaded once from a JSON file and handed out by reference. Physics values
//! are copied into each shot call; nothing is mutated mid-shot.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{TARGET_SCORE_QUICK, TARGET_SCORE_STANDARD};
use crate::error::ConfigError;
use crate::sim::PhysicsParams;
use crate::sim::trajectory::DEFAULT_PREVIEW_POINTS;

/// Match length presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchLength {
    #[default]
    Standard,
    Quick,
}

impl MatchLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLength::Standard => "Standard",
            MatchLength::Quick => "Quick",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Some(MatchLength::Standard),
            "quick" => Some(MatchLength::Quick),
            _ => None,
        }
    }

    /// Points needed to win
    pub fn target_score(&self) -> u32 {
        match self {
            MatchLength::Standard => TARGET_SCORE_STANDARD,
            MatchLength::Quick => TARGET_SCORE_QUICK,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub match_length: MatchLength,

    // === Physics ===
    pub physics: PhysicsParams,

    // === Preview ===
    /// Show the aiming path
    pub show_preview: bool,
    /// Sub-steps in the aiming path
    pub preview_points: usize,

    // === Debug ===
    /// Log bounces and settle points for each shot
    pub debug_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_length: MatchLength::Standard,
            physics: PhysicsParams::default(),
            show_preview: true,
            preview_points: DEFAULT_PREVIEW_POINTS,
            debug_logs: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if self.preview_points == 0 {
            return Err(ConfigError::OutOfRange {
                field: "preview_points",
                reason: "must be >= 1",
            });
        }
        Ok(())
    }

    pub fn target_score(&self) -> u32 {
        self.match_length.target_score()
    }

    /// Read and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("center_ball_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.target_score(), 21);
        assert_eq!(settings.preview_points, 50);
    }

    #[test]
    fn match_length_parsing() {
        assert_eq!(MatchLength::from_str("QUICK"), Some(MatchLength::Quick));
        assert_eq!(MatchLength::from_str("std"), Some(MatchLength::Standard));
        assert_eq!(MatchLength::from_str("marathon"), None);
        assert_eq!(MatchLength::Quick.target_score(), 11);
        assert_eq!(MatchLength::Quick.as_str(), "Quick");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"match_length": "Quick", "physics": {"bounce_coefficient": 0.5}}"#)
                .unwrap();
        assert_eq!(settings.match_length, MatchLength::Quick);
        assert_eq!(settings.physics.bounce_coefficient, 0.5);
        assert_eq!(settings.physics.max_bounces, 5);
        assert!(settings.show_preview);
    }

    #[test]
    fn zero_preview_points_invalid() {
        let settings = Settings {
            preview_points: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save_load");
        let settings = Settings {
            match_length: MatchLength::Quick,
            debug_logs: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_rejects_invalid_physics() {
        let path = temp_path("invalid");
        fs::write(&path, r#"{"physics": {"max_bounces": 0}}"#).unwrap();
        let result = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::OutOfRange { field: "max_bounces", .. })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default(temp_path("does_not_exist"));
        assert_eq!(settings, Settings::default());
    }
}
