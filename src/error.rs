//! Error types
//!
//! The trajectory and scoring functions are total and never fail. Errors only
//! exist at the edges: loading configuration and driving a match.

use std::fmt;

/// Invalid or unreadable configuration
#[derive(Debug)]
pub enum ConfigError {
    /// A parameter is outside its allowed range
    OutOfRange { field: &'static str, reason: &'static str },
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange { field, reason } => write!(f, "{field} {reason}"),
            ConfigError::Io(e) => write!(f, "settings i/o failed: {e}"),
            ConfigError::Json(e) => write!(f, "settings parse failed: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::OutOfRange { .. } => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// A shot the match refused to take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotError {
    /// The match is finished
    NotPlaying,
    /// No ball with this id is on the table
    UnknownBall(String),
    /// The ball belongs to the player who is not on turn
    NotYourBall(String),
    /// The ball was already shot this round
    AlreadyShot(String),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::NotPlaying => write!(f, "cannot shoot: match is not in playing state"),
            ShotError::UnknownBall(id) => write!(f, "cannot shoot: no ball with id {id}"),
            ShotError::NotYourBall(id) => write!(f, "cannot shoot: ball {id} is not on turn"),
            ShotError::AlreadyShot(id) => write!(f, "cannot shoot: ball {id} already played this round"),
        }
    }
}

impl std::error::Error for ShotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::OutOfRange {
            field: "max_bounces",
            reason: "must be >= 1",
        };
        assert_eq!(err.to_string(), "max_bounces must be >= 1");
        assert_eq!(
            ShotError::AlreadyShot("p1_ball_0".into()).to_string(),
            "cannot shoot: ball p1_ball_0 already played this round"
        );
    }

    #[test]
    fn test_json_error_has_source() {
        use std::error::Error;

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.source().is_some());
    }
}
