//! Center Ball - shot resolution and scoring for a turn-based table game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectories, table state, scoring, match flow)
//! - `settings`: Data-driven physics and match configuration
//! - `error`: Configuration and shot errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, ShotError};
pub use settings::{MatchLength, Settings};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Playable area boundaries (x-z plane)
    pub const BOUNDARY_X_MIN: f32 = -180.0;
    pub const BOUNDARY_X_MAX: f32 = 180.0;
    pub const BOUNDARY_Z_MIN: f32 = -280.0;
    pub const BOUNDARY_Z_MAX: f32 = 280.0;

    /// Ball defaults
    pub const CENTER_BALL_RADIUS: f32 = 12.0;
    pub const PLAYER_BALL_RADIUS: f32 = 18.0;
    /// Height above the table; visual only
    pub const BALL_Y: f32 = 0.4;
    pub const BALLS_PER_PLAYER: usize = 5;

    /// Starting lines
    pub const PLAYER1_START_Z: f32 = 150.0;
    pub const PLAYER2_START_Z: f32 = -150.0;

    /// Scoring zones
    pub const RING_RADIUS: f32 = 2.5;
    pub const TOUCHING_DISTANCE: f32 = 0.8;

    /// Points per award
    pub const POINTS_TOUCHING_IN_RING: u32 = 3;
    pub const POINTS_IN_RING: u32 = 2;
    pub const POINTS_CLOSEST: u32 = 1;

    /// Match targets
    pub const TARGET_SCORE_STANDARD: u32 = 21;
    pub const TARGET_SCORE_QUICK: u32 = 11;
    /// Safety limit for headless drivers
    pub const MAX_ROUNDS: u32 = 50;
}

use consts::*;

/// Project a table position onto the x-z plane
#[inline]
pub fn planar(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Distance between two positions on the x-z plane (y ignored)
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}

/// Distance from the table origin on the x-z plane
#[inline]
pub fn distance_from_origin(pos: Vec3) -> f32 {
    planar(pos).length()
}

/// Whether a position lies inside the center ring (edge inclusive)
#[inline]
pub fn is_in_ring(pos: Vec3) -> bool {
    distance_from_origin(pos) <= RING_RADIUS
}

/// Whether two positions are close enough to count as touching
#[inline]
pub fn is_touching(a: Vec3, b: Vec3) -> bool {
    planar_distance(a, b) <= TOUCHING_DISTANCE
}

/// Whether a position lies inside the boundary rectangle
pub fn is_within_bounds(pos: Vec3) -> bool {
    (BOUNDARY_X_MIN..=BOUNDARY_X_MAX).contains(&pos.x)
        && (BOUNDARY_Z_MIN..=BOUNDARY_Z_MAX).contains(&pos.z)
}

/// Clamp a position into the boundary rectangle, keeping y
///
/// NaN components stay NaN.
pub fn clamp_to_boundary(pos: Vec3) -> Vec3 {
    Vec3::new(
        pos.x.clamp(BOUNDARY_X_MIN, BOUNDARY_X_MAX),
        pos.y,
        pos.z.clamp(BOUNDARY_Z_MIN, BOUNDARY_Z_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_distance_ignores_y() {
        let a = Vec3::new(0.0, 0.4, 0.0);
        let b = Vec3::new(3.0, 100.0, 4.0);
        assert!((planar_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ring_edge_is_inside() {
        assert!(is_in_ring(Vec3::new(RING_RADIUS, 0.0, 0.0)));
        assert!(!is_in_ring(Vec3::new(0.0, 0.0, RING_RADIUS + 0.01)));
    }

    #[test]
    fn test_touching_threshold() {
        let center = Vec3::ZERO;
        assert!(is_touching(Vec3::new(0.8, 0.0, 0.0), center));
        assert!(!is_touching(Vec3::new(0.0, 0.0, 0.81), center));
    }

    #[test]
    fn test_clamp_to_boundary() {
        let clamped = clamp_to_boundary(Vec3::new(500.0, 0.4, -900.0));
        assert_eq!(clamped, Vec3::new(BOUNDARY_X_MAX, 0.4, BOUNDARY_Z_MIN));
        assert!(is_within_bounds(clamped));
        assert!(!is_within_bounds(Vec3::new(180.5, 0.0, 0.0)));
    }

    #[test]
    fn test_clamp_keeps_nan() {
        let clamped = clamp_to_boundary(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(clamped.x.is_nan());
    }
}
