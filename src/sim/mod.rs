//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step count per shot, no render clock
//! - No ambient or global state; callers own the table
//! - Stable iteration order (player 1's balls, then player 2's)
//! - No rendering or platform dependencies

pub mod game;
pub mod params;
pub mod scoring;
pub mod state;
pub mod trajectory;

pub use game::{GameEvent, GamePhase, Match};
pub use params::PhysicsParams;
pub use scoring::{Award, BallAssessment, RoundEvaluation, ScoreResult, evaluate_round, score_round};
pub use state::{Ball, Owner, Player, TableSnapshot};
pub use trajectory::{
    DEFAULT_PREVIEW_POINTS, LogObserver, ShotObserver, ShotOutcome, VELOCITY_DECAY, Wall,
    preview_path, resolve_shot, simulate_shot,
};
