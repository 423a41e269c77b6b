//! Round scoring
//!
//! Scoring rules (active balls only):
//! - 3 points: ball touching the center ball, both inside the ring
//! - 2 points: ball inside the ring, not touching the center ball
//! - 1 point: the ball outside the ring that lies closest to the center ball
//!
//! A ball earns at most one award. Ties for the closest ball go to the first
//! candidate in evaluation order (player 1's balls, then player 2's).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Player, TableSnapshot};
use crate::consts::*;

/// Points earned by each player in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub player1: u32,
    pub player2: u32,
}

impl ScoreResult {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::One => self.player1 += points,
            Player::Two => self.player2 += points,
        }
    }
}

impl std::ops::AddAssign for ScoreResult {
    fn add_assign(&mut self, rhs: Self) {
        self.player1 += rhs.player1;
        self.player2 += rhs.player2;
    }
}

/// Scoring category a ball fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Award {
    TouchingInRing,
    InRing,
    Closest,
}

impl Award {
    pub fn points(self) -> u32 {
        match self {
            Award::TouchingInRing => POINTS_TOUCHING_IN_RING,
            Award::InRing => POINTS_IN_RING,
            Award::Closest => POINTS_CLOSEST,
        }
    }
}

/// Metrics and award for one active ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallAssessment {
    pub id: String,
    pub player: Player,
    /// Planar distance to the center ball
    pub distance_to_center_ball: f32,
    /// Planar distance to the table origin
    pub distance_from_center: f32,
    pub touching: bool,
    pub in_ring: bool,
    pub award: Option<Award>,
}

/// Full classification of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEvaluation {
    pub center_in_ring: bool,
    /// Active balls in evaluation order
    pub assessments: Vec<BallAssessment>,
    pub result: ScoreResult,
}

/// Classify every active ball and total the points
pub fn evaluate_round(table: &TableSnapshot) -> RoundEvaluation {
    let center = &table.center;
    let center_in_ring = center.is_in_ring();

    let mut assessments: Vec<BallAssessment> = table
        .evaluation_order()
        .filter(|(_, ball)| ball.active)
        .map(|(player, ball)| {
            let distance_to_center_ball = ball.distance_to(center);
            let distance_from_center = ball.distance_from_center();
            let touching = distance_to_center_ball <= TOUCHING_DISTANCE;
            let in_ring = distance_from_center <= RING_RADIUS;

            let award = if touching && in_ring && center_in_ring {
                Some(Award::TouchingInRing)
            } else if in_ring && !touching {
                Some(Award::InRing)
            } else {
                None
            };

            BallAssessment {
                id: ball.id.clone(),
                player,
                distance_to_center_ball,
                distance_from_center,
                touching,
                in_ring,
                award,
            }
        })
        .collect();

    // min_by returns the first of several equal minima
    let closest = assessments
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.in_ring)
        .min_by(|(_, a), (_, b)| a.distance_to_center_ball.total_cmp(&b.distance_to_center_ball))
        .map(|(i, _)| i);
    if let Some(i) = closest {
        assessments[i].award = Some(Award::Closest);
    }

    let mut result = ScoreResult::default();
    for assessment in &assessments {
        if let Some(award) = assessment.award {
            result.add(assessment.player, award.points());
        }
    }

    RoundEvaluation {
        center_in_ring,
        assessments,
        result,
    }
}

/// Points for one round; no table scores (0, 0)
pub fn score_round(table: Option<&TableSnapshot>) -> ScoreResult {
    table.map(|t| evaluate_round(t).result).unwrap_or_default()
}

impl fmt::Display for RoundEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player 1: {} points", self.result.player1)?;
        writeln!(f, "Player 2: {} points", self.result.player2)?;
        writeln!(f, "Center ball in ring: {}", self.center_in_ring)?;
        for a in &self.assessments {
            let tag = match a.player {
                Player::One => "P1",
                Player::Two => "P2",
            };
            let award = match a.award {
                Some(award) => format!("{:?} (+{})", award, award.points()),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{} {}: Dist={:.2}, ToCenterBall={:.2}, Touch={}, InRing={}, Award={}",
                tag, a.id, a.distance_from_center, a.distance_to_center_ball, a.touching, a.in_ring, award
            )?;
        }
        Ok(())
    }
}
