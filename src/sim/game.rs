//! Match flow: turns, rounds, totals
//!
//! The caller owns a `Match` and drives it shot by shot. Each call returns the
//! events it produced instead of notifying listeners.

use serde::{Deserialize, Serialize};

use super::params::PhysicsParams;
use super::scoring::{RoundEvaluation, ScoreResult, evaluate_round};
use super::state::{Ball, Player, TableSnapshot};
use super::trajectory::{ShotObserver, simulate_shot};
use crate::error::ShotError;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Shots are accepted
    Playing,
    /// Target reached or ended early
    Finished,
}

/// Something a shot caused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball came to rest
    BallPlaced { id: String, bounces: u32 },
    TurnChanged(Player),
    /// Every ball was played and the round was scored
    RoundCompleted {
        round: u32,
        evaluation: RoundEvaluation,
    },
    /// Running totals after a round
    ScoreUpdated(ScoreResult),
    /// `None` when no player reached the target
    GameFinished { winner: Option<Player> },
}

/// A two-player match (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub player1_name: String,
    pub player2_name: String,
    pub target_score: u32,
    /// Cumulative points across rounds
    pub totals: ScoreResult,
    pub turn: Player,
    pub round: u32,
    pub phase: GamePhase,
    pub winner: Option<Player>,
    pub table: TableSnapshot,
}

impl Match {
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>, target_score: u32) -> Self {
        let player1_name = player1_name.into();
        let player2_name = player2_name.into();
        log::info!("New match: {} vs {}, target {}", player1_name, player2_name, target_score);

        Self {
            player1_name,
            player2_name,
            target_score,
            totals: ScoreResult::default(),
            turn: Player::One,
            round: 1,
            phase: GamePhase::Playing,
            winner: None,
            table: TableSnapshot::starting_layout(),
        }
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        }
    }

    pub fn current_player_name(&self) -> &str {
        self.player_name(self.turn)
    }

    pub fn current_player_balls(&self) -> &[Ball] {
        self.table.balls(self.turn)
    }

    /// Id of the first ball the player on turn has not shot yet
    pub fn next_ball_id(&self) -> Option<&str> {
        self.current_player_balls()
            .iter()
            .find(|b| !b.active)
            .map(|b| b.id.as_str())
    }

    pub fn all_balls_played(&self) -> bool {
        self.table.all_played()
    }

    pub fn is_game_over(&self) -> bool {
        self.totals.player1 >= self.target_score || self.totals.player2 >= self.target_score
    }

    /// Shoot a ball belonging to the player on turn
    pub fn shoot(
        &mut self,
        ball_id: &str,
        angle_degrees: f32,
        power: f32,
        params: &PhysicsParams,
    ) -> Result<Vec<GameEvent>, ShotError> {
        self.shoot_observed(ball_id, angle_degrees, power, params, &mut ())
    }

    /// `shoot`, reporting trajectory details to `observer`
    pub fn shoot_observed<O: ShotObserver + ?Sized>(
        &mut self,
        ball_id: &str,
        angle_degrees: f32,
        power: f32,
        params: &PhysicsParams,
        observer: &mut O,
    ) -> Result<Vec<GameEvent>, ShotError> {
        if let Err(e) = self.check_shot(ball_id) {
            log::warn!("Rejected shot: {}", e);
            return Err(e);
        }

        let ball = self
            .table
            .find_mut(ball_id)
            .ok_or_else(|| ShotError::UnknownBall(ball_id.to_string()))?;
        let outcome = simulate_shot(ball.pos, angle_degrees, power, params, observer);
        ball.place(outcome.position);
        log::debug!("Ball {} shot to {:?}", ball_id, outcome.position);

        let mut events = vec![GameEvent::BallPlaced {
            id: ball_id.to_string(),
            bounces: outcome.bounces,
        }];

        if self.table.all_played() {
            self.complete_round(&mut events);
        } else if self.table.has_unplayed(self.turn.other()) {
            self.turn = self.turn.other();
            events.push(GameEvent::TurnChanged(self.turn));
        }

        Ok(events)
    }

    fn check_shot(&self, ball_id: &str) -> Result<(), ShotError> {
        if self.phase != GamePhase::Playing {
            return Err(ShotError::NotPlaying);
        }
        let (owner, ball) = self
            .table
            .find(ball_id)
            .ok_or_else(|| ShotError::UnknownBall(ball_id.to_string()))?;
        if owner != self.turn {
            return Err(ShotError::NotYourBall(ball_id.to_string()));
        }
        if ball.active {
            return Err(ShotError::AlreadyShot(ball_id.to_string()));
        }
        Ok(())
    }

    fn complete_round(&mut self, events: &mut Vec<GameEvent>) {
        let evaluation = evaluate_round(&self.table);
        self.totals += evaluation.result;

        log::info!(
            "Round {} complete: P1 +{}, P2 +{} (totals {}-{})",
            self.round,
            evaluation.result.player1,
            evaluation.result.player2,
            self.totals.player1,
            self.totals.player2
        );

        events.push(GameEvent::RoundCompleted {
            round: self.round,
            evaluation,
        });
        events.push(GameEvent::ScoreUpdated(self.totals));

        if self.is_game_over() {
            // Player 1 is checked first, matching the scoring order
            let winner = if self.totals.player1 >= self.target_score {
                Player::One
            } else {
                Player::Two
            };
            self.winner = Some(winner);
            self.phase = GamePhase::Finished;
            log::info!("Match finished, winner: {}", self.player_name(winner));
            events.push(GameEvent::GameFinished {
                winner: Some(winner),
            });
        } else {
            self.round += 1;
            self.table.reset_for_new_round();
            self.turn = Player::One;
            events.push(GameEvent::TurnChanged(Player::One));
        }
    }

    /// Restart from round 1 with zero totals, keeping names and target
    pub fn reset(&mut self) {
        self.totals = ScoreResult::default();
        self.turn = Player::One;
        self.round = 1;
        self.phase = GamePhase::Playing;
        self.winner = None;
        self.table.reset_for_new_round();
    }

    /// Stop accepting shots without declaring a winner
    pub fn end(&mut self) -> GameEvent {
        self.phase = GamePhase::Finished;
        log::info!("Match ended early after round {}", self.round);
        GameEvent::GameFinished {
            winner: self.winner,
        }
    }
}
