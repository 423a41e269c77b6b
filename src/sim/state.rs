//! Table state and core value types
//!
//! Everything the scoring pass reads and the match mutates lives here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{distance_from_origin, is_in_ring, is_touching, planar_distance};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Starting line for this player's balls
    pub fn start_z(self) -> f32 {
        match self {
            Player::One => PLAYER1_START_Z,
            Player::Two => PLAYER2_START_Z,
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

/// Who a ball belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// The center ball; a scoring reference, never a scoring subject
    Neutral,
    Player(Player),
}

/// A ball on the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: String,
    /// y is a visual offset; physics and scoring use x-z only
    pub pos: Vec3,
    /// Set once the ball has been shot this round
    pub active: bool,
    pub owner: Owner,
}

impl Ball {
    pub fn new(id: impl Into<String>, pos: Vec3, owner: Owner) -> Self {
        Self {
            id: id.into(),
            pos,
            active: false,
            owner,
        }
    }

    /// Commit a resolved shot: move the ball and mark it played
    pub fn place(&mut self, pos: Vec3) {
        self.pos = pos;
        self.active = true;
    }

    pub fn distance_to(&self, other: &Ball) -> f32 {
        planar_distance(self.pos, other.pos)
    }

    pub fn distance_from_center(&self) -> f32 {
        distance_from_origin(self.pos)
    }

    pub fn is_touching(&self, other: &Ball) -> bool {
        is_touching(self.pos, other.pos)
    }

    pub fn is_in_ring(&self) -> bool {
        is_in_ring(self.pos)
    }
}

/// Starting position of a player's `index`-th ball
pub fn start_position(player: Player, index: usize) -> Vec3 {
    let x_offset = (index as f32 - 2.0) * (PLAYER_BALL_RADIUS * 3.0);
    Vec3::new(x_offset, BALL_Y, player.start_z())
}

/// Center ball plus both players' balls, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub center: Ball,
    pub player1: Vec<Ball>,
    pub player2: Vec<Ball>,
}

impl TableSnapshot {
    /// Build a snapshot from explicit balls (order is kept)
    pub fn new(center_pos: Vec3, player1: Vec<Ball>, player2: Vec<Ball>) -> Self {
        Self {
            center: Ball::new("center", center_pos, Owner::Neutral),
            player1,
            player2,
        }
    }

    /// Round-start layout: center ball at the origin, balls on each start line
    pub fn starting_layout() -> Self {
        let balls = |player: Player| -> Vec<Ball> {
            (0..BALLS_PER_PLAYER)
                .map(|i| {
                    Ball::new(
                        format!("{}_ball_{}", player.id_prefix(), i),
                        start_position(player, i),
                        Owner::Player(player),
                    )
                })
                .collect()
        };
        Self::new(Vec3::new(0.0, BALL_Y, 0.0), balls(Player::One), balls(Player::Two))
    }

    pub fn balls(&self, player: Player) -> &[Ball] {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub fn balls_mut(&mut self, player: Player) -> &mut Vec<Ball> {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Player 1's balls in list order, then player 2's
    pub fn evaluation_order(&self) -> impl Iterator<Item = (Player, &Ball)> {
        self.player1
            .iter()
            .map(|b| (Player::One, b))
            .chain(self.player2.iter().map(|b| (Player::Two, b)))
    }

    /// Locate an owned ball by id
    pub fn find(&self, id: &str) -> Option<(Player, &Ball)> {
        self.evaluation_order().find(|(_, b)| b.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Ball> {
        self.player1
            .iter_mut()
            .chain(self.player2.iter_mut())
            .find(|b| b.id == id)
    }

    pub fn all_played(&self) -> bool {
        self.evaluation_order().all(|(_, b)| b.active)
    }

    pub fn has_unplayed(&self, player: Player) -> bool {
        self.balls(player).iter().any(|b| !b.active)
    }

    /// Put every ball back on its start line with `active = false`
    pub fn reset_for_new_round(&mut self) {
        self.center.pos = Vec3::new(0.0, BALL_Y, 0.0);
        for player in [Player::One, Player::Two] {
            for (i, ball) in self.balls_mut(player).iter_mut().enumerate() {
                ball.pos = start_position(player, i);
                ball.active = false;
            }
        }
    }
}

impl Default for TableSnapshot {
    fn default() -> Self {
        Self::starting_layout()
    }
}
