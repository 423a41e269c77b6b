//! Arcade shot trajectories
//!
//! A shot is an angle (degrees, 0 points toward +z, 90 toward +x) and a power
//! (percent). Both are turned into a planar velocity that is stepped against
//! the table walls until the ball runs out of speed or bounce budget.
//!
//! Reflection is per axis: a wall only flips the velocity component that
//! crossed it, scaled by the bounce coefficient. Velocity decays by a fixed
//! factor after every step whether or not a wall was hit.
//!
//! Planar vectors here are `Vec2` with `.x` = table x and `.y` = table z.

use glam::{Vec2, Vec3};

use super::params::PhysicsParams;
use crate::consts::*;
use crate::{clamp_to_boundary, planar};

/// Velocity multiplier applied after every step
pub const VELOCITY_DECAY: f32 = 0.95;
/// The ball keeps moving while either axis speed is above this
pub const STOP_SPEED: f32 = 0.5;
/// Preview resolution used by the aiming line
pub const DEFAULT_PREVIEW_POINTS: usize = 50;

/// Table wall hit during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    /// x = BOUNDARY_X_MIN
    Left,
    /// x = BOUNDARY_X_MAX
    Right,
    /// z = BOUNDARY_Z_MIN
    Back,
    /// z = BOUNDARY_Z_MAX
    Front,
}

/// Final state of a resolved shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    /// Rest position, inside the boundary rectangle for finite input
    pub position: Vec3,
    /// Bounce events registered (one per axis reflection)
    pub bounces: u32,
    /// Integration steps taken
    pub steps: u32,
}

/// Hooks into shot resolution
///
/// Outcomes never depend on the observer. `()` ignores everything.
pub trait ShotObserver {
    fn on_step(&mut self, _pos: Vec3, _vel: Vec2) {}
    fn on_bounce(&mut self, _wall: Wall, _pos: Vec3) {}
    fn on_settle(&mut self, _outcome: &ShotOutcome) {}
}

impl ShotObserver for () {}

/// Forwards bounces and the settle point to `log::debug!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ShotObserver for LogObserver {
    fn on_bounce(&mut self, wall: Wall, pos: Vec3) {
        log::debug!("Bounce off {:?} wall at ({:.2}, {:.2})", wall, pos.x, pos.z);
    }

    fn on_settle(&mut self, outcome: &ShotOutcome) {
        let p = outcome.position;
        log::debug!(
            "Shot settled at ({:.2}, {:.2}, {:.2}) after {} steps, {} bounces",
            p.x,
            p.y,
            p.z,
            outcome.steps,
            outcome.bounces
        );
    }
}

/// Planar launch velocity for a shot
pub fn initial_velocity(angle_degrees: f32, power: f32, params: &PhysicsParams) -> Vec2 {
    let radians = angle_degrees.to_radians();
    let force = power * params.force_multiplier;
    Vec2::new(
        radians.sin() * force * params.movement_multiplier,
        radians.cos() * force * params.movement_multiplier,
    )
}

/// Resolve a shot to its rest position
pub fn resolve_shot(start: Vec3, angle_degrees: f32, power: f32, params: &PhysicsParams) -> Vec3 {
    simulate_shot(start, angle_degrees, power, params, &mut ()).position
}

/// Resolve a shot, reporting steps and bounces to `observer`
///
/// Stops when the bounce budget is spent or both axis speeds drop to
/// `STOP_SPEED` or below. A single step can register two bounces (a corner),
/// so `bounces` may end one above `max_bounces`.
pub fn simulate_shot<O: ShotObserver + ?Sized>(
    start: Vec3,
    angle_degrees: f32,
    power: f32,
    params: &PhysicsParams,
    observer: &mut O,
) -> ShotOutcome {
    let mut vel = initial_velocity(angle_degrees, power, params);
    let mut pos = planar(start);
    let mut bounces = 0u32;
    let mut steps = 0u32;

    while bounces < params.max_bounces && is_moving(vel) {
        let walls = advance(&mut pos, &mut vel, 1.0, params.bounce_coefficient);
        steps += 1;

        let pos3 = Vec3::new(pos.x, start.y, pos.y);
        for wall in walls.into_iter().flatten() {
            bounces += 1;
            observer.on_bounce(wall, pos3);
        }
        observer.on_step(pos3, vel);
    }

    // NaN speed fails the stop check; surface it rather than report a dud shot
    let pos = Vec2::select(vel.is_nan_mask(), vel, pos);

    let outcome = ShotOutcome {
        position: clamp_to_boundary(Vec3::new(pos.x, start.y, pos.y)),
        bounces,
        steps,
    };
    observer.on_settle(&outcome);
    outcome
}

/// Sample a display path for a shot
///
/// Returns `point_count + 1` points starting at `start`. The launch velocity is
/// split into `point_count` sub-steps with the same reflect and decay rules but
/// no bounce cap or early stop, so the last point is generally not where
/// `resolve_shot` puts the ball.
pub fn preview_path(
    start: Vec3,
    angle_degrees: f32,
    power: f32,
    params: &PhysicsParams,
    point_count: usize,
) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(point_count + 1);
    points.push(start);

    let mut vel = initial_velocity(angle_degrees, power, params);
    let mut pos = planar(start);
    let divisor = point_count as f32;

    for _ in 0..point_count {
        advance(&mut pos, &mut vel, divisor, params.bounce_coefficient);
        points.push(Vec3::new(pos.x, start.y, pos.y));
    }

    points
}

#[inline]
fn is_moving(vel: Vec2) -> bool {
    vel.x.abs() > STOP_SPEED || vel.y.abs() > STOP_SPEED
}

/// One step: move by `vel / divisor`, reflect each axis independently, decay
fn advance(pos: &mut Vec2, vel: &mut Vec2, divisor: f32, bounce: f32) -> [Option<Wall>; 2] {
    let mut next = *pos + *vel / divisor;

    let hit_x = reflect_axis(
        &mut next.x,
        &mut vel.x,
        (BOUNDARY_X_MIN, BOUNDARY_X_MAX),
        (Wall::Left, Wall::Right),
        bounce,
    );
    let hit_z = reflect_axis(
        &mut next.y,
        &mut vel.y,
        (BOUNDARY_Z_MIN, BOUNDARY_Z_MAX),
        (Wall::Back, Wall::Front),
        bounce,
    );

    *pos = next;
    *vel *= VELOCITY_DECAY;
    [hit_x, hit_z]
}

/// Clamp one coordinate to the side it crossed and reflect that axis' speed
fn reflect_axis(
    coord: &mut f32,
    vel: &mut f32,
    (min, max): (f32, f32),
    (min_wall, max_wall): (Wall, Wall),
    bounce: f32,
) -> Option<Wall> {
    let wall = if *coord < min {
        *coord = min;
        min_wall
    } else if *coord > max {
        *coord = max;
        max_wall
    } else {
        return None;
    };
    *vel = -*vel * bounce;
    Some(wall)
}
