//! Property tests for shot resolution and scoring

use glam::Vec3;
use proptest::prelude::*;

use center_ball::consts::*;
use center_ball::sim::{
    Award, PhysicsParams, TableSnapshot, evaluate_round, preview_path, score_round, simulate_shot,
};
use center_ball::{clamp_to_boundary, is_within_bounds};

fn params_strategy() -> impl Strategy<Value = PhysicsParams> {
    (0.0f32..=1.0, 0.01f32..1.0, 0.1f32..2.0, 1u32..=10).prop_map(
        |(bounce_coefficient, force_multiplier, movement_multiplier, max_bounces)| PhysicsParams {
            bounce_coefficient,
            force_multiplier,
            movement_multiplier,
            max_bounces,
        },
    )
}

fn in_bounds_start() -> impl Strategy<Value = Vec3> {
    (BOUNDARY_X_MIN..=BOUNDARY_X_MAX, BOUNDARY_Z_MIN..=BOUNDARY_Z_MAX)
        .prop_map(|(x, z)| Vec3::new(x, BALL_Y, z))
}

/// Ten placements near the ring, each with an active flag
fn table_strategy() -> impl Strategy<Value = TableSnapshot> {
    (
        prop::collection::vec((-8.0f32..8.0, -8.0f32..8.0, any::<bool>()), 10),
        (-3.0f32..3.0, -3.0f32..3.0),
    )
        .prop_map(|(spots, (cx, cz))| {
            let mut table = TableSnapshot::starting_layout();
            table.center.pos = Vec3::new(cx, BALL_Y, cz);
            let balls = table.player1.iter_mut().chain(table.player2.iter_mut());
            for (ball, (x, z, active)) in balls.zip(spots) {
                ball.pos = Vec3::new(x, BALL_Y, z);
                ball.active = active;
            }
            table
        })
}

proptest! {
    #[test]
    fn shots_always_rest_in_bounds(
        start in in_bounds_start(),
        angle in -720.0f32..720.0,
        power in 0.0f32..500.0,
        params in params_strategy(),
    ) {
        let outcome = simulate_shot(start, angle, power, &params, &mut ());
        prop_assert!(is_within_bounds(outcome.position));
        prop_assert_eq!(outcome.position.y, start.y);
        prop_assert!(outcome.bounces <= params.max_bounces + 1);
    }

    #[test]
    fn zero_power_returns_clamped_start(
        x in -1000.0f32..1000.0,
        z in -1000.0f32..1000.0,
        angle in -360.0f32..360.0,
    ) {
        let start = Vec3::new(x, BALL_Y, z);
        let outcome = simulate_shot(start, angle, 0.0, &PhysicsParams::default(), &mut ());
        prop_assert_eq!(outcome.position, clamp_to_boundary(start));
        prop_assert_eq!(outcome.steps, 0);
    }

    #[test]
    fn preview_has_expected_shape(
        start in in_bounds_start(),
        angle in -360.0f32..360.0,
        power in 0.0f32..300.0,
        count in 0usize..120,
    ) {
        let points = preview_path(start, angle, power, &PhysicsParams::default(), count);
        prop_assert_eq!(points.len(), count + 1);
        prop_assert_eq!(points[0], start);
        prop_assert!(points.iter().all(|p| is_within_bounds(*p)));
    }

    #[test]
    fn scoring_is_pure(table in table_strategy()) {
        let before = table.clone();
        prop_assert_eq!(score_round(Some(&table)), score_round(Some(&table)));
        prop_assert_eq!(table, before);
    }

    #[test]
    fn each_active_ball_earns_at_most_one_award(table in table_strategy()) {
        let eval = evaluate_round(&table);
        let active = table.player1.iter().chain(table.player2.iter()).filter(|b| b.active).count();
        prop_assert_eq!(eval.assessments.len(), active);

        let closest = eval.assessments.iter().filter(|a| a.award == Some(Award::Closest)).count();
        let any_outside = eval.assessments.iter().any(|a| !a.in_ring);
        prop_assert_eq!(closest, usize::from(any_outside));

        for a in &eval.assessments {
            let points = a.award.map(Award::points).unwrap_or(0);
            prop_assert!(points <= 3);
            if a.award == Some(Award::Closest) {
                prop_assert!(!a.in_ring);
            } else if a.award.is_some() {
                prop_assert!(a.in_ring);
            }
        }

        let summed: u32 = eval.assessments.iter().filter_map(|a| a.award).map(Award::points).sum();
        prop_assert_eq!(summed, eval.result.player1 + eval.result.player2);
    }
}
