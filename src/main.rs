//! Center Ball headless demo
//!
//! Plays a seeded match between two random shooters and prints each round's
//! breakdown.
//!
//! Usage: `center-ball [settings.json] [seed]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use center_ball::Settings;
use center_ball::consts::MAX_ROUNDS;
use center_ball::sim::{
    GameEvent, GamePhase, LogObserver, Match, Player, ShotObserver, preview_path,
    resolve_shot,
};

const DEFAULT_SEED: u64 = 2024;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Center Ball (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    play(&settings, seed);
}

/// Aim roughly at the center ball from the shooter's side
fn random_shot(rng: &mut Pcg32, player: Player) -> (f32, f32) {
    let base = match player {
        Player::One => 180.0,
        Player::Two => 0.0,
    };
    let angle = base + rng.random_range(-25.0..25.0);
    let power = rng.random_range(60.0..130.0);
    (angle, power)
}

fn play(settings: &Settings, seed: u64) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut game = Match::new("Red", "Blue", settings.target_score());
    let mut quiet = ();
    let mut verbose = LogObserver;
    let observer: &mut dyn ShotObserver = if settings.debug_logs {
        &mut verbose
    } else {
        &mut quiet
    };

    println!(
        "{} vs {} to {} points (seed {})",
        game.player1_name, game.player2_name, game.target_score, seed
    );

    while game.phase == GamePhase::Playing {
        if game.round > MAX_ROUNDS {
            game.end();
            break;
        }

        let Some(id) = game.next_ball_id().map(str::to_owned) else {
            break;
        };
        let (angle, power) = random_shot(&mut rng, game.turn);

        if settings.show_preview && game.round == 1 && id == "p1_ball_0" {
            if let Some((_, ball)) = game.table.find(&id) {
                let path = preview_path(ball.pos, angle, power, &settings.physics, settings.preview_points);
                let rest = resolve_shot(ball.pos, angle, power, &settings.physics);
                if let Some(last) = path.last() {
                    log::info!(
                        "Preview for {} ends at ({:.2}, {:.2}); shot rests at ({:.2}, {:.2})",
                        id,
                        last.x,
                        last.z,
                        rest.x,
                        rest.z
                    );
                }
            }
        }

        let events = match game.shoot_observed(&id, angle, power, &settings.physics, &mut *observer) {
            Ok(events) => events,
            Err(e) => {
                log::error!("{}", e);
                break;
            }
        };

        for event in events {
            match event {
                GameEvent::RoundCompleted { round, evaluation } => {
                    println!("\n--- Round {} ---\n{}", round, evaluation);
                }
                GameEvent::ScoreUpdated(totals) => {
                    println!("Totals: {}-{}", totals.player1, totals.player2);
                }
                GameEvent::GameFinished { winner } => match winner {
                    Some(player) => println!("\nWinner: {}", game.player_name(player)),
                    None => println!("\nNo winner"),
                },
                GameEvent::BallPlaced { .. } | GameEvent::TurnChanged(_) => {}
            }
        }
    }

    if game.winner.is_none() {
        println!(
            "\nStopped after {} rounds at {}-{}",
            game.round, game.totals.player1, game.totals.player2
        );
    }
}
