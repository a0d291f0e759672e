//! Stack Tower entry point
//!
//! Headless runner: plays sessions with the autoplayer and prints every game
//! event as a JSON line on stdout.
//!
//! Usage: `stack-tower [CONFIG.json] [SESSIONS]`

use anyhow::{Context, Result};

use stack_tower::consts::SIM_DT;
use stack_tower::sim::{AutoPlayer, FixedStep, GameStatus, StackGame};
use stack_tower::GameConfig;

/// Frames before a session is abandoned
const MAX_FRAMES_PER_SESSION: u32 = 1_000_000;
/// Autoplayer aim error as a fraction of the starting extent
const AIM_ERROR_FRACTION: f32 = 0.2;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Stack Tower (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => GameConfig::default(),
    };
    let sessions: u32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid session count {raw:?}"))?,
        None => 1,
    };

    let max_error = config.starting_extent * AIM_ERROR_FRACTION;
    let mut player = AutoPlayer::new(config.seed, max_error);
    let mut game = StackGame::new(config).context("invalid configuration")?;
    let mut clock = FixedStep::new();

    for session in 0..sessions {
        if session > 0 {
            game.restart();
        }
        log::info!("Session {} started", session + 1);

        let mut frames = 0;
        while game.status() == GameStatus::Running && frames < MAX_FRAMES_PER_SESSION {
            let input = player.decide(&game);
            clock.advance(&mut game, &input, SIM_DT);
            for event in game.drain_events() {
                println!("{}", serde_json::to_string(&event)?);
            }
            frames += 1;
        }
        for event in game.drain_events() {
            println!("{}", serde_json::to_string(&event)?);
        }

        log::info!(
            "Session {} finished after {} frames: height {}, score {}, top block area {:.1}",
            session + 1,
            frames,
            game.stack_height(),
            game.score(),
            game.state().top_block().footprint.area()
        );
    }

    Ok(())
}
