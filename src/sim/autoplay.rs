//! Idle/demo mode player
//!
//! Aims at the block beneath with a seeded random error and cuts when the
//! active block passes its aim point. Misses happen once the error outgrows
//! the narrowing stack.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::controller::StackGame;
use super::tick::TickInput;

pub struct AutoPlayer {
    rng: Pcg32,
    /// Largest aim error, in world units
    max_error: f32,
    /// Error for the current turn
    aim_error: f32,
}

impl AutoPlayer {
    pub fn new(seed: u64, max_error: f32) -> Self {
        let mut player = Self {
            rng: Pcg32::seed_from_u64(seed),
            max_error: max_error.abs(),
            aim_error: 0.0,
        };
        player.reroll();
        player
    }

    /// Error applied to the current turn's aim
    pub fn aim_error(&self) -> f32 {
        self.aim_error
    }

    /// Input for the next tick
    pub fn decide(&mut self, game: &StackGame) -> TickInput {
        let axis = game.current_axis();
        let Some(active) = game.active_block(axis) else {
            return TickInput::default();
        };

        let target = game.previous_block(axis).coord(axis) + self.aim_error;
        // Within half a step means no closer position is coming this pass
        let window = game.config().speed / 2.0;
        if (active.coord(axis) - target).abs() <= window {
            self.reroll();
            TickInput::cut()
        } else {
            TickInput::default()
        }
    }

    fn reroll(&mut self) {
        self.aim_error = if self.max_error > 0.0 {
            self.rng.random_range(-self.max_error..=self.max_error)
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::tick::tick;
    use crate::sim::{CutOutcome, GameStatus};

    fn play(seed: u64, max_error: f32, max_ticks: usize) -> StackGame {
        let mut game = StackGame::new(GameConfig::default()).unwrap();
        let mut player = AutoPlayer::new(seed, max_error);
        for _ in 0..max_ticks {
            let input = player.decide(&game);
            tick(&mut game, &input);
            if game.status() == GameStatus::GameOver {
                break;
            }
        }
        game
    }

    #[test]
    fn test_zero_error_stacks_perfectly() {
        let game = play(1, 0.0, 5_000);
        assert_eq!(game.status(), GameStatus::Running);
        assert!(game.stack_height() > 10);
        // Every cut was perfect
        assert_eq!(game.score(), game.stack_height() * 2);
        assert_eq!(game.state().axis_x.extent, 50.0);
        assert_eq!(game.state().axis_z.extent, 50.0);
    }

    #[test]
    fn test_large_error_eventually_misses() {
        let game = play(7, 30.0, 200_000);
        assert_eq!(game.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = play(99, 12.0, 20_000);
        let b = play(99, 12.0, 20_000);
        assert_eq!(a.score(), b.score());
        assert_eq!(a.stack_height(), b.stack_height());
        assert_eq!(a.state().axis_x, b.state().axis_x);
    }

    #[test]
    fn test_cut_requested_near_target() {
        let mut game = StackGame::new(GameConfig::default()).unwrap();
        let mut player = AutoPlayer::new(3, 0.0);
        // First active block starts on top of the foundation
        let input = player.decide(&game);
        assert!(input.cut);
        tick(&mut game, &input);
        assert_eq!(game.stack_height(), 1);

        // Next block spawns at the lower bound, far from the target
        assert!(player.decide(&game).is_idle());
        assert_eq!(game.cut(), CutOutcome::Missed);
    }
}
