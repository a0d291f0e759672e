//! Fixed timestep simulation tick
//!
//! Player inputs are applied at tick boundaries, never in the middle of a
//! position update.

use super::controller::StackGame;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Cut the active block (click/tap/space)
    pub cut: bool,
    /// Start a new game
    pub restart: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn cut() -> Self {
        Self {
            cut: true,
            ..Default::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }

    /// True when nothing was requested
    pub fn is_idle(&self) -> bool {
        !(self.cut || self.restart || self.pause)
    }
}

/// Advance the game by one fixed timestep
///
/// Order: restart, pause toggle, cut, then one oscillation step. Returns
/// whether the active block moved.
pub fn tick(game: &mut StackGame, input: &TickInput) -> bool {
    if input.restart {
        game.restart();
    }

    if input.pause {
        if game.is_paused() {
            game.resume();
        } else {
            game.pause();
        }
    }

    if input.cut {
        game.cut();
    }

    game.step()
}

/// Turns variable frame time into whole simulation ticks
///
/// One-shot inputs wait here until a tick actually runs, so a cut made on a
/// frame shorter than `SIM_DT` lands on the next tick boundary.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    pending: TickInput,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed time and return how many ticks to run
    ///
    /// A long stall contributes at most `MAX_SUBSTEPS` ticks.
    pub fn consume(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_SUBSTEPS as f32 * SIM_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Inputs queued for the next tick
    pub fn pending(&self) -> &TickInput {
        &self.pending
    }

    /// Queue `input` and run one frame's worth of ticks
    ///
    /// Queued one-shot inputs apply to the first tick that runs and are
    /// cleared only then.
    pub fn advance(&mut self, game: &mut StackGame, input: &TickInput, frame_dt: f32) -> u32 {
        self.pending.cut |= input.cut;
        self.pending.restart |= input.restart;
        self.pending.pause |= input.pause;

        let ticks = self.consume(frame_dt);
        for _ in 0..ticks {
            let input = std::mem::take(&mut self.pending);
            tick(game, &input);
        }
        ticks
    }
}
