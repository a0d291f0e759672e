//! Stack controller
//!
//! Owns the game state and runs turns: a cut either settles the active block
//! and spawns the next one on the other axis, or ends the run.

use serde::{Deserialize, Serialize};

use super::footprint::Axis;
use super::geometry::{Overlap, compute_overlap, new_box_offset, new_extent};
use super::oscillation::{Direction, OscillationDriver};
use super::state::{Block, GameEvent, GameState, GameStatus};
use crate::config::GameConfig;
use crate::error::Result;

/// A successful cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Axis the cut was made on
    pub axis: Axis,
    /// The newly settled block
    pub block: Block,
    pub overlap: Overlap,
}

/// What a cut did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutOutcome {
    Settled(Placement),
    /// No overlap; the game is over
    Missed,
    /// Cut arrived after game over
    Ignored,
}

/// The stacking game: state machine plus oscillation driver
#[derive(Debug, Clone)]
pub struct StackGame {
    config: GameConfig,
    driver: OscillationDriver,
    state: GameState,
    events: Vec<GameEvent>,
    /// Held by the host, e.g. during its settle animation
    paused: bool,
}

impl StackGame {
    /// Validate `config` and start a fresh game
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let driver = OscillationDriver::from_config(&config);
        let state = GameState::new(&config);
        Ok(Self {
            config,
            driver,
            state,
            events: Vec::new(),
            paused: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn stack_height(&self) -> u32 {
        self.state.height
    }

    pub fn current_axis(&self) -> Axis {
        self.state.current_axis
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn active_block(&self, axis: Axis) -> Option<&Block> {
        self.state.axis(axis).active.as_ref()
    }

    pub fn previous_block(&self, axis: Axis) -> &Block {
        &self.state.axis(axis).previous
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Hold the active block in place
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the active block by one tick
    ///
    /// Returns false (and changes nothing) after game over or while paused.
    pub fn step(&mut self) -> bool {
        if !self.state.is_running() || self.paused {
            return false;
        }

        let axis = self.state.current_axis;
        let direction = self.state.direction;
        let Some(active) = self.state.axis_mut(axis).active.as_mut() else {
            return false;
        };

        let (coord, direction) = self.driver.step(active.coord(axis), direction);
        active.footprint = active.footprint.with_coord(axis, coord);
        self.state.direction = direction;
        true
    }

    /// Freeze the active block and compare it with the block beneath
    pub fn cut(&mut self) -> CutOutcome {
        if !self.state.is_running() {
            log::debug!("Cut ignored after game over");
            return CutOutcome::Ignored;
        }

        let axis = self.state.current_axis;
        let cross = axis.other();
        let extent = self.state.axis(cross).extent;
        let previous = self.state.axis(axis).previous;
        let Some(active) = self.state.axis(axis).active else {
            return CutOutcome::Ignored;
        };

        let active_coord = active.coord(axis);
        let previous_coord = previous.coord(axis);
        let tolerance = self.config.perfect_tolerance;
        let overlap = compute_overlap(active_coord, previous_coord, extent, tolerance);

        if !overlap.overlaps {
            self.end_game(axis);
            return CutOutcome::Missed;
        }

        let center = if overlap.is_perfect {
            previous_coord
        } else {
            new_box_offset(active_coord, previous_coord)
        };
        let size = new_extent(active_coord, previous_coord, extent, tolerance);
        let footprint = active.footprint.with_coord(axis, center).with_extent(axis, size);
        let settled = Block::settled(footprint, active.level, active.tint);

        let next = Block::active(
            footprint.with_coord(cross, self.driver.start_position()),
            settled.level + self.config.block_thickness,
            self.state.rng.next_tint(),
        );

        // Commit
        let finished = self.state.axis_mut(axis);
        finished.previous = settled;
        finished.active = None;

        let live = self.state.axis_mut(cross);
        live.previous = settled;
        live.active = Some(next);
        live.extent = size;

        self.state.height += 1;
        self.state.score += 1 + u32::from(overlap.is_bonus());
        self.state.direction = Direction::Increasing;
        self.state.current_axis = cross;

        log::debug!(
            "Settled on {} axis: center {:.2}, size {:.2}, height {}, score {}{}",
            axis.as_str(),
            center,
            size,
            self.state.height,
            self.state.score,
            if overlap.is_perfect { " (perfect)" } else { "" }
        );

        self.events.push(GameEvent::BlockSettled {
            block: settled,
            axis,
            bonus: overlap.is_bonus(),
            perfect: overlap.is_perfect,
            height: self.state.height,
            score: self.state.score,
        });

        CutOutcome::Settled(Placement {
            axis,
            block: settled,
            overlap,
        })
    }

    /// Start over from the configured layout. Valid in any state.
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.config);
        self.paused = false;
        log::info!("Game restarted");
        self.events.push(GameEvent::Restarted);
    }

    fn end_game(&mut self, axis: Axis) {
        self.state.axis_mut(axis).active = None;
        self.state.status = GameStatus::GameOver;
        log::info!(
            "Missed on {} axis: height {}, score {}",
            axis.as_str(),
            self.state.height,
            self.state.score
        );
        self.events.push(GameEvent::GameOver {
            height: self.state.height,
            score: self.state.score,
        });
    }
}
