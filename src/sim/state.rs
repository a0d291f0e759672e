//! Game state and core simulation types
//!
//! Everything the controller mutates lives here as plain values. Renderers
//! read it; they never hold references back into it.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::footprint::{Axis, Footprint};
use super::oscillation::Direction;
use crate::config::GameConfig;
use crate::level_for_height;

/// Whether the game still accepts cuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    /// Run ended on a miss; only a restart leaves this state
    GameOver,
}

/// Role of a block in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockRole {
    /// Part of the tower, never moves again
    Settled,
    /// Oscillating, waiting for the player's cut
    Active,
}

/// A block: footprint plus vertical level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub footprint: Footprint,
    /// Center height of the block
    pub level: f32,
    pub role: BlockRole,
    /// Hue in degrees [0, 360), kept when the block settles
    pub tint: f32,
}

impl Block {
    pub fn settled(footprint: Footprint, level: f32, tint: f32) -> Self {
        Self {
            footprint,
            level,
            role: BlockRole::Settled,
            tint,
        }
    }

    pub fn active(footprint: Footprint, level: f32, tint: f32) -> Self {
        Self {
            footprint,
            level,
            role: BlockRole::Active,
            tint,
        }
    }

    /// Center in world space (y is up)
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.footprint.x, self.level, self.footprint.z)
    }

    /// Full size in world space
    pub fn size(&self, thickness: f32) -> Vec3 {
        Vec3::new(self.footprint.width, thickness, self.footprint.depth)
    }

    /// Coordinate along `axis`
    #[inline]
    pub fn coord(&self, axis: Axis) -> f32 {
        self.footprint.coord(axis)
    }
}

/// Per-axis bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    /// Settled block beneath the cut on this axis
    pub previous: Block,
    /// Block moving along this axis, if this axis is live
    pub active: Option<Block>,
    /// Size carried forward for the *other* axis's cut: the X state holds
    /// the stack's depth (Z size), the Z state holds its width (X size)
    pub extent: f32,
}

impl AxisState {
    fn idle(previous: Block, extent: f32) -> Self {
        Self {
            previous,
            active: None,
            extent,
        }
    }
}

/// Seed and stream counter for block tints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Next tint hue; each call consumes one stream
    pub fn next_tint(&mut self) -> f32 {
        let mut rng = Pcg32::seed_from_u64(self.seed ^ self.stream.rotate_left(32));
        self.stream += 1;
        rng.random_range(0.0..360.0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub axis_x: AxisState,
    pub axis_z: AxisState,
    /// Axis the active block moves on this turn
    pub current_axis: Axis,
    /// Blocks placed on top of the foundation
    pub height: u32,
    /// One per successful cut plus one per bonus
    pub score: u32,
    pub status: GameStatus,
    /// Direction of the active block
    pub direction: Direction,
    pub rng: RngState,
}

impl GameState {
    /// Fresh game: foundation block under both axes, first active block
    /// directly above it on X
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = RngState::new(config.seed);
        let thickness = config.block_thickness;
        let footprint = Footprint::square(config.origin_x, config.origin_z, config.starting_extent);

        let foundation = Block::settled(footprint, level_for_height(0, thickness), rng.next_tint());
        let first = Block::active(footprint, level_for_height(1, thickness), rng.next_tint());

        let mut axis_x = AxisState::idle(foundation, config.starting_extent);
        axis_x.active = Some(first);
        let axis_z = AxisState::idle(foundation, config.starting_extent);

        Self {
            axis_x,
            axis_z,
            current_axis: Axis::X,
            height: 0,
            score: 0,
            status: GameStatus::Running,
            direction: Direction::Decreasing,
            rng,
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.axis_x,
            Axis::Z => &self.axis_z,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.axis_x,
            Axis::Z => &mut self.axis_z,
        }
    }

    /// The block currently oscillating, if any
    pub fn active_block(&self) -> Option<&Block> {
        self.axis(self.current_axis).active.as_ref()
    }

    /// Topmost settled block
    pub fn top_block(&self) -> &Block {
        &self.axis(self.current_axis).previous
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

/// Notifications for the presentation layer, queued in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A cut landed and `block` joined the tower
    BlockSettled {
        block: Block,
        axis: Axis,
        /// Extra point awarded (perfect or fully contained)
        bonus: bool,
        perfect: bool,
        height: u32,
        score: u32,
    },
    /// A cut missed; the run is over
    GameOver { height: u32, score: u32 },
    /// State was reset to a fresh game
    Restarted,
}
