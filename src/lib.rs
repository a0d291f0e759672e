//! Stack Tower - a block stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (overlap geometry, stack controller, oscillation)
//! - `config`: Session configuration loaded from JSON
//! - `error`: Configuration errors
//!
//! Rendering is left to the host: it reads block positions, score and stack
//! height from [`StackGame`] and drains [`GameEvent`]s after each tick.

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, Result};
pub use sim::{
    Axis, Block, CutOutcome, Direction, Footprint, GameEvent, GameStatus, StackGame, TickInput,
    tick,
};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one oscillation step per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Distance the active block travels per tick
    pub const DEFAULT_SPEED: f32 = 2.0;
    /// Oscillation range, shared by both axes
    pub const DEFAULT_LOWER_BOUND: f32 = -80.0;
    pub const DEFAULT_UPPER_BOUND: f32 = 180.0;
    /// Positional error still scored as a perfect cut
    pub const DEFAULT_PERFECT_TOLERANCE: f32 = 1.0;

    /// Block defaults
    pub const DEFAULT_BLOCK_THICKNESS: f32 = 10.0;
    pub const DEFAULT_STARTING_EXTENT: f32 = 50.0;
    /// Foundation center on the horizontal plane
    pub const DEFAULT_ORIGIN: f32 = 50.0;
    pub const DEFAULT_SEED: u64 = 0x5eed;
}

/// Level (center height) of the block sitting `height` blocks above the foundation
#[inline]
pub fn level_for_height(height: u32, thickness: f32) -> f32 {
    thickness / 2.0 + height as f32 * thickness
}
