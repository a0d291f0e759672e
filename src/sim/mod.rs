//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod controller;
pub mod footprint;
pub mod geometry;
pub mod oscillation;
pub mod state;
pub mod tick;

pub use autoplay::AutoPlayer;
pub use controller::{CutOutcome, Placement, StackGame};
pub use footprint::{Axis, Footprint};
pub use geometry::{Overlap, compute_overlap, footprint_overlap, new_box_offset, new_extent};
pub use oscillation::{Direction, OscillationDriver};
pub use state::{AxisState, Block, BlockRole, GameEvent, GameState, GameStatus, RngState};
pub use tick::{FixedStep, TickInput, tick};
