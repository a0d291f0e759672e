//! Axis-aligned footprints on the horizontal plane
//!
//! A footprint is defined by:
//! - x, z: center on the horizontal plane
//! - width: extent along X
//! - depth: extent along Z
//!
//! Footprints are plain `Copy` values. Every update returns a new footprint.

use serde::{Deserialize, Serialize};

/// Horizontal axis a block moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The axis used on the following turn
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Z => "z",
        }
    }
}

/// An axis-aligned rectangle on the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Center on the X axis
    pub x: f32,
    /// Center on the Z axis
    pub z: f32,
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub depth: f32,
}

impl Footprint {
    pub fn new(x: f32, z: f32, width: f32, depth: f32) -> Self {
        Self { x, z, width, depth }
    }

    /// Square footprint centered on (x, z)
    pub fn square(x: f32, z: f32, extent: f32) -> Self {
        Self::new(x, z, extent, extent)
    }

    /// Center coordinate along `axis`
    #[inline]
    pub fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    /// Size along `axis`
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    /// Copy with the center moved along `axis`
    pub fn with_coord(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Z => Self { z: value, ..self },
        }
    }

    /// Copy with the size along `axis` replaced
    pub fn with_extent(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Self { width: value, ..self },
            Axis::Z => Self { depth: value, ..self },
        }
    }

    /// Lowest edge along `axis`
    #[inline]
    pub fn min(&self, axis: Axis) -> f32 {
        self.coord(axis) - self.extent(axis) / 2.0
    }

    /// Highest edge along `axis`
    #[inline]
    pub fn max(&self, axis: Axis) -> f32 {
        self.coord(axis) + self.extent(axis) / 2.0
    }

    /// Horizontal surface left for the next block
    pub fn area(&self) -> f32 {
        self.width * self.depth
    }
}
