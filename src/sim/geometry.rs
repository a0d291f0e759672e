//! Overlap geometry for stacked blocks
//!
//! A cut compares two footprints along the axis the active block was moving
//! on. Everything here is pure: same inputs, same outputs.

use serde::{Deserialize, Serialize};

use super::footprint::{Axis, Footprint};

/// Result of comparing the active block against the block beneath it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overlap {
    /// Whether any positive overlap exists (false ends the game)
    pub overlaps: bool,
    /// Overlap length along the cut axis, clamped at 0
    pub amount: f32,
    /// Positional error within tolerance; the stack keeps its full extent
    pub is_perfect: bool,
    /// Overlap still covers the previous block's extent (within tolerance)
    pub is_fully_contained: bool,
}

impl Overlap {
    pub fn miss() -> Self {
        Self {
            overlaps: false,
            amount: 0.0,
            is_perfect: false,
            is_fully_contained: false,
        }
    }

    /// Earns the extra point
    #[inline]
    pub fn is_bonus(&self) -> bool {
        self.is_perfect || self.is_fully_contained
    }
}

/// Classify a cut along one axis
///
/// `extent` is the block size along the cut axis and must be positive.
/// An error of exactly `tolerance` still counts as perfect.
pub fn compute_overlap(active: f32, previous: f32, extent: f32, tolerance: f32) -> Overlap {
    debug_assert!(extent > 0.0, "cut against a collapsed extent");

    let error = (active - previous).abs();
    let amount = (extent - error).max(0.0);
    if amount <= 0.0 {
        return Overlap::miss();
    }

    let is_perfect = error <= tolerance;
    Overlap {
        overlaps: true,
        amount,
        is_perfect,
        is_fully_contained: is_perfect || amount >= extent - tolerance,
    }
}

/// Size carried to the next block along the cut axis
///
/// The overlap amount, or `extent` itself for a perfect cut. Never larger
/// than `extent`.
pub fn new_extent(active: f32, previous: f32, extent: f32, tolerance: f32) -> f32 {
    let overlap = compute_overlap(active, previous, extent, tolerance);
    if overlap.is_perfect {
        extent
    } else {
        overlap.amount
    }
}

/// Center line of the overlap region along the cut axis
#[inline]
pub fn new_box_offset(active: f32, previous: f32) -> f32 {
    previous + (active - previous) / 2.0
}

/// Intersection rectangle of two footprints, if it has positive area
pub fn footprint_overlap(a: &Footprint, b: &Footprint) -> Option<Footprint> {
    let span = |axis: Axis| {
        let lo = a.min(axis).max(b.min(axis));
        let hi = a.max(axis).min(b.max(axis));
        (hi > lo).then_some((lo, hi))
    };
    let (x_lo, x_hi) = span(Axis::X)?;
    let (z_lo, z_hi) = span(Axis::Z)?;

    Some(Footprint::new(
        (x_lo + x_hi) / 2.0,
        (z_lo + z_hi) / 2.0,
        x_hi - x_lo,
        z_hi - z_lo,
    ))
}
