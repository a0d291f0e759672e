//! Back-and-forth motion of the active block
//!
//! The driver keeps no state of its own: the controller hands it the active
//! coordinate and direction each tick and stores what comes back. Given the
//! same start, bounds and speed the position sequence is always the same.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Travel direction along the active axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Increasing => 1.0,
            Direction::Decreasing => -1.0,
        }
    }
}

/// Bounce motion between two bounds, identical for both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillationDriver {
    pub speed: f32,
    pub lower_bound: f32,
    pub upper_bound: f32,
}

impl OscillationDriver {
    pub fn new(speed: f32, lower_bound: f32, upper_bound: f32) -> Self {
        Self {
            speed,
            lower_bound,
            upper_bound,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.speed, config.lower_bound, config.upper_bound)
    }

    /// Where newly spawned active blocks begin
    #[inline]
    pub fn start_position(&self) -> f32 {
        self.lower_bound
    }

    /// Advance one tick
    ///
    /// Reaching or passing a bound clamps to it and reverses direction on
    /// the same step, so the block rests exactly on the bound for one tick.
    pub fn step(&self, coord: f32, direction: Direction) -> (f32, Direction) {
        let next = coord + direction.sign() * self.speed;
        if next >= self.upper_bound {
            (self.upper_bound, Direction::Decreasing)
        } else if next <= self.lower_bound {
            (self.lower_bound, Direction::Increasing)
        } else {
            (next, direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounce_sequence() {
        let driver = OscillationDriver::new(3.0, 0.0, 10.0);
        let mut coord = driver.start_position();
        let mut direction = Direction::Increasing;
        let mut seen = Vec::new();
        for _ in 0..9 {
            (coord, direction) = driver.step(coord, direction);
            seen.push((coord, direction));
        }
        use Direction::*;
        assert_eq!(
            seen,
            vec![
                (3.0, Increasing),
                (6.0, Increasing),
                (9.0, Increasing),
                (10.0, Decreasing),
                (7.0, Decreasing),
                (4.0, Decreasing),
                (1.0, Decreasing),
                (0.0, Increasing),
                (3.0, Increasing),
            ]
        );
    }

    #[test]
    fn test_from_config() {
        let driver = OscillationDriver::from_config(&GameConfig::default());
        assert_eq!(driver.start_position(), crate::consts::DEFAULT_LOWER_BOUND);
        assert_eq!(driver.speed, crate::consts::DEFAULT_SPEED);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Increasing.reversed(), Direction::Decreasing);
        assert_eq!(Direction::Decreasing.sign(), -1.0);
    }

    proptest! {
        #[test]
        fn stays_within_bounds_and_flips_only_at_bounds(
            lower in -200.0f32..0.0,
            span in 1.0f32..300.0,
            speed in 0.1f32..20.0,
            start in 0.0f32..1.0,
            increasing in any::<bool>(),
            ticks in 1usize..500,
        ) {
            let upper = lower + span;
            let driver = OscillationDriver::new(speed, lower, upper);
            let mut coord = lower + start * span;
            let mut direction = if increasing { Direction::Increasing } else { Direction::Decreasing };

            for _ in 0..ticks {
                let (next, next_direction) = driver.step(coord, direction);
                prop_assert!(next >= lower && next <= upper);
                if next_direction != direction {
                    prop_assert!(next == lower || next == upper);
                } else {
                    prop_assert!(next != lower && next != upper);
                }
                coord = next;
                direction = next_direction;
            }
        }

        #[test]
        fn any_start_steps_back_into_range(
            lower in -200.0f32..0.0,
            span in 1.0f32..300.0,
            speed in 0.1f32..20.0,
            start in -1000.0f32..1000.0,
            increasing in any::<bool>(),
        ) {
            let upper = lower + span;
            let driver = OscillationDriver::new(speed, lower, upper);
            let direction = if increasing { Direction::Increasing } else { Direction::Decreasing };

            let (next, next_direction) = driver.step(start, direction);
            prop_assert!(next >= lower && next <= upper);
            if start > upper {
                prop_assert_eq!((next, next_direction), (upper, Direction::Decreasing));
            }
            if start < lower {
                prop_assert_eq!((next, next_direction), (lower, Direction::Increasing));
            }
        }

        #[test]
        fn same_inputs_same_sequence(
            speed in 0.1f32..20.0,
            ticks in 1usize..200,
        ) {
            let driver = OscillationDriver::new(speed, -80.0, 180.0);
            let run = || {
                let mut state = (50.0f32, Direction::Decreasing);
                (0..ticks)
                    .map(|_| {
                        state = driver.step(state.0, state.1);
                        state
                    })
                    .collect::<Vec<_>>()
            };
            prop_assert_eq!(run(), run());
        }
    }
}
