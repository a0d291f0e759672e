//! Session configuration
//!
//! Supplied once at construction and validated up front. The simulation
//! assumes these values hold for the whole session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Tunable values for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Motion ===
    /// Distance the active block travels per tick
    pub speed: f32,
    /// Low end of the oscillation range; new active blocks spawn here
    pub lower_bound: f32,
    /// High end of the oscillation range
    pub upper_bound: f32,

    // === Scoring ===
    /// Largest positional error still scored as a perfect cut (inclusive)
    pub perfect_tolerance: f32,

    // === Blocks ===
    /// Vertical size shared by every block
    pub block_thickness: f32,
    /// Width and depth of the foundation block
    pub starting_extent: f32,
    /// Foundation center on the X axis
    pub origin_x: f32,
    /// Foundation center on the Z axis
    pub origin_z: f32,

    /// Seed for block tints
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,

            perfect_tolerance: DEFAULT_PERFECT_TOLERANCE,

            block_thickness: DEFAULT_BLOCK_THICKNESS,
            starting_extent: DEFAULT_STARTING_EXTENT,
            origin_x: DEFAULT_ORIGIN,
            origin_z: DEFAULT_ORIGIN,

            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed", self.speed),
            ("lower_bound", self.lower_bound),
            ("upper_bound", self.upper_bound),
            ("perfect_tolerance", self.perfect_tolerance),
            ("block_thickness", self.block_thickness),
            ("starting_extent", self.starting_extent),
            ("origin_x", self.origin_x),
            ("origin_z", self.origin_z),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        if self.starting_extent <= 0.0 {
            return Err(ConfigError::NonPositiveExtent(self.starting_extent));
        }
        if self.block_thickness <= 0.0 {
            return Err(ConfigError::NonPositiveThickness(self.block_thickness));
        }
        if self.perfect_tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.perfect_tolerance));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }

        // The first active block starts over the foundation
        for (field, value) in [("origin_x", self.origin_x), ("origin_z", self.origin_z)] {
            if value < self.lower_bound || value > self.upper_bound {
                return Err(ConfigError::OriginOutOfBounds {
                    field,
                    value,
                    lower: self.lower_bound,
                    upper: self.upper_bound,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let config = GameConfig {
            speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSpeed(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = GameConfig {
            lower_bound: 10.0,
            upper_bound: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_extent_and_thickness() {
        let config = GameConfig {
            starting_extent: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveExtent(_))
        ));

        let config = GameConfig {
            block_thickness: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveThickness(_))
        ));
    }

    #[test]
    fn test_rejects_origin_outside_range() {
        let config = GameConfig {
            origin_x: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OriginOutOfBounds {
                field: "origin_x",
                ..
            })
        ));

        let config = GameConfig {
            origin_z: DEFAULT_LOWER_BOUND - 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OriginOutOfBounds {
                field: "origin_z",
                ..
            })
        ));

        let err = GameConfig::from_json(r#"{ "origin_x": -200.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OriginOutOfBounds { .. }));
    }

    #[test]
    fn test_accepts_origin_on_bound() {
        let config = GameConfig {
            origin_x: DEFAULT_LOWER_BOUND,
            origin_z: DEFAULT_UPPER_BOUND,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan() {
        let config = GameConfig {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "speed" })
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "speed": 4.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.speed, 4.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_extent, DEFAULT_STARTING_EXTENT);
        assert_eq!(config.lower_bound, DEFAULT_LOWER_BOUND);
    }

    #[test]
    fn test_from_json_validates() {
        let err = GameConfig::from_json(r#"{ "lower_bound": 200.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "stack_tower_config_{}.json",
            std::process::id()
        ));
        let config = GameConfig {
            speed: 3.0,
            perfect_tolerance: 0.5,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
