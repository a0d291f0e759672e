use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected configuration. Raised at construction, never during a tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("starting extent must be positive, got {0}")]
    NonPositiveExtent(f32),

    #[error("block thickness must be positive, got {0}")]
    NonPositiveThickness(f32),

    #[error("perfect tolerance must not be negative, got {0}")]
    NegativeTolerance(f32),

    #[error("lower bound {lower} must be below upper bound {upper}")]
    InvalidBounds { lower: f32, upper: f32 },

    #[error("{field} {value} lies outside the oscillation range [{lower}, {upper}]")]
    OriginOutOfBounds {
        field: &'static str,
        value: f32,
        lower: f32,
        upper: f32,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
