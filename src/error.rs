use crate::world::Position;
use thiserror::Error;

/// Errors raised by the foraging simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Food removed from a location that holds none
    #[error("no food to remove")]
    NoFood,

    /// Food removed from an empty grid cell
    #[error("no food to remove at {0}")]
    NoFoodAt(Position),

    /// Probability outside [0, 1]
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Ant ids are u32; the arena cannot grow past that
    #[error("population would exceed {} ants", u32::MAX)]
    PopulationOverflow,

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
