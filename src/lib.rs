//! # Ant Foraging
//!
//! A pheromone-trail simulation of ants foraging on an unbounded grid.
//!
//! Ants leave the nest at the origin, drift forward on a sparse grid biased
//! by the pheromone around them, pick up food and carry it home, laying trail
//! as they go. Trails evaporate a little every tick.

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod random;
pub mod render;
pub mod simulation;
pub mod world;

pub use ant::{Ant, Environment, StepOutcome};
pub use cli::Args;
pub use config::{AntConfig, ModelConfig, TrailConfig};
pub use direction::Direction;
pub use error::{Result, SimError};
pub use random::RandomSource;
pub use render::{AsciiRenderer, Renderer};
pub use simulation::{ForagingStats, Model, SimulationEngine};
pub use world::{Location, Position};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, AsciiRenderer, Direction, Environment, Location, Model, ModelConfig,
        Position, RandomSource, Renderer, Result, SimError, SimulationEngine,
    };
}
