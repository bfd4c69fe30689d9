pub mod engine;
pub mod model;
pub mod occupancy;

pub use engine::SimulationEngine;
pub use model::{ForagingStats, Model};
pub use occupancy::Occupancy;
