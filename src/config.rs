use crate::error::{Result, SimError};
use crate::world::location::EVAPORATION_RATE;

/// Default ceiling on ants sharing one cell
pub const MAX_ANTS_PER_CELL: usize = 200;

/// Pheromone laid by one ant on one visit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Added per visit
    pub amount: f64,
    /// Deposits never push the level past this; at or above it they no-op
    pub limit: f64,
}

/// Ant decision parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntConfig {
    /// Combined neighbour pheromone at which an ant moves half the time
    pub move_midpoint: f64,
    /// Added to both pheromone levels before comparing directions
    pub direction_offset: f64,
    /// Trail laid while searching for food
    pub outbound: TrailConfig,
    /// Trail laid while carrying food home
    pub returning: TrailConfig,
}

impl Default for AntConfig {
    fn default() -> Self {
        Self {
            move_midpoint: 100.0,
            direction_offset: 5.0,
            outbound: TrailConfig {
                amount: 1.0,
                limit: 1000.0,
            },
            returning: TrailConfig {
                amount: 10.0,
                limit: 300.0,
            },
        }
    }
}

/// Model-wide parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelConfig {
    pub max_ants_per_cell: usize,
    /// Fraction of pheromone lost by every cell each tick
    pub evaporation_rate: f64,
    pub ant: AntConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_ants_per_cell: MAX_ANTS_PER_CELL,
            evaporation_rate: EVAPORATION_RATE,
            ant: AntConfig::default(),
        }
    }
}

impl ModelConfig {
    pub fn with_capacity(mut self, max_ants_per_cell: usize) -> Self {
        self.max_ants_per_cell = max_ants_per_cell;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_ants_per_cell == 0 {
            return Err(SimError::InvalidConfig(
                "max_ants_per_cell must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(SimError::InvalidConfig(format!(
                "evaporation_rate must be within [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !(self.ant.move_midpoint > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "move_midpoint must be positive, got {}",
                self.ant.move_midpoint
            )));
        }
        if !(self.ant.direction_offset >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "direction_offset must be non-negative, got {}",
                self.ant.direction_offset
            )));
        }
        for (name, trail) in [("outbound", self.ant.outbound), ("returning", self.ant.returning)] {
            if !(trail.amount >= 0.0 && trail.limit >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} trail needs non-negative amount and limit"
                )));
            }
        }
        Ok(())
    }
}
