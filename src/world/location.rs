use crate::error::{Result, SimError};
use crate::random::RandomSource;

/// Fraction of pheromone lost per tick
pub const EVAPORATION_RATE: f64 = 1.0 / 30.0;

/// One grid cell: food units and pheromone level
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    food: u32,
    pheromone: f64,
}

impl Location {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// With probability `p`, set the food count to 1. Never lowers existing
    /// food. Returns true when a new unit appeared (the cell was empty).
    pub fn seed_food<R: RandomSource + ?Sized>(&mut self, p: f64, rng: &mut R) -> bool {
        if rng.uniform() < p {
            let placed = self.food == 0;
            self.food = self.food.max(1);
            placed
        } else {
            false
        }
    }

    #[inline]
    pub fn food(&self) -> u32 {
        self.food
    }

    #[inline]
    pub fn has_food(&self) -> bool {
        self.food > 0
    }

    /// Take one unit of food. Callers check `has_food` first.
    pub fn remove_food(&mut self) -> Result<()> {
        if self.food == 0 {
            return Err(SimError::NoFood);
        }
        self.food -= 1;
        Ok(())
    }

    #[inline]
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    /// Negative and NaN levels are stored as zero
    #[inline]
    pub fn set_pheromone(&mut self, amount: f64) {
        // f64::max drops a NaN operand
        self.pheromone = amount.max(0.0);
    }

    #[inline]
    pub fn add_pheromone(&mut self, amount: f64) {
        self.set_pheromone(self.pheromone + amount);
    }

    /// Lose 1/30 of the pheromone; the level approaches zero but never hits it
    #[inline]
    pub fn evaporate(&mut self) {
        self.evaporate_at(EVAPORATION_RATE);
    }

    #[inline]
    pub fn evaporate_at(&mut self, rate: f64) {
        self.pheromone -= self.pheromone * rate;
    }
}
