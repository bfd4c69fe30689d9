use crate::ant::{Ant, Environment, StepOutcome};
use crate::config::ModelConfig;
use crate::error::{Result, SimError};
use crate::random::RandomSource;
use crate::simulation::occupancy::Occupancy;
use crate::world::{Grid, Location, Position};
use tracing::{debug, info, trace};

/// Running totals kept by the model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForagingStats {
    pub ticks: u64,
    pub moves: u64,
    /// Turns lost because both candidate cells were full
    pub blocked: u64,
    pub pickups: u64,
    pub deliveries: u64,
    /// Food units ever placed on the grid
    pub food_seeded: u64,
}

/// The environment: a sparse grid of locations plus the ant population.
///
/// Ants live in an arena (`Vec<Ant>`, index = id). The occupancy index maps
/// each cell to the ids standing on it and is updated as each ant moves, so
/// an ant's capacity check sees every move made earlier in the same tick.
/// At the end of the tick the index is re-derived from ant positions.
#[derive(Clone, Debug)]
pub struct Model<R = fastrand::Rng> {
    config: ModelConfig,
    grid: Grid,
    ants: Vec<Ant>,
    occupancy: Occupancy,
    /// Remembered so lazily created cells get seeded too
    food_probability: f64,
    rng: R,
    stats: ForagingStats,
}

impl Model<fastrand::Rng> {
    /// Default configuration with an entropy-seeded generator
    pub fn new() -> Self {
        Self::build(ModelConfig::default(), fastrand::Rng::new())
    }

    /// Default configuration with a reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::build(ModelConfig::default(), fastrand::Rng::with_seed(seed))
    }
}

impl Default for Model<fastrand::Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Model<R> {
    pub fn with_source(config: ModelConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: ModelConfig, rng: R) -> Self {
        Self {
            config,
            grid: Grid::new(),
            ants: Vec::new(),
            occupancy: Occupancy::new(),
            food_probability: 0.0,
            rng,
            stats: ForagingStats::default(),
        }
    }

    /// Seed every existing location with food at probability `p` and
    /// remember `p` for locations created later
    pub fn seed_food(&mut self, p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SimError::InvalidProbability(p));
        }
        self.food_probability = p;
        let mut placed = 0u64;
        for (_, loc) in self.grid.iter_mut() {
            if loc.seed_food(p, &mut self.rng) {
                placed += 1;
            }
        }
        self.stats.food_seeded += placed;
        info!(probability = p, placed, cells = self.grid.len(), "seeded food");
        Ok(())
    }

    /// Add `n` unloaded ants to the nest
    pub fn add_ants(&mut self, n: usize) -> Result<()> {
        let end = self
            .ants
            .len()
            .checked_add(n)
            .ok_or(SimError::PopulationOverflow)?;
        if u32::try_from(end).is_err() {
            return Err(SimError::PopulationOverflow);
        }
        self.ants.reserve(n);
        for id in self.ants.len()..end {
            // Bounded by the check above
            let id = id as u32;
            self.ants.push(Ant::new(id));
            self.occupancy.insert(id, Position::NEST);
        }
        info!(added = n, total = self.ants.len(), "ants added to nest");
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Every ant takes a turn, in occupancy order (by cell, then list order
    /// within the cell). Ants see pheromone, food and occupancy as left by
    /// the ants before them. Then every cell evaporates and the index is
    /// rebuilt from the new positions, each bucket listing its ants in the
    /// order they moved.
    pub fn advance_tick(&mut self) -> Result<()> {
        let ant_config = self.config.ant;
        let mut moves = 0u64;

        let order = self.occupancy.turn_order();
        for &id in &order {
            let slot = id as usize;
            let mut ant = self.ants[slot];
            let outcome = ant.step(self, &ant_config)?;
            self.ants[slot] = ant;

            match outcome {
                StepOutcome::Moved {
                    from,
                    to,
                    picked_up,
                    delivered,
                    ..
                } => {
                    self.occupancy.relocate(id, from, to);
                    moves += 1;
                    if picked_up {
                        self.stats.pickups += 1;
                        debug!(ant = id, x = to.x, y = to.y, "picked up food");
                    }
                    if delivered {
                        self.stats.deliveries += 1;
                        debug!(ant = id, "delivered food to nest");
                    }
                }
                StepOutcome::Blocked => self.stats.blocked += 1,
                StepOutcome::Stayed => {}
            }
        }

        self.grid.evaporate_all(self.config.evaporation_rate);
        self.occupancy.rebuild_in_order(&self.ants, &order);
        self.stats.moves += moves;
        self.stats.ticks += 1;
        trace!(tick = self.stats.ticks, moves, "tick complete");
        Ok(())
    }

    /// Advance `ticks` times
    pub fn run(&mut self, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.advance_tick()?;
        }
        Ok(())
    }

    /// Location at `pos`, created (and food-seeded) on first reference
    pub fn get_location(&mut self, pos: Position) -> &mut Location {
        let p = self.food_probability;
        let rng = &mut self.rng;
        let stats = &mut self.stats;
        self.grid.get_or_create(pos, |loc| {
            if p > 0.0 && loc.seed_food(p, rng) {
                stats.food_seeded += 1;
            }
        })
    }

    pub fn pheromone_at(&mut self, pos: Position) -> f64 {
        self.get_location(pos).pheromone()
    }

    pub fn set_pheromone_at(&mut self, pos: Position, amount: f64) {
        self.get_location(pos).set_pheromone(amount);
    }

    pub fn add_pheromone_at(&mut self, pos: Position, amount: f64) {
        self.get_location(pos).add_pheromone(amount);
    }

    pub fn has_food_at(&mut self, pos: Position) -> bool {
        self.get_location(pos).has_food()
    }

    /// Take one food unit from `pos`. Empty cells are a caller error.
    pub fn remove_food_at(&mut self, pos: Position) -> Result<()> {
        self.get_location(pos)
            .remove_food()
            .map_err(|_| SimError::NoFoodAt(pos))
    }

    #[inline]
    pub fn ant_count_at(&self, pos: Position) -> usize {
        self.occupancy.count_at(pos)
    }

    #[inline]
    pub fn at_capacity(&self, pos: Position) -> bool {
        self.ant_count_at(pos) >= self.config.max_ants_per_cell
    }

    /// Existing location at `pos`; never creates one
    pub fn location(&self, pos: Position) -> Option<&Location> {
        self.grid.get(pos)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn ant(&self, id: u32) -> Option<&Ant> {
        self.ants.get(id as usize)
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn food_probability(&self) -> f64 {
        self.food_probability
    }

    pub fn stats(&self) -> ForagingStats {
        self.stats
    }

    pub fn tick(&self) -> u64 {
        self.stats.ticks
    }

    pub fn carrying_count(&self) -> usize {
        self.ants.iter().filter(|a| a.is_carrying_food()).count()
    }

    pub fn explored_bounds(&self) -> Option<(Position, Position)> {
        self.grid.bounds()
    }

    pub fn food_remaining(&self) -> u64 {
        self.grid.total_food()
    }

    pub fn total_pheromone(&self) -> f64 {
        self.grid.total_pheromone()
    }
}

impl<R: RandomSource> Environment for Model<R> {
    fn pheromone_at(&mut self, pos: Position) -> f64 {
        Self::pheromone_at(self, pos)
    }

    fn set_pheromone_at(&mut self, pos: Position, amount: f64) {
        Self::set_pheromone_at(self, pos, amount)
    }

    fn has_food_at(&mut self, pos: Position) -> bool {
        Self::has_food_at(self, pos)
    }

    fn remove_food_at(&mut self, pos: Position) -> Result<()> {
        Self::remove_food_at(self, pos)
    }

    fn at_capacity(&self, pos: Position) -> bool {
        Self::at_capacity(self, pos)
    }

    fn draw(&mut self) -> f64 {
        self.rng.uniform()
    }
}
