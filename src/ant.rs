use crate::config::AntConfig;
use crate::direction::Direction;
use crate::error::Result;
use crate::world::Position;

/// What an ant can see and touch. Reads may create the cell they look at,
/// hence `&mut self` on the pheromone and food accessors.
pub trait Environment {
    fn pheromone_at(&mut self, pos: Position) -> f64;
    fn set_pheromone_at(&mut self, pos: Position, amount: f64);
    fn has_food_at(&mut self, pos: Position) -> bool;
    fn remove_food_at(&mut self, pos: Position) -> Result<()>;
    fn at_capacity(&self, pos: Position) -> bool;
    /// Uniform draw in `[0, 1)`
    fn draw(&mut self) -> f64;
}

/// Chance that an ant moves at all, given the pheromone on both candidate
/// cells. Half at `midpoint`, tending to 1 above it and to 0 below.
#[inline]
pub fn move_probability(p_left: f64, p_right: f64, midpoint: f64) -> f64 {
    0.5 + 0.5 * ((p_left + p_right) / midpoint - 1.0).tanh()
}

/// Chance that a moving ant picks the right-hand cell. The squared, offset
/// levels make the ant lean toward whichever side carries more pheromone.
#[inline]
pub fn right_probability(p_left: f64, p_right: f64, offset: f64) -> f64 {
    let left = (offset + p_left).powi(2);
    let right = (offset + p_right).powi(2);
    let total = left + right;
    if total == 0.0 {
        return 0.5;
    }
    1.0 - left / total
}

/// Per-tick decision before any state changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Both candidate cells are full
    Blocked,
    /// Move roll failed
    Stay,
    Go(Direction),
}

/// Result of one ant's turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Blocked,
    Stayed,
    Moved {
        from: Position,
        to: Position,
        direction: Direction,
        picked_up: bool,
        delivered: bool,
    },
}

impl StepOutcome {
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}

/// A foraging ant. Identity is the arena index in the model; only position
/// and load change over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub id: u32,
    pos: Position,
    carrying_food: bool,
}

impl Ant {
    /// New unloaded ant in the nest
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Position::NEST,
            carrying_food: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn is_carrying_food(&self) -> bool {
        self.carrying_food
    }

    /// Cell the ant would enter by moving in `dir`
    #[inline]
    pub fn next(&self, dir: Direction) -> Position {
        dir.target(self.pos, self.carrying_food)
    }

    #[inline]
    pub fn next_left(&self) -> Position {
        self.next(Direction::Left)
    }

    #[inline]
    pub fn next_right(&self) -> Position {
        self.next(Direction::Right)
    }

    /// Decide whether and where to move, without moving.
    ///
    /// Consumes one draw for the move roll and, when both cells have room, a
    /// second one for the direction. A blocked ant draws nothing.
    pub fn decide<E: Environment + ?Sized>(&self, env: &mut E, config: &AntConfig) -> Decision {
        let left = self.next_left();
        let right = self.next_right();
        let left_full = env.at_capacity(left);
        let right_full = env.at_capacity(right);
        if left_full && right_full {
            return Decision::Blocked;
        }

        let p_left = env.pheromone_at(left);
        let p_right = env.pheromone_at(right);
        if env.draw() >= move_probability(p_left, p_right, config.move_midpoint) {
            return Decision::Stay;
        }

        let direction = if right_full {
            Direction::Left
        } else if left_full {
            Direction::Right
        } else if env.draw() < right_probability(p_left, p_right, config.direction_offset) {
            Direction::Right
        } else {
            Direction::Left
        };
        Decision::Go(direction)
    }

    /// Run one full turn: decide, move, lay pheromone, then handle food.
    pub fn step<E: Environment + ?Sized>(
        &mut self,
        env: &mut E,
        config: &AntConfig,
    ) -> Result<StepOutcome> {
        let direction = match self.decide(env, config) {
            Decision::Blocked => return Ok(StepOutcome::Blocked),
            Decision::Stay => return Ok(StepOutcome::Stayed),
            Decision::Go(direction) => direction,
        };

        let from = self.pos;
        self.pos = self.next(direction);
        self.lay_pheromone(env, config);

        let mut picked_up = false;
        let mut delivered = false;
        if self.pos.is_nest() {
            delivered = self.carrying_food;
            self.carrying_food = false;
        } else if !self.carrying_food && env.has_food_at(self.pos) {
            env.remove_food_at(self.pos)?;
            self.carrying_food = true;
            picked_up = true;
        }

        Ok(StepOutcome::Moved {
            from,
            to: self.pos,
            direction,
            picked_up,
            delivered,
        })
    }

    /// Deposit trail at the current cell, clamped to the trail's ceiling
    pub fn lay_pheromone<E: Environment + ?Sized>(&self, env: &mut E, config: &AntConfig) {
        let trail = if self.carrying_food {
            config.returning
        } else {
            config.outbound
        };
        let current = env.pheromone_at(self.pos);
        if current >= trail.limit {
            return;
        }
        env.set_pheromone_at(self.pos, (current + trail.amount).min(trail.limit));
    }
}
