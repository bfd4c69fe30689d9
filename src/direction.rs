use crate::world::Position;

/// The two forward moves open to an ant. What "forward" means flips when the
/// ant is carrying food, so loaded ants head back toward the nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

impl Direction {
    /// Both directions, left first
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Cell offset for this direction given the ant's load
    #[inline]
    pub const fn delta(self, carrying_food: bool) -> (i32, i32) {
        match (self, carrying_food) {
            (Direction::Left, false) => (0, 1),
            (Direction::Right, false) => (1, 0),
            (Direction::Left, true) => (0, -1),
            (Direction::Right, true) => (-1, 0),
        }
    }

    /// Cell an ant at `from` would enter by moving this way
    #[inline]
    pub const fn target(self, from: Position, carrying_food: bool) -> Position {
        let (dx, dy) = self.delta(carrying_food);
        from.offset(dx, dy)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
