use crate::world::location::Location;
use crate::world::position::Position;
use std::collections::BTreeMap;

/// Sparse, unbounded grid. Cells come into existence on first reference and
/// are never removed.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: BTreeMap<Position, Location>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing location at `pos`, without creating one
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Location> {
        self.cells.get(&pos)
    }

    /// Location at `pos`; a missing cell is inserted and handed to `init`
    /// before being returned
    pub fn get_or_create<F>(&mut self, pos: Position, init: F) -> &mut Location
    where
        F: FnOnce(&mut Location),
    {
        self.cells.entry(pos).or_insert_with(|| {
            let mut loc = Location::new();
            init(&mut loc);
            loc
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Location)> + '_ {
        self.cells.iter().map(|(pos, loc)| (*pos, loc))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut Location)> + '_ {
        self.cells.iter_mut().map(|(pos, loc)| (*pos, loc))
    }

    pub fn evaporate_all(&mut self, rate: f64) {
        for loc in self.cells.values_mut() {
            loc.evaporate_at(rate);
        }
    }

    /// Smallest box (min corner, max corner) covering every created cell
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let mut cells = self.cells.keys();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), p| {
            (
                Position::new(lo.x.min(p.x), lo.y.min(p.y)),
                Position::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    pub fn total_food(&self) -> u64 {
        self.cells.values().map(|loc| u64::from(loc.food())).sum()
    }

    pub fn total_pheromone(&self) -> f64 {
        self.cells.values().map(Location::pheromone).sum()
    }
}
