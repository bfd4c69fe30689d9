use crate::ant::Ant;
use crate::world::Position;
use std::collections::BTreeMap;

/// Position → ant ids currently standing there. Ids index the model's ant
/// arena; buckets are never left empty.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    buckets: BTreeMap<Position, Vec<u32>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every ant by its current position, in arena order
    pub fn from_ants(ants: &[Ant]) -> Self {
        let mut occupancy = Self::new();
        occupancy.rebuild(ants);
        occupancy
    }

    pub fn rebuild(&mut self, ants: &[Ant]) {
        self.buckets.clear();
        for ant in ants {
            self.insert(ant.id, ant.position());
        }
    }

    /// Index the ants listed in `order`, in that order. Each bucket then
    /// holds its ants in the order they took their turns.
    pub fn rebuild_in_order(&mut self, ants: &[Ant], order: &[u32]) {
        self.buckets.clear();
        for &id in order {
            if let Some(ant) = ants.get(id as usize) {
                self.insert(id, ant.position());
            }
        }
    }

    pub fn insert(&mut self, id: u32, pos: Position) {
        self.buckets.entry(pos).or_default().push(id);
    }

    /// Move `id` from `from` to `to`. Keeps counts live during a tick.
    pub fn relocate(&mut self, id: u32, from: Position, to: Position) {
        if from == to {
            return;
        }
        if let Some(bucket) = self.buckets.get_mut(&from) {
            if let Some(slot) = bucket.iter().position(|&other| other == id) {
                bucket.remove(slot);
            }
            if bucket.is_empty() {
                self.buckets.remove(&from);
            }
        }
        self.insert(id, to);
    }

    #[inline]
    pub fn count_at(&self, pos: Position) -> usize {
        self.buckets.get(&pos).map_or(0, Vec::len)
    }

    pub fn ids_at(&self, pos: Position) -> &[u32] {
        self.buckets.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Turn order for a tick: buckets by position, then list order
    pub fn turn_order(&self) -> Vec<u32> {
        self.buckets.values().flatten().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.buckets.iter().map(|(pos, ids)| (*pos, ids.len()))
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn busiest(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }
}
