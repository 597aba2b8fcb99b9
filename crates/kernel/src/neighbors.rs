use lifespace_common::Cell;
use std::collections::HashMap;
use std::collections::hash_map;

use crate::World;

/// The Moore neighborhood: every offset sharing an edge or corner, excluding the origin.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The 8 cells adjacent to `cell`.
pub fn neighbors(cell: Cell) -> impl Iterator<Item = Cell> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |(dx, dy)| cell.offset(dx, dy))
}

/// Live-neighbor counts for one generation.
///
/// Holds exactly the cells adjacent to at least one live cell; a cell with no
/// live neighbors is absent rather than mapped to zero. Every count is in
/// `1..=8`. Built fresh by [`count`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: HashMap<Cell, u8>,
}

impl NeighborCounts {
    /// Live-neighbor count for `cell`, or `None` if it has none.
    pub fn get(&self, cell: Cell) -> Option<u8> {
        self.counts.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.counts.contains_key(&cell)
    }

    /// Number of cells with at least one live neighbor.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(cell, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.counts.iter().map(|(cell, n)| (*cell, *n))
    }
}

impl IntoIterator for NeighborCounts {
    type Item = (Cell, u8);
    type IntoIter = hash_map::IntoIter<Cell, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Count live neighbors for every cell adjacent to a live cell.
///
/// One pass over the live cells: each contributes 1 to each of its 8
/// neighbors, whether or not that neighbor is itself alive.
pub fn count(world: &World) -> NeighborCounts {
    let mut counts: HashMap<Cell, u8> = HashMap::with_capacity(world.population() * 8);
    for &cell in world {
        for neighbor in neighbors(cell) {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    NeighborCounts { counts }
}
