use lifespace_common::{Cell, Window};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// The set of currently live cells.
///
/// A `World` is a value: once built it is never mutated, and each
/// transition produces a fresh one. Uses `BTreeSet` for deterministic,
/// row-major iteration order. Serializes as a JSON array of `[x, y]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct World {
    cells: BTreeSet<Cell>,
}

impl World {
    /// The empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is alive in this world.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Live cells in row-major order.
    pub fn iter(&self) -> btree_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The smallest window containing every live cell, or `None` when empty.
    ///
    /// Cells at `i64::MAX` fall just outside it; see [`Window::spanning`].
    pub fn bounds(&self) -> Option<Window> {
        let first = self.cells.first()?;
        let (mut min, mut max) = (*first, *first);
        for cell in &self.cells {
            min.x = min.x.min(cell.x);
            max.x = max.x.max(cell.x);
        }
        // Row-major order gives the y extremes for free.
        min.y = first.y;
        max.y = self.cells.last().map_or(first.y, |c| c.y);
        Some(Window::spanning(min, max))
    }

    /// This world translated by `(dx, dy)`.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.iter().map(|c| c.offset(dx, dy)).collect()
    }
}

impl FromIterator<Cell> for World {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for World {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Cell;
    type IntoIter = btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for World {
    type Item = Cell;
    type IntoIter = btree_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
