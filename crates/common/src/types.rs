use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::LifeError;

/// A grid position on the unbounded plane.
///
/// Serialized as a two-element array `[x, y]`. Ordering is row-major
/// (by `y`, then `x`) so sorted cells read like a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`. Wraps at the `i64` extremes.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, optionally wrapped in parentheses.
impl FromStr for Cell {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LifeError::InvalidCell {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| invalid("expected two comma-separated coordinates"))?;
        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("x coordinate: {e}")))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("y coordinate: {e}")))?;
        Ok(Self { x, y })
    }
}

/// A rectangular display window: half-open ranges on each axis.
///
/// Only built through [`Window::new`], [`Window::spanning`] and
/// [`Window::expanded`], so the ranges are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub xs: Range<i64>,
    pub ys: Range<i64>,
}

impl Window {
    /// Create a window, rejecting empty or inverted ranges.
    pub fn new(xs: Range<i64>, ys: Range<i64>) -> Result<Self, LifeError> {
        if xs.is_empty() || ys.is_empty() {
            return Err(LifeError::EmptyWindow {
                x_start: xs.start,
                x_end: xs.end,
                y_start: ys.start,
                y_end: ys.end,
            });
        }
        Ok(Self { xs, ys })
    }

    /// The smallest window containing both corners (inclusive).
    ///
    /// A half-open range cannot reach `i64::MAX`, so a corner on that row or
    /// column is pinned to the last representable one. The result is never
    /// empty, but it does not contain cells at `i64::MAX`.
    pub fn spanning(min: Cell, max: Cell) -> Self {
        const LAST: i64 = i64::MAX - 1;
        let span = |lo: i64, hi: i64| lo.min(LAST)..hi.min(LAST) + 1;
        Self {
            xs: span(min.x, max.x),
            ys: span(min.y, max.y),
        }
    }

    /// This window grown by `margin` cells on every side.
    pub fn expanded(&self, margin: i64) -> Self {
        Self {
            xs: self.xs.start.saturating_sub(margin)..self.xs.end.saturating_add(margin),
            ys: self.ys.start.saturating_sub(margin)..self.ys.end.saturating_add(margin),
        }
    }

    pub fn width(&self) -> u64 {
        self.xs.end.abs_diff(self.xs.start)
    }

    pub fn height(&self) -> u64 {
        self.ys.end.abs_diff(self.ys.start)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.xs.contains(&cell.x) && self.ys.contains(&cell.y)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self { xs: 0..10, ys: 0..10 }
    }
}

/// Parse a half-open range written `START..END`.
pub fn parse_range(s: &str) -> Result<Range<i64>, LifeError> {
    let invalid = || LifeError::InvalidRange(s.to_string());
    let (start, end) = s.trim().split_once("..").ok_or_else(invalid)?;
    let start = start.trim().parse::<i64>().map_err(|_| invalid())?;
    let end = end.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok(start..end)
}

/// A validated, non-negative number of generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generations(u64);

impl Generations {
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Generations {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl TryFrom<i64> for Generations {
    type Error = LifeError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u64::try_from(n)
            .map(Self)
            .map_err(|_| LifeError::NegativeGenerations(n))
    }
}

impl FromStr for Generations {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<i64>()
            .map_err(|_| LifeError::InvalidGenerations(s.to_string()))?;
        Self::try_from(n)
    }
}

impl fmt::Display for Generations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_order_row_major() {
        let mut cells = vec![Cell::new(1, 1), Cell::new(5, 0), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(5, 0), Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn cell_offset_wraps_at_extremes() {
        let edge = Cell::new(i64::MAX, i64::MIN);
        assert_eq!(edge.offset(1, -1), Cell::new(i64::MIN, i64::MAX));
    }

    #[test]
    fn cell_parses_with_or_without_parens() {
        assert_eq!("3,-4".parse::<Cell>().unwrap(), Cell::new(3, -4));
        assert_eq!(" (10, 2) ".parse::<Cell>().unwrap(), Cell::new(10, 2));
    }

    #[test]
    fn cell_rejects_non_integer_coordinates() {
        assert!(matches!(
            "1.5,2".parse::<Cell>(),
            Err(LifeError::InvalidCell { .. })
        ));
        assert!(matches!(
            "7".parse::<Cell>(),
            Err(LifeError::InvalidCell { .. })
        ));
    }

    #[test]
    fn cell_serializes_as_pair() {
        let json = serde_json::to_string(&Cell::new(-2, 9)).unwrap();
        assert_eq!(json, "[-2,9]");
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cell::new(-2, 9));
    }

    #[test]
    fn cell_json_rejects_fractional_coordinates() {
        assert!(serde_json::from_str::<Cell>("[0.5, 1]").is_err());
    }

    #[test]
    fn window_rejects_empty_ranges() {
        assert!(matches!(
            Window::new(0..0, 0..5),
            Err(LifeError::EmptyWindow { .. })
        ));
        assert!(Window::new(3..1, 0..5).is_err());
        assert!(Window::new(-2..2, 0..1).is_ok());
    }

    #[test]
    fn window_spanning_is_inclusive() {
        let w = Window::spanning(Cell::new(-1, 2), Cell::new(3, 2));
        assert_eq!(w.width(), 5);
        assert_eq!(w.height(), 1);
        assert!(w.contains(Cell::new(3, 2)));
        assert!(!w.contains(Cell::new(4, 2)));
    }

    #[test]
    fn window_spanning_pins_max_edge() {
        let corner = Cell::new(i64::MAX, 0);
        let w = Window::spanning(corner, corner);
        assert_eq!(w.xs, i64::MAX - 1..i64::MAX);
        assert_eq!(w.ys, 0..1);
        assert!(Window::new(w.xs.clone(), w.ys.clone()).is_ok());
        assert!(!w.contains(corner));
        assert!(w.contains(Cell::new(i64::MAX - 1, 0)));
    }

    #[test]
    fn window_spanning_keeps_min_edge() {
        let w = Window::spanning(Cell::new(i64::MIN, i64::MIN), Cell::new(i64::MIN, 0));
        assert_eq!(w.xs, i64::MIN..i64::MIN + 1);
        assert!(w.contains(Cell::new(i64::MIN, i64::MIN)));
    }

    #[test]
    fn window_expanded_grows_every_side() {
        let w = Window::default().expanded(2);
        assert_eq!(w.xs, -2..12);
        assert_eq!(w.ys, -2..12);
    }

    #[test]
    fn parse_range_basic() {
        assert_eq!(parse_range("-3..7").unwrap(), -3..7);
        assert!(matches!(parse_range("3-7"), Err(LifeError::InvalidRange(_))));
        assert!(parse_range("a..b").is_err());
    }

    #[test]
    fn generations_reject_negative() {
        assert_eq!(Generations::try_from(4i64).unwrap().get(), 4);
        assert!(matches!(
            Generations::try_from(-1i64),
            Err(LifeError::NegativeGenerations(-1))
        ));
        assert!(matches!(
            "-12".parse::<Generations>(),
            Err(LifeError::NegativeGenerations(-12))
        ));
        assert!(matches!(
            "ten".parse::<Generations>(),
            Err(LifeError::InvalidGenerations(_))
        ));
    }
}
