use lifespace_common::LifeError;

use crate::World;

/// A named seed pattern, anchored with its top-left corner at the origin.
///
/// Coordinates are `(x, y)` with `y` growing downward, matching the
/// row order of rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    /// Build a fresh world from this pattern.
    pub fn world(&self) -> World {
        self.cells.iter().copied().collect()
    }

    /// Look up a pattern by name, ignoring case and treating `_` as `-`.
    pub fn find(name: &str) -> Result<&'static Pattern, LifeError> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        PATTERNS
            .iter()
            .find(|p| p.name == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    pub fn all() -> &'static [Pattern] {
        PATTERNS
    }
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "square",
        description: "3x3 filled square; blooms into a traffic light",
        cells: &[
            (0, 0), (1, 0), (2, 0),
            (0, 1), (1, 1), (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    },
    Pattern {
        name: "block",
        description: "2x2 still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        description: "period-2 oscillator",
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "toad",
        description: "period-2 oscillator",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        description: "period-2 oscillator",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        description: "spaceship moving (+1, +1) every 4 generations",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "lwss",
        description: "lightweight spaceship moving (-2, 0) every 4 generations",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    },
    Pattern {
        name: "r-pentomino",
        description: "methuselah; settles after 1103 generations",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "gosper-glider-gun",
        description: "emits a glider every 30 generations",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];
