use lifespace_common::Window;
use lifespace_kernel::{World, count};

/// World inspector for developer tooling.
///
/// Read-only queries against a world for status lines and debugging.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world at the given generation.
    pub fn summary(world: &World, generation: u64) -> WorldSummary {
        WorldSummary {
            generation,
            population: world.population(),
            bounds: world.bounds(),
        }
    }

    /// Number of cells that would be examined by the next step.
    pub fn candidate_count(world: &World) -> usize {
        count(world).len()
    }

    /// Pick a display window: the world's bounds grown by `margin`, or
    /// `fallback` when the world is empty.
    pub fn fit_window(world: &World, margin: i64, fallback: Window) -> Window {
        world
            .bounds()
            .map(|b| b.expanded(margin))
            .unwrap_or(fallback)
    }
}

/// Summary of world state for status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSummary {
    pub generation: u64,
    pub population: usize,
    pub bounds: Option<Window>,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation {}, Population {}",
            self.generation, self.population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_empty_world() {
        let summary = WorldInspector::summary(&World::new(), 0);
        assert_eq!(summary.generation, 0);
        assert_eq!(summary.population, 0);
        assert!(summary.bounds.is_none());
    }

    #[test]
    fn summary_display() {
        let world: World = [(0, 0), (1, 0), (2, 0)].into_iter().collect();
        let summary = WorldInspector::summary(&world, 7);
        assert_eq!(format!("{summary}"), "Generation 7, Population 3");
        assert_eq!(summary.bounds.unwrap().xs, 0..3);
    }

    #[test]
    fn candidate_count_for_blinker() {
        let world: World = [(0, 1), (1, 1), (2, 1)].into_iter().collect();
        // 5x3 box around the row.
        assert_eq!(WorldInspector::candidate_count(&world), 15);
    }

    #[test]
    fn fit_window_uses_bounds_or_fallback() {
        let world: World = [(4, 4), (6, 5)].into_iter().collect();
        let w = WorldInspector::fit_window(&world, 1, Window::default());
        assert_eq!(w.xs, 3..8);
        assert_eq!(w.ys, 3..7);

        let empty = WorldInspector::fit_window(&World::new(), 1, Window::default());
        assert_eq!(empty, Window::default());
    }

    #[test]
    fn fit_window_at_max_column_is_valid() {
        let world: World = [(i64::MAX, 0)].into_iter().collect();
        let w = WorldInspector::fit_window(&world, 2, Window::default());
        assert!(Window::new(w.xs.clone(), w.ys.clone()).is_ok());
        assert_eq!(w.xs, i64::MAX - 3..i64::MAX);
        assert_eq!(w.ys, -2..3);
    }
}
