use crate::{World, step};

/// A running simulation: the current world plus its generation index.
///
/// Each `advance` replaces the held world with the next generation; earlier
/// generations are dropped, not recorded.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    world: World,
    generation: u64,
}

impl Simulation {
    /// Start at generation 0 from the given seed.
    pub fn new(seed: World) -> Self {
        Self {
            world: seed,
            generation: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.world.population()
    }

    /// Advance one generation.
    pub fn advance(&mut self) {
        self.world = step(&self.world);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.world.population(),
            "advanced"
        );
    }

    /// Consume the simulation, returning the current world.
    pub fn into_world(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    fn glider() -> World {
        [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].into_iter().collect()
    }

    #[test]
    fn starts_at_generation_zero() {
        let sim = Simulation::new(glider());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 5);
        assert_eq!(sim.world(), &glider());
    }

    #[test]
    fn advance_increments_generation() {
        let mut sim = Simulation::new(glider());
        sim.advance();
        sim.advance();
        sim.advance();
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn repeated_advance_matches_run() {
        let mut sim = Simulation::new(glider());
        for _ in 0..9 {
            sim.advance();
        }
        assert_eq!(sim.generation(), 9);
        assert_eq!(sim.into_world(), run(&glider(), 9));
    }

    #[test]
    fn extinct_world_keeps_counting() {
        let mut sim = Simulation::new([(0, 0)].into_iter().collect());
        for _ in 0..3 {
            sim.advance();
        }
        assert_eq!(sim.generation(), 3);
        assert_eq!(sim.population(), 0);
    }
}
