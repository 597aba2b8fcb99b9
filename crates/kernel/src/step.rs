use crate::neighbors::count;
use crate::World;

/// The B3/S23 rule: birth on exactly 3 live neighbors, survival on 2 or 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (_, 3) | (true, 2))
}

/// Advance the world by one generation.
///
/// Candidates are the keys of the neighbor-count map: a cell with no live
/// neighbors can never reach the 2 required to stay alive, so it is never
/// examined.
pub fn step(world: &World) -> World {
    let _span = tracing::trace_span!("step").entered();
    let counts = count(world);
    let candidates = counts.len();
    let next: World = counts
        .into_iter()
        .filter(|&(cell, n)| next_state(world.contains(cell), n))
        .map(|(cell, _)| cell)
        .collect();
    tracing::trace!(
        population = world.population(),
        candidates,
        next_population = next.population(),
        "step complete"
    );
    next
}

/// Apply [`step`] `generations` times. `run(w, 0)` returns a copy of `w`.
pub fn run(world: &World, generations: u64) -> World {
    let _span = tracing::debug_span!("run", generations).entered();
    let mut current = world.clone();
    for _ in 0..generations {
        current = step(&current);
    }
    tracing::debug!(population = current.population(), "run complete");
    current
}
