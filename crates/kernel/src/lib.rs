//! Life Kernel: sparse neighbor counting, generation stepping, n-step runs.
//!
//! # Invariants
//! - Transitions are pure: every step builds a new `World` and never touches its input.
//! - Only cells with at least one live neighbor are ever candidates; no dense grid is built.
//! - Neighbor counts live for exactly one transition.

pub mod neighbors;
pub mod patterns;
pub mod simulation;
pub mod step;
pub mod world;

pub use neighbors::{NEIGHBOR_OFFSETS, NeighborCounts, count, neighbors};
pub use patterns::Pattern;
pub use simulation::Simulation;
pub use step::{next_state, run, step};
pub use world::World;
