//! Presentation Tooling: world inspector, timed text animation, seed loading.
//!
//! # Invariants
//! - Tools drive the kernel only through `step`; they never edit a world in place.
//! - Seeds are validated when loaded, before any generation is computed.

mod animation;
mod inspector;
mod seed;

pub use animation::{AnimationConfig, AnimationLoop, CLEAR_SCREEN, Frame, FrameSink, TerminalSink};
pub use inspector::{WorldInspector, WorldSummary};
pub use seed::{load_seed, parse_seed, random_soup, seed_from_cells};

/// Errors from presentation tooling.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Life(#[from] lifespace_common::LifeError),
}
