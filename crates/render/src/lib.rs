//! Rendering Adapter: turns a world and a display window into a frame.
//!
//! # Invariants
//! - Renderers only read the world; they never mutate it.
//! - A frame shows exactly the cells inside the window, row by row.

mod picture;
mod renderer;

pub use picture::parse_picture;
pub use renderer::{Renderer, TextRenderer, TextStyle};
