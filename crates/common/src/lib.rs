//! Shared types and error definitions for the lifespace crates.
//!
//! # Invariants
//! - A `Cell` is a plain coordinate pair; it carries no liveness of its own.
//! - Validation of untrusted input happens here, before the kernel sees it.

mod error;
mod types;

pub use error::LifeError;
pub use types::{Cell, Generations, Window, parse_range};
