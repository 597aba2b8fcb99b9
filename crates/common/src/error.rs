/// Errors raised while validating simulator input.
///
/// The kernel itself never fails; everything here is rejected at the edges
/// before a transition is attempted.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("invalid cell {input:?}: {reason}")]
    InvalidCell { input: String, reason: String },
    #[error("generation count must be non-negative, got {0}")]
    NegativeGenerations(i64),
    #[error("invalid generation count {0:?}")]
    InvalidGenerations(String),
    #[error("invalid range {0:?}: expected START..END")]
    InvalidRange(String),
    #[error("display window is empty: x {x_start}..{x_end}, y {y_start}..{y_end}")]
    EmptyWindow {
        x_start: i64,
        x_end: i64,
        y_start: i64,
        y_end: i64,
    },
    #[error("unexpected glyph {glyph:?} at line {line}, column {column}")]
    InvalidGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },
    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
