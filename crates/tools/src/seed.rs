use lifespace_common::{Cell, LifeError, Window};
use lifespace_kernel::World;
use lifespace_render::{TextStyle, parse_picture};
use rand::{RngCore, SeedableRng};
use std::path::Path;

use crate::ToolError;

/// Load a seed world from a file.
///
/// Files ending in `.json` hold an array of `[x, y]` integer pairs. Anything
/// else is read as a text picture in the default style with its top-left
/// corner at the origin.
pub fn load_seed(path: impl AsRef<Path>) -> Result<World, ToolError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let world = parse_seed(&text, is_json)?;
    tracing::info!(
        path = %path.display(),
        population = world.population(),
        "loaded seed"
    );
    Ok(world)
}

/// Parse seed text, either as JSON pairs or as a picture.
pub fn parse_seed(text: &str, json: bool) -> Result<World, LifeError> {
    if json {
        Ok(serde_json::from_str(text)?)
    } else {
        parse_picture(text, &TextStyle::default(), Cell::new(0, 0))
    }
}

/// Build a world from `"x,y"` strings, failing on the first malformed one.
pub fn seed_from_cells<S: AsRef<str>>(cells: &[S]) -> Result<World, LifeError> {
    cells.iter().map(|s| s.as_ref().parse::<Cell>()).collect()
}

/// Fill `window` with a random soup: each cell is alive with probability
/// `density`. The same `seed` always yields the same world.
pub fn random_soup(window: &Window, density: f64, seed: u64) -> Result<World, LifeError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    let mut cells = Vec::new();
    for y in window.ys.clone() {
        for x in window.xs.clone() {
            // Zero density must stay empty even when the draw is 0.
            if density > 0.0 && rng.next_u64() <= threshold {
                cells.push(Cell::new(x, y));
            }
        }
    }
    tracing::debug!(population = cells.len(), density, seed, "seeded random soup");
    Ok(cells.into_iter().collect())
}
