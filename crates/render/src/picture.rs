use lifespace_common::{Cell, LifeError};
use lifespace_kernel::World;

use crate::TextStyle;

/// Parse a text picture back into a world, the inverse of [`TextRenderer`].
///
/// Each line is one row; the first line sits at `origin.y` and the first
/// glyph of each line at `origin.x`. Whitespace and the style's pad string
/// are skipped. Any other character that is neither the live nor the empty
/// glyph is rejected.
///
/// [`TextRenderer`]: crate::TextRenderer
pub fn parse_picture(text: &str, style: &TextStyle, origin: Cell) -> Result<World, LifeError> {
    let mut cells = Vec::new();
    for (row, line) in text.lines().enumerate() {
        let mut column = 0i64;
        for (index, glyph) in line.chars().enumerate() {
            if glyph == style.live {
                cells.push(origin.offset(column, row as i64));
                column += 1;
            } else if glyph == style.empty {
                column += 1;
            } else if glyph.is_whitespace() || style.pad.contains(glyph) {
                continue;
            } else {
                return Err(LifeError::InvalidGlyph {
                    line: row + 1,
                    column: index + 1,
                    glyph,
                });
            }
        }
    }
    tracing::debug!(population = cells.len(), "parsed picture");
    Ok(cells.into_iter().collect())
}
