use lifespace_common::Window;
use lifespace_kernel::World;
use serde::{Deserialize, Serialize};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a display window, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given world, clipped to `window`.
    fn render(&self, world: &World, window: &Window) -> Self::Output;
}

/// Glyphs and separators used by [`TextRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub live: char,
    pub empty: char,
    /// Placed between adjacent cells of a row.
    pub pad: String,
    /// Placed between rows.
    pub row_separator: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            live: '@',
            empty: '.',
            pad: " ".to_string(),
            row_separator: "\n".to_string(),
        }
    }
}

/// Plain-text renderer: one line per row of the window.
#[derive(Debug, Default, Clone)]
pub struct TextRenderer {
    style: TextStyle,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: TextStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    fn row(&self, world: &World, window: &Window, y: i64) -> String {
        let mut line = String::new();
        for x in window.xs.clone() {
            if x != window.xs.start {
                line.push_str(&self.style.pad);
            }
            let glyph = if world.contains((x, y).into()) {
                self.style.live
            } else {
                self.style.empty
            };
            line.push(glyph);
        }
        line
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, world: &World, window: &Window) -> String {
        let rows: Vec<String> = window
            .ys
            .clone()
            .map(|y| self.row(world, window, y))
            .collect();
        rows.join(&self.style.row_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(cells: &[(i64, i64)]) -> World {
        cells.iter().copied().collect()
    }

    #[test]
    fn empty_world_renders_all_empty() {
        let window = Window::new(0..3, 0..2).unwrap();
        let frame = TextRenderer::new().render(&World::new(), &window);
        assert_eq!(frame, ". . .\n. . .");
    }

    #[test]
    fn glider_frame() {
        let glider = world(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let window = Window::new(0..4, 0..3).unwrap();
        let frame = TextRenderer::new().render(&glider, &window);
        assert_eq!(frame, ". @ . .\n. . @ .\n@ @ @ .");
    }

    #[test]
    fn cells_outside_window_are_clipped() {
        let w = world(&[(-5, -5), (1, 1), (50, 0)]);
        let window = Window::new(0..2, 0..2).unwrap();
        let frame = TextRenderer::new().render(&w, &window);
        assert_eq!(frame, ". .\n. @");
    }

    #[test]
    fn negative_window_coordinates() {
        let w = world(&[(-1, -1)]);
        let window = Window::new(-2..0, -1..0).unwrap();
        assert_eq!(TextRenderer::new().render(&w, &window), ". @");
    }

    #[test]
    fn custom_style() {
        let style = TextStyle {
            live: '#',
            empty: ' ',
            pad: String::new(),
            row_separator: "|".to_string(),
        };
        let w = world(&[(0, 0), (1, 1)]);
        let window = Window::new(0..2, 0..2).unwrap();
        let frame = TextRenderer::with_style(style).render(&w, &window);
        assert_eq!(frame, "# | #");
    }

    #[test]
    fn render_does_not_mutate_world() {
        let w = world(&[(0, 0), (1, 0)]);
        let before = w.clone();
        let _ = TextRenderer::new().render(&w, &Window::default());
        assert_eq!(w, before);
    }
}
