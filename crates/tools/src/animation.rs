use lifespace_common::Window;
use lifespace_kernel::{Simulation, World};
use lifespace_render::Renderer;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::{ToolError, WorldInspector};

/// ANSI escape: cursor home, then clear the screen.
pub const CLEAR_SCREEN: &str = "\x1b[;H\x1b[2J";

/// Animation configuration: how many generations, how long to hold each
/// frame, and which part of the plane to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Generations to advance; `generations + 1` frames are shown.
    pub generations: u64,
    /// Pause between consecutive frames.
    pub pause: Duration,
    pub window: Window,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            pause: Duration::from_secs(1),
            window: Window::default(),
        }
    }
}

/// One rendered frame with its status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub generation: u64,
    pub population: usize,
    pub picture: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {}, Population {}\n{}",
            self.generation, self.population, self.picture
        )
    }
}

/// Where frames go, and how the loop waits between them.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
    fn pause(&mut self, duration: Duration);
}

/// Writes frames to a terminal, clearing the screen before each one, and
/// sleeps the current thread between frames.
pub struct TerminalSink<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Keep earlier frames on screen instead of clearing.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        writeln!(self.out, "{frame}")?;
        self.out.flush()
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Alternates rendering with single generation steps.
pub struct AnimationLoop<R> {
    renderer: R,
    config: AnimationConfig,
}

impl<R: Renderer<Output = String>> AnimationLoop<R> {
    pub fn new(renderer: R, config: AnimationConfig) -> Self {
        Self { renderer, config }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Render the frame for the simulation's current generation.
    pub fn frame(&self, sim: &Simulation) -> Frame {
        let summary = WorldInspector::summary(sim.world(), sim.generation());
        Frame {
            generation: summary.generation,
            population: summary.population,
            picture: self.renderer.render(sim.world(), &self.config.window),
        }
    }

    /// Play the animation from `seed`, returning the final world.
    ///
    /// Shows generations `0..=generations`, pausing between frames and
    /// stepping once after each frame but the last.
    pub fn play<S: FrameSink>(&self, seed: World, sink: &mut S) -> Result<World, ToolError> {
        let _span = tracing::info_span!("animate", generations = self.config.generations).entered();
        let mut sim = Simulation::new(seed);
        loop {
            let frame = self.frame(&sim);
            tracing::debug!(
                generation = frame.generation,
                population = frame.population,
                "presenting frame"
            );
            sink.present(&frame)?;
            if sim.generation() >= self.config.generations {
                break;
            }
            sink.pause(self.config.pause);
            sim.advance();
        }
        tracing::info!(
            generations = sim.generation(),
            population = sim.population(),
            "animation finished"
        );
        Ok(sim.into_world())
    }
}
