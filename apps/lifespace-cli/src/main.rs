use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use lifespace_common::{Generations, Window, parse_range};
use lifespace_kernel::{Pattern, World, count, run};
use lifespace_render::{Renderer, TextRenderer};
use lifespace_tools::{
    AnimationConfig, AnimationLoop, TerminalSink, WorldInspector, load_seed, random_soup,
    seed_from_cells,
};

/// Pattern used when no seed is given.
const DEFAULT_PATTERN: &str = "square";

#[derive(Parser)]
#[command(name = "lifespace", about = "Sparse Conway's Game of Life on an unbounded plane")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and rule info
    Info,
    /// List the built-in seed patterns
    Patterns,
    /// Advance a seed and print the final generation
    Run {
        #[command(flatten)]
        seed: SeedArgs,
        /// Number of generations to advance
        #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
        generations: Generations,
        /// Print the final world as a picture
        #[arg(long)]
        show: bool,
        /// Print the final world as JSON `[x, y]` pairs
        #[arg(long, conflicts_with = "show")]
        json: bool,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Print live-neighbor counts for a seed
    Count {
        #[command(flatten)]
        seed: SeedArgs,
    },
    /// Animate a seed in the terminal
    Animate {
        #[command(flatten)]
        seed: SeedArgs,
        /// Number of generations to show after the seed
        #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
        generations: Generations,
        /// Pause between frames, in milliseconds
        #[arg(short, long, default_value = "1000")]
        pause_ms: u64,
        /// Keep earlier frames instead of clearing the screen
        #[arg(long)]
        no_clear: bool,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Args)]
struct SeedArgs {
    #[command(flatten)]
    source: SeedSource,
    /// Fraction of live cells in a random soup
    #[arg(long, default_value = "0.35", requires = "random")]
    density: f64,
    /// RNG seed for a random soup
    #[arg(long, default_value = "0", requires = "random")]
    rng_seed: u64,
    /// Side length of a random soup, anchored at the origin
    #[arg(long, default_value = "16", requires = "random")]
    soup_size: i64,
}

#[derive(Args)]
#[group(multiple = false)]
struct SeedSource {
    /// Built-in pattern name (see `patterns`)
    #[arg(long)]
    pattern: Option<String>,
    /// Seed file: `.json` array of [x, y] pairs, otherwise a text picture
    #[arg(long)]
    seed_file: Option<PathBuf>,
    /// Live cell as `x,y`; repeatable
    #[arg(long = "cell", allow_hyphen_values = true)]
    cells: Vec<String>,
    /// Random soup (see --density, --rng-seed, --soup-size)
    #[arg(long)]
    random: bool,
}

impl SeedArgs {
    fn world(&self) -> anyhow::Result<World> {
        let source = &self.source;
        if let Some(path) = &source.seed_file {
            return load_seed(path).with_context(|| format!("loading seed {}", path.display()));
        }
        if !source.cells.is_empty() {
            return seed_from_cells(&source.cells).context("parsing --cell");
        }
        if source.random {
            let window = Window::new(0..self.soup_size, 0..self.soup_size)
                .context("invalid --soup-size")?;
            return random_soup(&window, self.density, self.rng_seed).context("seeding random soup");
        }
        let name = source.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);
        Ok(Pattern::find(name)?.world())
    }
}

#[derive(Args)]
struct WindowArgs {
    /// Columns to display, as START..END
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    x_range: Option<Range<i64>>,
    /// Rows to display, as START..END
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    y_range: Option<Range<i64>>,
    /// Margin around the live cells when a range is not given
    #[arg(long, default_value = "2")]
    margin: i64,
}

impl WindowArgs {
    /// Explicit ranges win; missing axes are fitted to `world`.
    fn resolve(&self, world: &World) -> anyhow::Result<Window> {
        let fitted = WorldInspector::fit_window(world, self.margin, Window::default());
        let xs = self.x_range.clone().unwrap_or(fitted.xs);
        let ys = self.y_range.clone().unwrap_or(fitted.ys);
        Ok(Window::new(xs, ys)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("lifespace v{}", env!("CARGO_PKG_VERSION"));
            println!("rule: B3/S23 on an unbounded plane");
            println!("patterns: {}", Pattern::all().len());
        }
        Commands::Patterns => {
            for p in Pattern::all() {
                println!("{:<20} {:>3} cells  {}", p.name, p.cells.len(), p.description);
            }
        }
        Commands::Run {
            seed,
            generations,
            show,
            json,
            window,
        } => {
            let world = seed.world()?;
            tracing::info!(
                population = world.population(),
                %generations,
                "running"
            );
            let last = run(&world, generations.get());
            if json {
                println!("{}", serde_json::to_string(&last)?);
            } else {
                println!("{}", WorldInspector::summary(&last, generations.get()));
                if show {
                    let window = window.resolve(&last)?;
                    println!("{}", TextRenderer::new().render(&last, &window));
                }
            }
        }
        Commands::Count { seed } => {
            let world = seed.world()?;
            let mut counts: Vec<_> = count(&world).into_iter().collect();
            counts.sort();
            for (cell, n) in counts {
                let marker = if world.contains(cell) { "live" } else { "dead" };
                println!("{cell} {n} {marker}");
            }
        }
        Commands::Animate {
            seed,
            generations,
            pause_ms,
            no_clear,
            window,
        } => {
            let world = seed.world()?;
            let config = AnimationConfig {
                generations: generations.get(),
                pause: Duration::from_millis(pause_ms),
                window: window.resolve(&world)?,
            };
            let anim = AnimationLoop::new(TextRenderer::new(), config);
            let mut sink = TerminalSink::new(std::io::stdout().lock());
            if no_clear {
                sink = sink.without_clear();
            }
            anim.play(world, &mut sink).context("animation failed")?;
        }
    }

    Ok(())
}
