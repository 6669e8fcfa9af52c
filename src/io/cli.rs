//! Command-line interface for generating and printing origin shift mazes

use crate::algorithm::origin_shift::Maze;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, STEPS_PER_CELL,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::export_maze_as_png;
use crate::io::progress::StepProgress;
use crate::io::render::{describe, render_directions, render_walls};
use crate::spatial::validation::check_spanning_tree;
use clap::{Parser, ValueEnum};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// How the finished maze is written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Box-drawn walls and passages
    Walls,
    /// One direction glyph per cell
    Directions,
    /// Print nothing but the summary line
    None,
}

#[derive(Parser)]
#[command(name = "originshift")]
#[command(
    author,
    version,
    about = "Generate perfect mazes with the origin shift algorithm"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Origin shifts to perform (defaults to ten per cell)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Text rendering written to standard output
    #[arg(short, long, value_enum, default_value_t = RenderMode::Walls)]
    pub render: RenderMode,

    /// Also save the maze as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pixels per cell in the PNG image
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Check the spanning-tree property after shuffling
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Number of shifts to run, falling back to `STEPS_PER_CELL` per cell
    pub const fn step_count(&self) -> usize {
        match self.steps {
            Some(steps) => steps,
            None => self
                .width
                .saturating_mul(self.height)
                .saturating_mul(STEPS_PER_CELL),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Builds, shuffles and reports one maze according to CLI arguments
pub struct MazeRunner {
    cli: Cli,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the maze and write the requested rendering to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, verification fails,
    /// writing to `out` fails, or the PNG export fails.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let start_time = Instant::now();
        let steps = self.cli.step_count();

        let mut maze: Maze<()> = Maze::with_seed(self.cli.width, self.cli.height, self.cli.seed)?;

        let progress = StepProgress::new(steps, self.cli.should_show_progress());
        let bar = progress.handle();
        maze.on_update(move |_| bar.inc(1));

        // A single cell has nowhere to shift to and is already a perfect maze
        if maze.grid().len() > 1 {
            maze.shuffle(steps)?;
        }
        progress.finish();
        info!(
            "performed {} origin shifts in {:.2?}",
            progress.position(),
            start_time.elapsed()
        );

        if self.cli.verify {
            check_spanning_tree(maze.grid())?;
            info!("spanning tree verified");
        }

        let rendering = match self.cli.render {
            RenderMode::Walls => render_walls(maze.grid(), None),
            RenderMode::Directions => render_directions(maze.grid()),
            RenderMode::None => String::new(),
        };
        let summary = describe(maze.grid());
        write_output(out, &rendering, &summary)?;

        if let Some(path) = &self.cli.output {
            export_maze_as_png(maze.grid(), self.cli.cell_size, path)?;
            info!("saved maze image to {}", path.display());
        }

        Ok(())
    }
}

fn write_output(out: &mut impl Write, rendering: &str, summary: &str) -> Result<()> {
    let to_error = |source| MazeError::FileSystem {
        path: PathBuf::from("<stdout>"),
        operation: "write rendering",
        source,
    };
    out.write_all(rendering.as_bytes()).map_err(to_error)?;
    writeln!(out, "{summary}").map_err(to_error)?;
    Ok(())
}
