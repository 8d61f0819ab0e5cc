//! Command-line interface for generating a grid from a built-in tileset

use crate::algorithm::executor::{Completion, Generator, RunSummary};
use crate::algorithm::selection::survey;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_DIMENSION, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_TILE_PIXELS,
    GIF_FRAME_DELAY_MS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{RenderOptions, export_grid_as_png};
use crate::io::progress::ProgressManager;
use crate::io::tilesets::TilesetName;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::edge::ReflexiveStringEdge;
use crate::spatial::handle::TileImage;
use crate::spatial::square::SquareGrid;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Grid type produced by the command-line tool
pub type PatternGrid = SquareGrid<TileImage, ReflexiveStringEdge>;

#[derive(Parser, Debug)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate edge-matched tile grids by incremental elimination"
)]
/// Command-line arguments for the generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Built-in tileset to generate from
    #[arg(short, long, value_enum, default_value_t = TilesetName::Basic)]
    pub tileset: TilesetName,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_DIMENSION)]
    pub width: usize,

    /// Grid height in cells (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum eliminations per attempt
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Attempts before giving up when a run ends in contradiction
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Edge length of a rendered tile in pixels
    #[arg(short = 'p', long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: u32,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Draw remaining candidates in undecided cells
    #[arg(short, long)]
    pub candidates: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid height, falling back to the width
    pub fn grid_height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }

    /// Rendering options implied by the flags
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tile_pixels: self.tile_pixels,
            show_candidates: self.candidates,
        }
    }

    /// Path of the animation written next to the output
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());
        self.output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

/// Outcome of the whole command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Attempts made, counting from one
    pub attempts: usize,
    /// Summary of the last attempt
    pub summary: RunSummary,
}

/// Runs generation attempts and exports the final grid
pub struct Runner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl Runner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, retrying on contradiction, then write the outputs
    ///
    /// Attempt `k` (from zero) uses seed `seed + k`. The grid of the last
    /// attempt is exported even if it is contradicted.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the tileset cannot be
    /// built, or export fails.
    pub fn run(&self) -> Result<RunReport> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"at least one attempt is required",
            ));
        }

        let mut attempt = 0;
        loop {
            let seed = self.cli.seed.wrapping_add(attempt as u64);
            let (grid, summary) = self.attempt(attempt, seed)?;
            attempt += 1;

            let retry = matches!(summary.completion, Some(Completion::Contradicted { .. }))
                && attempt < self.cli.attempts;
            if retry {
                log::warn!("attempt {attempt} with seed {seed} ended in contradiction, restarting");
                continue;
            }

            self.progress_manager
                .finish(format!("{:?} after {} steps", summary.completion, summary.steps));
            export_grid_as_png(&grid, &self.cli.render_options(), &self.cli.output)?;
            return Ok(RunReport {
                attempts: attempt,
                summary,
            });
        }
    }

    fn attempt(&self, attempt: usize, seed: u64) -> Result<(PatternGrid, RunSummary)> {
        let tileset = self.cli.tileset.load(self.cli.tile_pixels)?;
        let mut grid =
            SquareGrid::from_tiles(self.cli.width, self.cli.grid_height(), tileset)?;
        let pruned = grid.construct_deps()?;
        log::debug!(
            "{} tiles pruned while sealing, contradiction: {:?}",
            pruned.removed(),
            pruned.contradiction
        );

        self.progress_manager
            .start_attempt(attempt + 1, self.cli.attempts, &survey(&grid)?);

        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(self.cli.render_options(), 1));
        let mut generator = Generator::new(grid, seed);
        let mut failure = None;
        let progress = &self.progress_manager;
        let summary = generator.run_with(self.cli.max_steps, |grid, _| {
            if let Ok(state) = survey(grid) {
                progress.update(&state);
            }
            if let Some(Err(e)) = capture.as_mut().map(|c| c.record_step(grid)) {
                failure.get_or_insert(e);
            }
        })?;
        if let Some(e) = failure {
            return Err(e);
        }

        let grid = generator.into_grid();
        if let Some(mut capture) = capture {
            capture.record_final(&grid)?;
            write_visualization(&capture, &self.cli.visualization_path())?;
        }
        Ok((grid, summary))
    }
}

fn write_visualization(capture: &VisualizationCapture, path: &Path) -> Result<()> {
    capture.export_gif(path, GIF_FRAME_DELAY_MS)
}
