//! Frame capture and GIF generation for generation runs

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{RenderOptions, render_grid};
use crate::spatial::edge::Edge;
use crate::spatial::handle::TileImage;
use crate::spatial::square::SquareGrid;
use image::{Frame, RgbaImage};
use std::path::Path;

/// Captures rendered grid states for an animation
///
/// One frame is kept for every `every` captured steps, plus the final state.
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    options: RenderOptions,
    every: usize,
    steps_seen: usize,
}

impl VisualizationCapture {
    /// Start a capture that keeps one frame per `every` steps
    pub fn new(options: RenderOptions, every: usize) -> Self {
        Self {
            frames: Vec::new(),
            options,
            every: every.max(1),
            steps_seen: 0,
        }
    }

    /// Record one step, rendering the grid if this step is sampled
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered.
    pub fn record_step<E: Edge>(&mut self, grid: &SquareGrid<TileImage, E>) -> Result<()> {
        if self.steps_seen % self.every == 0 {
            self.frames.push(render_grid(grid, &self.options)?);
        }
        self.steps_seen += 1;
        Ok(())
    }

    /// Record the final grid state unconditionally
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered.
    pub fn record_final<E: Edge>(&mut self, grid: &SquareGrid<TileImage, E>) -> Result<()> {
        self.frames.push(render_grid(grid, &self.options)?);
        Ok(())
    }

    /// Returns the number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers support, frames are
    /// skipped so the apparent animation speed is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(crate::io::error::invalid_parameter(
                "visualization",
                &0,
                &"no frames captured",
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let last = self.frames.len().saturating_sub(1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .filter(|&(i, _)| i % skip_factor == 0 || i == last)
            .map(|(_, img)| frame(img.clone(), delay_ms))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last_img) = self.frames.last() {
            frames.push(frame(last_img.clone(), delay_ms * 25));
        }
        frames
    }
}

fn frame(img: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
