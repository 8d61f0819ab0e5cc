//! Opaque image handles carried by tiles
//!
//! The grid never looks at pixels. Tiles only need their image to follow the
//! same rotations and reflections as their edges, so transforms are recorded
//! on the handle and applied when the image is finally drawn.

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::edge::{EdgeId, Mirror};
use image::{RgbaImage, imageops};
use std::sync::Arc;

/// Rotation capability of an image handle
pub trait Rotatable: Sized {
    /// Rotate clockwise by `steps` side units of `2π / sides`
    #[must_use]
    fn rotated(&self, steps: usize, sides: usize) -> Self;
}

impl Rotatable for () {
    fn rotated(&self, _steps: usize, _sides: usize) -> Self {}
}

impl Mirror for () {
    fn mirrored_across(&self, _axis: EdgeId, _sides: usize) -> Self {}
}

/// A transform recorded on a `TileImage`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageTransform {
    /// Clockwise rotation by `steps` of `sides`
    Rotate {
        /// Side units to rotate by
        steps: usize,
        /// Side count defining the unit angle
        sides: usize,
    },
    /// Reflection about the axis through side `axis`
    Mirror {
        /// Side the axis passes through
        axis: EdgeId,
        /// Side count defining the axis angle
        sides: usize,
    },
}

/// Shared raster with a deferred chain of transforms
///
/// Cloning and transforming are cheap; pixels are only touched by
/// [`TileImage::materialize`].
#[derive(Clone, Debug)]
pub struct TileImage {
    pixels: Arc<RgbaImage>,
    transforms: Vec<ImageTransform>,
}

impl TileImage {
    /// Wrap an untransformed raster
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            transforms: Vec::new(),
        }
    }

    /// The untransformed raster
    pub fn source(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Transforms recorded so far, oldest first
    pub fn transforms(&self) -> &[ImageTransform] {
        &self.transforms
    }

    /// Apply the recorded transforms to produce the displayed raster
    ///
    /// # Errors
    ///
    /// Returns an error if a transform is not a multiple of a quarter turn
    /// (or a reflection about a non axis-aligned line), which cannot be
    /// expressed on a pixel grid.
    pub fn materialize(&self) -> Result<RgbaImage> {
        let mut img = (*self.pixels).clone();
        for transform in &self.transforms {
            img = match *transform {
                ImageTransform::Rotate { steps, sides } => {
                    match quarter_turns(steps, sides, "rotation")? {
                        0 => img,
                        1 => imageops::rotate90(&img),
                        2 => imageops::rotate180(&img),
                        _ => imageops::rotate270(&img),
                    }
                }
                ImageTransform::Mirror { axis, sides } => {
                    // Even quarter turns put the axis through top and bottom
                    if quarter_turns(axis, sides, "reflection axis")? % 2 == 0 {
                        imageops::flip_horizontal(&img)
                    } else {
                        imageops::flip_vertical(&img)
                    }
                }
            };
        }
        Ok(img)
    }

    fn with(&self, transform: ImageTransform) -> Self {
        let mut transforms = self.transforms.clone();
        transforms.push(transform);
        Self {
            pixels: Arc::clone(&self.pixels),
            transforms,
        }
    }
}

fn quarter_turns(steps: usize, sides: usize, what: &str) -> Result<usize> {
    if sides == 0 || (steps % sides) * 4 % sides != 0 {
        return Err(AlgorithmError::Transform {
            reason: format!("{what} of {steps}/{sides} turns is not a quarter turn"),
        });
    }
    Ok((steps % sides) * 4 / sides)
}

impl Rotatable for TileImage {
    fn rotated(&self, steps: usize, sides: usize) -> Self {
        self.with(ImageTransform::Rotate { steps, sides })
    }
}

impl Mirror for TileImage {
    fn mirrored_across(&self, axis: EdgeId, sides: usize) -> Self {
        self.with(ImageTransform::Mirror { axis, sides })
    }
}
