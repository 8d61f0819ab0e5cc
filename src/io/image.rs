//! Tile swatch painting, grid rendering and PNG export

use crate::io::configuration::{
    CANDIDATE_COLUMNS, CONTRADICTION_COLOR, DEFAULT_TILE_PIXELS, SQUARE_SIDES, UNDECIDED_COLOR,
};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::edge::{Edge, ReflexiveStringEdge};
use crate::spatial::grid::Grid;
use crate::spatial::handle::TileImage;
use crate::spatial::square::SquareGrid;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Colours for pattern symbols `a` through `h`
const PALETTE: [[u8; 4]; 8] = [
    [70, 130, 180, 255],
    [120, 120, 120, 255],
    [60, 160, 70, 255],
    [139, 90, 43, 255],
    [205, 92, 92, 255],
    [240, 200, 80, 255],
    [150, 80, 170, 255],
    [240, 240, 240, 255],
];

/// Colour used for one pattern symbol
pub fn symbol_color(symbol: char) -> [u8; 4] {
    let index = (symbol as u32).wrapping_sub('a' as u32) as usize;
    PALETTE.get(index).copied().unwrap_or_else(|| {
        let shade = (symbol as u32 % 200) as u8 + 40;
        [shade, shade, shade, 255]
    })
}

/// Paint a square swatch from four clockwise edge patterns
///
/// Each pixel takes the colour of the pattern symbol on its nearest side at
/// the matching position along that side. Pixels equidistant from several
/// sides blend those colours, which keeps the swatch consistent under
/// quarter-turn rotation and reflection.
///
/// # Errors
///
/// Returns an error if there are not exactly four edges or a pattern is
/// empty.
pub fn paint_swatch(edges: &[ReflexiveStringEdge], size: u32) -> Result<RgbaImage> {
    if edges.len() != SQUARE_SIDES {
        return Err(AlgorithmError::SideMismatch {
            expected: SQUARE_SIDES,
            found: edges.len(),
        });
    }
    let patterns: Vec<Vec<char>> = edges.iter().map(|e| e.pattern().chars().collect()).collect();
    if patterns.iter().any(Vec::is_empty) {
        return Err(crate::io::error::invalid_parameter(
            "edges",
            &"<empty>",
            &"edge patterns must not be empty",
        ));
    }

    let last = size.saturating_sub(1);
    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // (distance to side, position along it read clockwise) per side
        let sides = [(y, x), (last - x, y), (last - y, last - x), (x, last - y)];
        let nearest = sides.iter().map(|&(d, _)| d).min().unwrap_or(0);

        let mut sum = [0u32; 4];
        let mut count = 0u32;
        for (side, &(distance, along)) in sides.iter().enumerate() {
            if distance != nearest {
                continue;
            }
            let Some(pattern) = patterns.get(side) else {
                continue;
            };
            let index = (along as usize * pattern.len()) / size as usize;
            let color = pattern.get(index).map_or([0, 0, 0, 255], |&c| symbol_color(c));
            for (acc, channel) in sum.iter_mut().zip(color) {
                *acc += u32::from(channel);
            }
            count += 1;
        }
        let count = count.max(1);
        *pixel = Rgba(sum.map(|channel| (channel / count) as u8));
    }
    Ok(img)
}

/// How grids are drawn
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Edge length of one cell in pixels
    pub tile_pixels: u32,
    /// Draw thumbnails of the remaining candidates in undecided cells
    pub show_candidates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_pixels: DEFAULT_TILE_PIXELS,
            show_candidates: false,
        }
    }
}

/// Render the current domains of a square grid
///
/// Collapsed cells show their tile, contradicted cells are black and
/// undecided cells are grey, optionally overlaid with candidate thumbnails.
///
/// # Errors
///
/// Returns an error if a tile image cannot be materialized or a domain
/// cannot be read.
pub fn render_grid<E: Edge>(
    grid: &SquareGrid<TileImage, E>,
    options: &RenderOptions,
) -> Result<RgbaImage> {
    let size = options.tile_pixels.max(1);
    let thumb = (size / CANDIDATE_COLUMNS).max(1);

    let mut tiles = Vec::with_capacity(grid.tileset().len());
    let mut thumbs = Vec::with_capacity(grid.tileset().len());
    for (_, tile) in grid.tileset().iter() {
        let img = tile.image().materialize()?;
        thumbs.push(imageops::resize(&img, thumb, thumb, FilterType::Nearest));
        tiles.push(if img.dimensions() == (size, size) {
            img
        } else {
            imageops::resize(&img, size, size, FilterType::Nearest)
        });
    }

    let mut canvas = RgbaImage::from_pixel(
        grid.width() as u32 * size,
        grid.height() as u32 * size,
        Rgba(UNDECIDED_COLOR),
    );
    for [row, col] in grid.cell_ids() {
        let x = i64::from(col as u32 * size);
        let y = i64::from(row as u32 * size);
        let domain = grid.domain([row, col])?;
        match domain.count() {
            0 => {
                let block = RgbaImage::from_pixel(size, size, Rgba(CONTRADICTION_COLOR));
                imageops::replace(&mut canvas, &block, x, y);
            }
            1 => {
                if let Some(img) = domain.iter().next().and_then(|id| tiles.get(id)) {
                    imageops::replace(&mut canvas, img, x, y);
                }
            }
            _ if options.show_candidates => {
                let slots = (CANDIDATE_COLUMNS * CANDIDATE_COLUMNS) as usize;
                for (k, id) in domain.iter().take(slots).enumerate() {
                    let k = k as u32;
                    if let Some(img) = thumbs.get(id) {
                        let dx = i64::from((k % CANDIDATE_COLUMNS) * thumb);
                        let dy = i64::from((k / CANDIDATE_COLUMNS) * thumb);
                        imageops::replace(&mut canvas, img, x + dx, y + dy);
                    }
                }
            }
            _ => {}
        }
    }
    Ok(canvas)
}

/// Render a grid and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<E: Edge>(
    grid: &SquareGrid<TileImage, E>,
    options: &RenderOptions,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid, options)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
