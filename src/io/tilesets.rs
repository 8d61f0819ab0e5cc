//! Built-in tilesets
//!
//! Edge patterns are read clockwise, three symbols per side, in the order
//! north, east, south, west. Images are painted from the patterns so the
//! tilesets need no asset files.

use crate::io::configuration::{DEFAULT_TILE_WEIGHT, SQUARE_SIDES};
use crate::io::error::Result;
use crate::io::image::paint_swatch;
use crate::spatial::edge::ReflexiveStringEdge;
use crate::spatial::handle::TileImage;
use crate::spatial::square::NORTH;
use crate::spatial::tiles::{Tile, Tileset};
use clap::ValueEnum;
use std::fmt;

/// Tile type used by the built-in tilesets
pub type PatternTile = Tile<TileImage, ReflexiveStringEdge>;

/// Names of the built-in tilesets
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TilesetName {
    /// Pipes of one kind on a plain background
    Basic,
    /// Two kinds of wire, chips and corners
    Circuit,
    /// Sky, hills, trees and houses
    Landscape,
}

impl fmt::Display for TilesetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Circuit => "circuit",
            Self::Landscape => "landscape",
        };
        f.write_str(name)
    }
}

impl TilesetName {
    /// Build the named tileset with swatches of `tile_pixels` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if a tile cannot be constructed.
    pub fn load(self, tile_pixels: u32) -> Result<Tileset<TileImage, ReflexiveStringEdge>> {
        let tiles = match self {
            Self::Basic => basic(tile_pixels)?,
            Self::Circuit => circuit(tile_pixels)?,
            Self::Landscape => landscape(tile_pixels)?,
        };
        Tileset::new(tiles)
    }
}

/// Build a tile whose image is painted from its own edge patterns
///
/// # Errors
///
/// Returns an error if the patterns are not four non-empty strings or the
/// weight is not positive.
pub fn tile_from_patterns(
    name: &str,
    patterns: [&str; SQUARE_SIDES],
    weight: f64,
    tile_pixels: u32,
) -> Result<PatternTile> {
    let edges = ReflexiveStringEdge::from_patterns(&patterns);
    let image = TileImage::new(paint_swatch(&edges, tile_pixels)?);
    Tile::new(name, image, edges, weight)
}

/// A tile followed by its rotations by one to `count - 1` sides
fn with_rotations(tile: PatternTile, count: usize) -> Result<Vec<PatternTile>> {
    let mut tiles = Vec::with_capacity(count);
    for shift in 1..count {
        tiles.push(tile.rotate(shift, SQUARE_SIDES)?);
    }
    tiles.insert(0, tile);
    Ok(tiles)
}

/// A tile followed by its reflection across the north-south axis
fn with_mirror(tile: PatternTile) -> Result<Vec<PatternTile>> {
    let mirrored = tile.mirror_across(NORTH)?;
    Ok(vec![tile, mirrored])
}

fn basic(px: u32) -> Result<Vec<PatternTile>> {
    let blank = tile_from_patterns("blank", ["aaa", "aaa", "aaa", "aaa"], 20.0, px)?;
    let up_t = tile_from_patterns("up-t", ["aba", "aba", "aaa", "aba"], DEFAULT_TILE_WEIGHT, px)?;
    let left_right = tile_from_patterns(
        "left-right",
        ["aaa", "aba", "aaa", "aba"],
        DEFAULT_TILE_WEIGHT,
        px,
    )?;

    let mut tiles = vec![blank];
    tiles.extend(with_rotations(up_t, 4)?);
    tiles.extend(with_rotations(left_right, 2)?);
    Ok(tiles)
}

fn circuit(px: u32) -> Result<Vec<PatternTile>> {
    let w = DEFAULT_TILE_WEIGHT;
    let blank = tile_from_patterns("blank", ["aaa", "aaa", "aaa", "aaa"], w, px)?;
    let black = tile_from_patterns("black", ["ddd", "ddd", "ddd", "ddd"], w, px)?;
    let grey = tile_from_patterns("left-right-grey", ["aaa", "aba", "aaa", "aba"], 0.1, px)?;
    let green = tile_from_patterns("left-right-green", ["aaa", "aca", "aaa", "aca"], w, px)?;
    let bend = tile_from_patterns("up-right-green", ["aca", "aca", "aaa", "aaa"], w, px)?;
    let crossover = tile_from_patterns("crossover", ["aba", "aca", "aba", "aca"], 0.1, px)?;
    let junction = tile_from_patterns(
        "green-left-grey-right",
        ["aaa", "aba", "aaa", "aca"],
        w,
        px,
    )?;
    let pin = tile_from_patterns("pin-right", ["daa", "aca", "aad", "ddd"], w, px)?;
    let corner = tile_from_patterns("corner-top-left", ["daa", "aaa", "aaa", "aad"], 0.5, px)?;

    let mut tiles = vec![blank, black];
    tiles.extend(with_rotations(grey, 2)?);
    tiles.extend(with_rotations(green, 2)?);
    tiles.extend(with_rotations(bend, 4)?);
    tiles.extend(with_rotations(crossover, 2)?);
    tiles.extend(with_rotations(junction, 4)?);
    tiles.extend(with_rotations(pin, 4)?);
    tiles.extend(with_rotations(corner, 4)?);
    Ok(tiles)
}

fn landscape(px: u32) -> Result<Vec<PatternTile>> {
    let w = DEFAULT_TILE_WEIGHT;
    let blue = tile_from_patterns("blue", ["aaa", "aaa", "aaa", "aaa"], w, px)?;
    let brown = tile_from_patterns("brown", ["ccc", "ccc", "ccc", "ccc"], w, px)?;
    let green_flat = tile_from_patterns("green-flat", ["aaa", "abc", "ccc", "cba"], 20.0, px)?;
    let green_top_left = tile_from_patterns("green-top-left", ["bcc", "ccc", "ccc", "ccb"], w, px)?;
    let hill_left_bottom =
        tile_from_patterns("hill-left-bottom", ["aaa", "abc", "ccb", "aaa"], w, px)?;
    let hill_left_top = tile_from_patterns("hill-left-top", ["aaa", "bcc", "ccc", "cba"], w, px)?;
    let tree_base = tile_from_patterns("tree-base", ["ada", "abc", "ccc", "cba"], 10.0, px)?;
    let tree_trunk = tile_from_patterns("tree-trunk", ["ada", "aaa", "ada", "aaa"], 0.1, px)?;
    let tree_top = tile_from_patterns("tree-top", ["aaa", "aaa", "ada", "aaa"], 0.1, px)?;
    let house_base = tile_from_patterns("house-base", ["eee", "efc", "ccc", "cfe"], 10.0, px)?;
    let house_left = tile_from_patterns("house-left", ["aee", "efc", "ccc", "cba"], w, px)?;
    let house_top = tile_from_patterns("house-top", ["aaa", "age", "eee", "ega"], w, px)?;
    let house_top_left =
        tile_from_patterns("house-top-left", ["aaa", "age", "eea", "aaa"], w, px)?;

    let mut tiles = vec![blue, brown, green_flat];
    tiles.extend(with_mirror(green_top_left)?);
    tiles.extend(with_mirror(hill_left_bottom)?);
    tiles.extend(with_mirror(hill_left_top)?);
    tiles.extend([tree_base, tree_trunk, tree_top, house_base, house_top]);
    tiles.extend(with_mirror(house_left)?);
    tiles.extend(with_mirror(house_top_left)?);
    Ok(tiles)
}
