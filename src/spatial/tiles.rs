//! Tiles, their transforms, and the tileset arena they live in
//!
//! A tile is an ordered ring of edges, one per side, bound to an image handle,
//! an inverse-rarity weight and a name that records how it was derived.
//! Transforms always produce new tiles. Within a grid, tiles are referred to
//! by their index in the owning [`Tileset`].

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::edge::{Edge, EdgeId, Mirror};
use crate::spatial::handle::Rotatable;

/// Index of a tile within its `Tileset`
pub type TileId = usize;

/// Marker inserted before the rotation index of mirrored tiles
const MIRROR_MARKER: char = 'm';

/// An immutable tile: edges, image, weight and lineage name
#[derive(Clone, Debug)]
pub struct Tile<I, E> {
    edges: Vec<E>,
    image: I,
    weight: f64,
    name: String,
}

impl<I, E: Edge> Tile<I, E> {
    /// Create a base tile; its name receives the rotation index `-0`
    ///
    /// # Errors
    ///
    /// Returns an error if there are no edges or the weight is not a
    /// positive finite number.
    pub fn new(name: &str, image: I, edges: Vec<E>, weight: f64) -> Result<Self> {
        if edges.is_empty() {
            return Err(invalid_parameter(
                "edges",
                &0,
                &"a tile needs at least one side",
            ));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(invalid_parameter(
                "weight",
                &weight,
                &"weight must be positive and finite",
            ));
        }
        Ok(Self {
            edges,
            image,
            weight,
            name: format!("{name}-0"),
        })
    }

    /// Edges in side order
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Edge on one side
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge)
    }

    /// Number of sides
    pub fn sides(&self) -> usize {
        self.edges.len()
    }

    /// The opaque image handle
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Inverse-rarity weight; larger values survive elimination more often
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Lineage name, e.g. `up-t-2` or `house-left-m0`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `self` on side `edge` fits against `other` on side `other_edge`
    ///
    /// Out of range sides never match.
    pub fn matches(&self, edge: EdgeId, other: &Self, other_edge: EdgeId) -> bool {
        match (self.edges.get(edge), other.edges.get(other_edge)) {
            (Some(a), Some(b)) => a.compatible(b),
            _ => false,
        }
    }

    fn check_sides(&self, sides: usize) -> Result<()> {
        if sides == self.edges.len() {
            Ok(())
        } else {
            Err(AlgorithmError::SideMismatch {
                expected: sides,
                found: self.edges.len(),
            })
        }
    }
}

impl<I: Rotatable, E: Edge> Tile<I, E> {
    /// Rotate so that the edge at side `e` moves to `(e + shift) mod sides`
    ///
    /// # Errors
    ///
    /// Returns an error if `sides` disagrees with this tile's edge count.
    pub fn rotate(&self, shift: usize, sides: usize) -> Result<Self> {
        self.check_sides(sides)?;
        let shift = shift % sides;
        let mut edges = self.edges.clone();
        edges.rotate_right(shift);
        Ok(Self {
            edges,
            image: self.image.rotated(shift, sides),
            weight: self.weight,
            name: rotated_name(&self.name, shift, sides),
        })
    }
}

impl<I: Mirror, E: Edge + Mirror> Tile<I, E> {
    /// Reflect about the axis through side `axis` and its opposite
    ///
    /// Side `e` moves to `(2 * pivot - e) mod sides` with
    /// `pivot = sides / 2 + axis`, and each edge is replaced by its mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is not a side of this tile.
    pub fn mirror_across(&self, axis: EdgeId) -> Result<Self> {
        let sides = self.edges.len();
        if axis >= sides {
            return Err(AlgorithmError::InvalidEdge { edge: axis, sides });
        }
        let pivot = sides / 2 + axis;
        let mut edges = self.edges.clone();
        for (e, edge) in self.edges.iter().enumerate() {
            let target = (2 * pivot + sides - e) % sides;
            if let Some(slot) = edges.get_mut(target) {
                *slot = edge.mirrored_across(axis, sides);
            }
        }
        Ok(Self {
            edges,
            image: self.image.mirrored_across(axis, sides),
            weight: self.weight,
            name: mirrored_name(&self.name),
        })
    }
}

/// Split a name into its stem and trailing rotation index
fn split_rotation(name: &str) -> (&str, Option<usize>) {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = name.get(stem.len()..).unwrap_or_default();
    (stem, digits.parse().ok())
}

fn rotated_name(name: &str, shift: usize, sides: usize) -> String {
    match split_rotation(name) {
        (stem, Some(index)) => format!("{stem}{}", (index + shift) % sides),
        (stem, None) => format!("{stem}-{shift}"),
    }
}

fn mirrored_name(name: &str) -> String {
    let (stem, index) = split_rotation(name);
    let index = index.map(|i| i.to_string()).unwrap_or_default();
    stem.strip_suffix(MIRROR_MARKER).map_or_else(
        || format!("{stem}{MIRROR_MARKER}{index}"),
        |unmarked| format!("{unmarked}{index}"),
    )
}

/// Arena of tiles shared by every cell of a grid
///
/// All tiles have the same number of sides.
#[derive(Clone, Debug)]
pub struct Tileset<I, E> {
    tiles: Vec<Tile<I, E>>,
    sides: usize,
}

impl<I, E: Edge> Tileset<I, E> {
    /// Collect tiles into a tileset
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty or the tiles disagree on their
    /// number of sides.
    pub fn new(tiles: Vec<Tile<I, E>>) -> Result<Self> {
        let sides = tiles
            .first()
            .map(Tile::sides)
            .ok_or_else(|| invalid_parameter("tiles", &0, &"a tileset needs at least one tile"))?;
        for tile in &tiles {
            tile.check_sides(sides)?;
        }
        Ok(Self { tiles, sides })
    }

    /// Number of sides shared by all tiles
    pub const fn sides(&self) -> usize {
        self.sides
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile<I, E>> {
        self.tiles.get(id)
    }

    /// Tile by id, as an error when missing
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is out of range.
    pub fn tile(&self, id: TileId) -> Result<&Tile<I, E>> {
        self.tiles.get(id).ok_or(AlgorithmError::InvalidTileIndex {
            index: id,
            max_tiles: self.tiles.len(),
        })
    }

    /// Id of the first tile with the given name
    pub fn position(&self, name: &str) -> Option<TileId> {
        self.tiles.iter().position(|t| t.name() == name)
    }

    /// Iterate tiles with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile<I, E>)> + '_ {
        self.tiles.iter().enumerate()
    }

    /// Domain containing every tile
    pub fn full_domain(&self) -> TileBitset {
        TileBitset::all(self.tiles.len())
    }
}
