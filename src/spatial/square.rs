//! Rectangular 4-connected grid
//!
//! Cells are addressed `[row, col]`. Edges follow the compass clockwise from
//! north, and the grid does not wrap around at its borders.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::propagation::{CellSupport, Propagation, prune_unsupported};
use crate::io::configuration::{MAX_GRID_DIMENSION, SQUARE_SIDES};
use crate::io::error::{AlgorithmError, Result, invalid_cell, invalid_parameter};
use crate::spatial::edge::{Edge, EdgeId};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{TileId, Tileset};
use ndarray::Array2;

/// Coordinates of a cell as `[row, col]`
pub type SquareId = [usize; 2];

/// Side facing up
pub const NORTH: EdgeId = 0;
/// Side facing right
pub const EAST: EdgeId = 1;
/// Side facing down
pub const SOUTH: EdgeId = 2;
/// Side facing left
pub const WEST: EdgeId = 3;
/// All sides in clockwise order
pub const EDGES: [EdgeId; SQUARE_SIDES] = [NORTH, EAST, SOUTH, WEST];

/// Square grid in one of two phases
///
/// While building, `cells` holds editable domains. Sealing builds `support`
/// and drops `cells`; exactly one of the two is present at any time.
#[derive(Clone, Debug)]
pub struct SquareGrid<I, E> {
    tileset: Tileset<I, E>,
    width: usize,
    height: usize,
    cells: Option<Array2<TileBitset>>,
    support: Option<Array2<CellSupport>>,
}

impl<I, E: Edge> SquareGrid<I, E> {
    /// Grid whose every cell may hold any tile of the set
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the tiles are not four-sided.
    pub fn from_tiles(width: usize, height: usize, tileset: Tileset<I, E>) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if tileset.sides() != SQUARE_SIDES {
            return Err(AlgorithmError::SideMismatch {
                expected: SQUARE_SIDES,
                found: tileset.sides(),
            });
        }
        let cells = Array2::from_elem((height, width), tileset.full_domain());
        Ok(Self {
            tileset,
            width,
            height,
            cells: Some(cells),
            support: None,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether support records have been constructed
    pub const fn is_sealed(&self) -> bool {
        self.support.is_some()
    }

    /// Replace the domain of a cell before sealing
    ///
    /// # Errors
    ///
    /// Returns an error after sealing, for a cell outside the grid, or for a
    /// tile id outside the tileset.
    pub fn set_cell(&mut self, id: SquareId, tiles: &[TileId]) -> Result<()> {
        let max_tiles = self.tileset.len();
        if let Some(&index) = tiles.iter().find(|&&t| t >= max_tiles) {
            return Err(AlgorithmError::InvalidTileIndex { index, max_tiles });
        }
        let cells = self.cells.as_mut().ok_or(AlgorithmError::AlreadySealed {
            operation: "set cell",
        })?;
        let cell = cells.get_mut(id).ok_or_else(|| invalid_cell(&id))?;
        *cell = TileBitset::from_indices(tiles, max_tiles);
        Ok(())
    }

    /// Seal the grid: build every support table, then drop raw domains
    ///
    /// Tiles that already lack a compatible neighbour on some side are pruned
    /// and their removal propagated, so the returned pass may report a
    /// contradiction.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is already sealed.
    pub fn construct_deps(&mut self) -> Result<Propagation<SquareId>> {
        if self.is_sealed() {
            return Err(AlgorithmError::AlreadySealed {
                operation: "construct support records",
            });
        }
        let mut tables = Vec::with_capacity(self.width * self.height);
        for id in self.cell_ids() {
            tables.push(self.build_support_records(id)?);
        }
        let support = Array2::from_shape_vec((self.height, self.width), tables)
            .map_err(|e| invalid_parameter("support", &e, &"shape mismatch"))?;
        self.support = Some(support);
        self.cells = None;
        log::debug!(
            "sealed {}x{} grid over {} tiles",
            self.width,
            self.height,
            self.tileset.len()
        );
        prune_unsupported(self)
    }

    fn contains(&self, [row, col]: SquareId) -> bool {
        row < self.height && col < self.width
    }
}

impl<I, E: Edge> Grid for SquareGrid<I, E> {
    type CellId = SquareId;
    type Image = I;
    type Edge = E;

    fn tileset(&self) -> &Tileset<I, E> {
        &self.tileset
    }

    fn neighbours_of(&self, [row, col]: SquareId) -> Vec<(SquareId, EdgeId)> {
        let mut neighbours = Vec::with_capacity(SQUARE_SIDES);
        if !self.contains([row, col]) {
            return neighbours;
        }
        if row > 0 {
            neighbours.push(([row - 1, col], NORTH));
        }
        if col + 1 < self.width {
            neighbours.push(([row, col + 1], EAST));
        }
        if row + 1 < self.height {
            neighbours.push(([row + 1, col], SOUTH));
        }
        if col > 0 {
            neighbours.push(([row, col - 1], WEST));
        }
        neighbours
    }

    fn opposite_edge(&self, edge: EdgeId) -> EdgeId {
        (edge + SQUARE_SIDES / 2) % SQUARE_SIDES
    }

    fn cell_ids(&self) -> Vec<SquareId> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| [row, col]))
            .collect()
    }

    fn domain(&self, id: SquareId) -> Result<TileBitset> {
        if let Some(cells) = &self.cells {
            return cells.get(id).cloned().ok_or_else(|| invalid_cell(&id));
        }
        self.support(id).map(CellSupport::domain)
    }

    fn support(&self, id: SquareId) -> Result<&CellSupport> {
        self.support
            .as_ref()
            .ok_or(AlgorithmError::NotSealed {
                operation: "read support records",
            })?
            .get(id)
            .ok_or_else(|| invalid_cell(&id))
    }

    fn support_mut(&mut self, id: SquareId) -> Result<&mut CellSupport> {
        self.support
            .as_mut()
            .ok_or(AlgorithmError::NotSealed {
                operation: "update support records",
            })?
            .get_mut(id)
            .ok_or_else(|| invalid_cell(&id))
    }
}
