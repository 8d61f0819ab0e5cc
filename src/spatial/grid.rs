//! Topology-agnostic grid engine
//!
//! A grid owns one domain per cell. Before sealing, domains are raw tile sets
//! that the caller may edit. Sealing replaces them by support tables built
//! from the neighbour topology; from then on every change goes through
//! [`Grid::eliminate`], which keeps the tables arc consistent.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::propagation::{CellSupport, Propagation, TileDeps, propagate_removal};
use crate::io::error::Result;
use crate::spatial::edge::{Edge, EdgeId};
use crate::spatial::tiles::{Tile, TileId, Tileset};
use std::fmt;
use std::hash::Hash;

/// Grid of cells over a shared tileset
///
/// Implementors supply the topology and storage; support construction and
/// elimination come for free.
pub trait Grid {
    /// Coordinate of one cell
    type CellId: Copy + Eq + Hash + fmt::Debug;
    /// Image handle carried by the tiles
    type Image;
    /// Edge type shared by every tile in the grid
    type Edge: Edge;

    /// Tiles every domain indexes into
    fn tileset(&self) -> &Tileset<Self::Image, Self::Edge>;

    /// Neighbours of a cell with the side of `id` they lie across
    ///
    /// Cells on a boundary simply have fewer neighbours.
    fn neighbours_of(&self, id: Self::CellId) -> Vec<(Self::CellId, EdgeId)>;

    /// The side facing back across `edge`; an involution
    fn opposite_edge(&self, edge: EdgeId) -> EdgeId;

    /// All cells in a stable order
    fn cell_ids(&self) -> Vec<Self::CellId>;

    /// Tiles still possible in a cell, in either phase
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is outside the grid.
    fn domain(&self, id: Self::CellId) -> Result<TileBitset>;

    /// Support table of a sealed cell
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed or `id` is outside it.
    fn support(&self, id: Self::CellId) -> Result<&CellSupport>;

    /// Mutable support table of a sealed cell
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed or `id` is outside it.
    fn support_mut(&mut self, id: Self::CellId) -> Result<&mut CellSupport>;

    /// Number of sides of every cell
    fn sides(&self) -> usize {
        self.tileset().sides()
    }

    /// Visit every cell in the order of [`Grid::cell_ids`]
    fn for_each<F: FnMut(Self::CellId)>(&self, mut f: F) {
        for id in self.cell_ids() {
            f(id);
        }
    }

    /// Tiles still possible in a cell, paired with their ids
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is outside the grid.
    fn domain_tiles(
        &self,
        id: Self::CellId,
    ) -> Result<Vec<(TileId, &Tile<Self::Image, Self::Edge>)>> {
        let tileset = self.tileset();
        self.domain(id)?
            .iter()
            .map(|tile| Ok((tile, tileset.tile(tile)?)))
            .collect()
    }

    /// Build the support table of one cell from the current domains
    ///
    /// For each tile in the cell and each neighbour, the support set is the
    /// part of the neighbour's domain whose opposing edge fits the tile.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is outside the grid.
    fn build_support_records(&self, id: Self::CellId) -> Result<CellSupport> {
        let tileset = self.tileset();
        let sides = tileset.sides();
        let neighbours = self
            .neighbours_of(id)
            .into_iter()
            .map(|(cell, edge)| Ok((edge, self.opposite_edge(edge), self.domain(cell)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut support = CellSupport::new(tileset.len());
        for tile_id in self.domain(id)?.iter() {
            let tile = tileset.tile(tile_id)?;
            let mut deps = TileDeps::new(tile_id, sides);
            for (edge, opposite, candidates) in &neighbours {
                let mut supporters = TileBitset::new(tileset.len());
                for other_id in candidates.iter() {
                    let fits = tileset
                        .get(other_id)
                        .is_some_and(|other| tile.matches(*edge, other, *opposite));
                    if fits {
                        supporters.insert(other_id);
                    }
                }
                deps.track(*edge, supporters);
            }
            support.insert(deps);
        }
        Ok(support)
    }

    /// Remove `tile` from a sealed cell and propagate the consequences
    ///
    /// Contradictions are reported in the returned [`Propagation`], never as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed, `id` is outside it, or
    /// `tile` is not in the tileset.
    fn eliminate(&mut self, id: Self::CellId, tile: TileId) -> Result<Propagation<Self::CellId>> {
        self.tileset().tile(tile)?;
        propagate_removal(self, id, tile)
    }
}
