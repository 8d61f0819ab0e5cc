//! Support records and deletion propagation
//!
//! Every (cell, tile) pair still possible owns a [`TileDeps`] record holding,
//! per side, the set of tiles in the neighbouring cell that fit against it.
//! Removing a tile from a cell withdraws it from the opposing support sets of
//! its neighbours. A record whose support set for some side runs dry cannot
//! stay, so its own removal is queued in turn. Work is proportional to the
//! supports actually withdrawn rather than to the grid size.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, WithContext};
use crate::spatial::edge::EdgeId;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileId;

/// Result of withdrawing one tile from one support set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Withdrawal {
    /// The record has no neighbour on that side
    Untracked,
    /// The tile was not in the support set
    Absent,
    /// The tile was removed and other supporters remain
    Withdrawn,
    /// The tile was the last supporter on that side
    Exhausted,
}

/// Support record of one tile candidate in one cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDeps {
    tile: TileId,
    edges: Vec<Option<TileBitset>>,
}

impl TileDeps {
    /// Record for `tile` with no sides tracked yet
    pub fn new(tile: TileId, sides: usize) -> Self {
        Self {
            tile,
            edges: vec![None; sides],
        }
    }

    /// Tile this record supports
    pub const fn tile(&self) -> TileId {
        self.tile
    }

    /// Set the support set for the neighbour across `edge`
    pub fn track(&mut self, edge: EdgeId, supporters: TileBitset) {
        if let Some(slot) = self.edges.get_mut(edge) {
            *slot = Some(supporters);
        }
    }

    /// Support set across `edge`, if there is a neighbour on that side
    pub fn supporters(&self, edge: EdgeId) -> Option<&TileBitset> {
        self.edges.get(edge).and_then(Option::as_ref)
    }

    /// Sides with a neighbour, paired with their support sets
    pub fn tracked(&self) -> impl Iterator<Item = (EdgeId, &TileBitset)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(edge, set)| set.as_ref().map(|s| (edge, s)))
    }

    /// Whether some tracked side has no supporter left
    pub fn is_unsupported(&self) -> bool {
        self.tracked().any(|(_, set)| set.is_empty())
    }

    /// Remove `tile` from the support set across `edge`
    pub fn withdraw(&mut self, edge: EdgeId, tile: TileId) -> Withdrawal {
        let Some(set) = self.edges.get_mut(edge).and_then(Option::as_mut) else {
            return Withdrawal::Untracked;
        };
        match (set.remove(tile), set.is_empty()) {
            (false, _) => Withdrawal::Absent,
            (true, true) => Withdrawal::Exhausted,
            (true, false) => Withdrawal::Withdrawn,
        }
    }
}

/// Flat table of the support records of one cell, indexed by tile id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSupport {
    records: Vec<Option<TileDeps>>,
    live: usize,
}

impl CellSupport {
    /// Empty table for a tileset of `max_tiles` tiles
    pub fn new(max_tiles: usize) -> Self {
        Self {
            records: vec![None; max_tiles],
            live: 0,
        }
    }

    /// Store a record, replacing any previous record for the same tile
    pub fn insert(&mut self, deps: TileDeps) {
        if let Some(slot) = self.records.get_mut(deps.tile()) {
            if slot.is_none() {
                self.live += 1;
            }
            *slot = Some(deps);
        }
    }

    /// Take the record for `tile` out of the table
    pub fn remove(&mut self, tile: TileId) -> Option<TileDeps> {
        let removed = self.records.get_mut(tile).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Record for `tile`, if it is still possible here
    pub fn get(&self, tile: TileId) -> Option<&TileDeps> {
        self.records.get(tile).and_then(Option::as_ref)
    }

    /// Whether `tile` is still possible here
    pub fn contains(&self, tile: TileId) -> bool {
        self.get(tile).is_some()
    }

    /// Number of tiles still possible
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Whether the cell is contradicted
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Remaining records in tile order
    pub fn records(&self) -> impl Iterator<Item = &TileDeps> + '_ {
        self.records.iter().flatten()
    }

    /// The domain implied by the remaining records
    pub fn domain(&self) -> TileBitset {
        let mut domain = TileBitset::new(self.records.len());
        for deps in self.records() {
            domain.insert(deps.tile());
        }
        domain
    }

    /// Withdraw `tile` across `edge` from every record, dropping the records
    /// left without support
    ///
    /// Returns the tiles whose records were dropped.
    pub fn withdraw(&mut self, edge: EdgeId, tile: TileId) -> Vec<TileId> {
        let mut exhausted = Vec::new();
        for slot in &mut self.records {
            let lost = slot
                .as_mut()
                .is_some_and(|deps| deps.withdraw(edge, tile) == Withdrawal::Exhausted);
            if let Some(deps) = slot.take_if(|_| lost) {
                exhausted.push(deps.tile());
            }
        }
        self.live -= exhausted.len();
        exhausted
    }
}

/// What one propagation pass changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Propagation<C> {
    /// Every (cell, tile) removed, in removal order
    pub removals: Vec<(C, TileId)>,
    /// First cell this pass emptied; propagation stopped there
    pub contradiction: Option<C>,
}

impl<C> Default for Propagation<C> {
    fn default() -> Self {
        Self {
            removals: Vec::new(),
            contradiction: None,
        }
    }
}

impl<C> Propagation<C> {
    /// Number of tiles removed
    pub fn removed(&self) -> usize {
        self.removals.len()
    }

    /// Whether the pass ended in a contradiction
    pub const fn is_contradiction(&self) -> bool {
        self.contradiction.is_some()
    }
}

/// Remove `tile` from `cell` and propagate the loss of support
///
/// Removing a tile that is no longer in the domain changes nothing.
///
/// # Errors
///
/// Returns an error if the grid is not sealed or `cell` is outside it.
pub fn propagate_removal<G>(grid: &mut G, cell: G::CellId, tile: TileId) -> Result<Propagation<G::CellId>>
where
    G: Grid + ?Sized,
{
    let mut outcome = Propagation::default();
    let support = grid.support_mut(cell).with_operation("propagate removal")?;
    if support.remove(tile).is_none() {
        return Ok(outcome);
    }
    outcome.removals.push((cell, tile));
    if support.is_empty() {
        log::debug!("contradiction at {cell:?} after direct removal");
        outcome.contradiction = Some(cell);
        return Ok(outcome);
    }
    drain(grid, vec![(cell, tile)], &mut outcome)?;
    Ok(outcome)
}

/// Drop every record that already lacks support on some side, then propagate
///
/// Used once after sealing so the support invariant holds before the first
/// elimination.
///
/// # Errors
///
/// Returns an error if the grid is not sealed.
pub fn prune_unsupported<G>(grid: &mut G) -> Result<Propagation<G::CellId>>
where
    G: Grid + ?Sized,
{
    let mut outcome = Propagation::default();
    let mut stack = Vec::new();
    for cell in grid.cell_ids() {
        let support = grid.support_mut(cell).with_operation("prune unsupported tiles")?;
        let doomed: Vec<TileId> = support
            .records()
            .filter(|deps| deps.is_unsupported())
            .map(TileDeps::tile)
            .collect();
        let pruned = !doomed.is_empty();
        for tile in doomed {
            if support.remove(tile).is_some() {
                outcome.removals.push((cell, tile));
                stack.push((cell, tile));
            }
        }
        // Cells restricted to nothing before sealing were empty already
        if pruned && support.is_empty() {
            log::debug!("contradiction at {cell:?} while pruning unsupported tiles");
            outcome.contradiction = Some(cell);
            return Ok(outcome);
        }
    }
    drain(grid, stack, &mut outcome)?;
    Ok(outcome)
}

// Explicit stack: propagation depth is unbounded on large grids
fn drain<G>(
    grid: &mut G,
    mut stack: Vec<(G::CellId, TileId)>,
    outcome: &mut Propagation<G::CellId>,
) -> Result<()>
where
    G: Grid + ?Sized,
{
    while let Some((current, removed)) = stack.pop() {
        for (neighbour, edge) in grid.neighbours_of(current) {
            let opposite = grid.opposite_edge(edge);
            let support = grid
                .support_mut(neighbour)
                .with_operation("propagate removal")?;
            let exhausted = support.withdraw(opposite, removed);
            // Only a cell this withdrawal emptied ends the pass
            let emptied = !exhausted.is_empty() && support.is_empty();
            for lost in exhausted {
                outcome.removals.push((neighbour, lost));
                stack.push((neighbour, lost));
            }
            if emptied {
                log::debug!("contradiction at {neighbour:?}");
                outcome.contradiction = Some(neighbour);
                return Ok(());
            }
        }
    }
    Ok(())
}
