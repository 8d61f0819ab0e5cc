use crate::{
    algorithm::bitset::TileBitset,
    algorithm::executor::RandomSelector,
    io::error::Result,
    math::probability::elimination_weight,
    spatial::edge::Edge,
    spatial::grid::Grid,
    spatial::tiles::{TileId, Tileset},
};

/// A single elimination decided by the selection policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elimination<C> {
    /// Cell to remove a tile from
    pub cell: C,
    /// Tile to remove
    pub tile: TileId,
}

/// Cells tied for the smallest domain size above one
///
/// "Entropy" here is the raw number of remaining candidates, not a weighted
/// information measure. Collapsed and contradicted cells are skipped. An
/// empty result means generation can make no further progress.
///
/// # Errors
///
/// Returns an error if a domain cannot be read.
pub fn min_entropy_cells<G: Grid + ?Sized>(grid: &G) -> Result<Vec<G::CellId>> {
    let mut min_entropy = usize::MAX;
    let mut candidates = Vec::new();
    for id in grid.cell_ids() {
        let size = grid.domain(id)?.count();
        if size <= 1 || size > min_entropy {
            continue;
        }
        if size < min_entropy {
            min_entropy = size;
            candidates.clear();
        }
        candidates.push(id);
    }
    Ok(candidates)
}

/// Elimination weights of the tiles in a domain, in domain order
pub fn elimination_weights<I, E>(tileset: &Tileset<I, E>, domain: &TileBitset) -> Vec<(TileId, f64)>
where
    E: Edge,
{
    domain
        .iter()
        .filter_map(|id| tileset.get(id).map(|t| (id, elimination_weight(t.weight()))))
        .collect()
}

/// Choose the tile to eliminate from a domain
///
/// Draws `r` in `[0, Σ 1/weight)` and walks the domain in order until the
/// running sum of `1/weight` reaches `r`.
pub fn choose_tile<I, E>(
    tileset: &Tileset<I, E>,
    domain: &TileBitset,
    selector: &mut RandomSelector,
) -> Option<TileId>
where
    E: Edge,
{
    let weighted = elimination_weights(tileset, domain);
    let weights: Vec<f64> = weighted.iter().map(|&(_, w)| w).collect();
    let index = selector.weighted_choice(&weights)?;
    weighted.get(index).map(|&(id, _)| id)
}

/// Pick one elimination: a uniformly chosen minimum-entropy cell and an
/// inverse-weighted tile within it
///
/// Returns `None` when no cell has more than one candidate.
///
/// # Errors
///
/// Returns an error if a domain cannot be read.
pub fn choose_elimination<G: Grid + ?Sized>(
    grid: &G,
    selector: &mut RandomSelector,
) -> Result<Option<Elimination<G::CellId>>> {
    let candidates = min_entropy_cells(grid)?;
    let Some(&cell) = selector.choose(&candidates) else {
        return Ok(None);
    };
    let domain = grid.domain(cell)?;
    Ok(choose_tile(grid.tileset(), &domain, selector).map(|tile| Elimination { cell, tile }))
}

/// Overall state of a grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSurvey {
    /// Cells with exactly one tile
    pub collapsed: usize,
    /// Cells with more than one tile
    pub undecided: usize,
    /// Cells with no tile
    pub contradicted: usize,
    /// Eliminations still needed to collapse every non-empty cell
    pub remaining: usize,
}

impl GridSurvey {
    /// Whether every cell holds exactly one tile
    pub const fn is_solved(&self) -> bool {
        self.undecided == 0 && self.contradicted == 0
    }

    /// Whether no cell has more than one candidate left
    pub const fn is_finished(&self) -> bool {
        self.undecided == 0
    }
}

/// Count collapsed, undecided and contradicted cells
///
/// # Errors
///
/// Returns an error if a domain cannot be read.
pub fn survey<G: Grid + ?Sized>(grid: &G) -> Result<GridSurvey> {
    let mut survey = GridSurvey::default();
    for id in grid.cell_ids() {
        match grid.domain(id)?.count() {
            0 => survey.contradicted += 1,
            1 => survey.collapsed += 1,
            n => {
                survey.undecided += 1;
                survey.remaining += n - 1;
            }
        }
    }
    Ok(survey)
}
