//! Tests for minimum-entropy cell selection and inverse-weight tile choice

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::executor::RandomSelector;
    use wavetile::algorithm::selection::{
        GridSurvey, choose_elimination, choose_tile, elimination_weights, min_entropy_cells, survey,
    };
    use wavetile::spatial::edge::ReflexiveStringEdge;
    use wavetile::spatial::grid::Grid;
    use wavetile::spatial::square::SquareGrid;
    use wavetile::spatial::tiles::{Tile, Tileset};

    fn tileset(weights: &[f64]) -> Tileset<(), ReflexiveStringEdge> {
        let tiles = weights
            .iter()
            .map(|&w| Tile::new("t", (), ReflexiveStringEdge::from_patterns(&["a"; 4]), w).unwrap())
            .collect();
        Tileset::new(tiles).unwrap()
    }

    // Tests only the smallest undecided domains are candidates
    // Verified by including cells with a single tile
    #[test]
    fn test_min_entropy_cells_skips_collapsed() {
        let mut grid = SquareGrid::from_tiles(3, 1, tileset(&[1.0, 1.0, 1.0])).unwrap();
        grid.set_cell([0, 0], &[0]).unwrap();
        grid.set_cell([0, 1], &[0, 1]).unwrap();

        assert_eq!(min_entropy_cells(&grid).unwrap(), vec![[0, 1]]);
    }

    // Tests ties are all returned in cell order
    #[test]
    fn test_min_entropy_cells_ties() {
        let grid = SquareGrid::from_tiles(2, 2, tileset(&[1.0, 1.0])).unwrap();
        assert_eq!(
            min_entropy_cells(&grid).unwrap(),
            vec![[0, 0], [0, 1], [1, 0], [1, 1]]
        );
    }

    // Tests a finished grid yields no candidates
    #[test]
    fn test_min_entropy_cells_empty_when_finished() {
        let mut grid = SquareGrid::from_tiles(2, 1, tileset(&[1.0, 1.0])).unwrap();
        grid.set_cell([0, 0], &[1]).unwrap();
        grid.set_cell([0, 1], &[]).unwrap();
        assert!(min_entropy_cells(&grid).unwrap().is_empty());
    }

    // Tests elimination weights are reciprocals in domain order
    #[test]
    fn test_elimination_weights() {
        let tiles = tileset(&[1.0, 4.0, 0.5]);
        let domain = TileBitset::from_indices(&[0, 1, 2], 3);

        let weights = elimination_weights(&tiles, &domain);
        assert_eq!(weights, vec![(0, 1.0), (1, 0.25), (2, 2.0)]);
    }

    // Tests a single-tile domain always yields that tile
    #[test]
    fn test_choose_tile_single_candidate() {
        let tiles = tileset(&[1.0, 1.0, 1.0]);
        let domain = TileBitset::from_indices(&[2], 3);
        let mut selector = RandomSelector::new(7);

        for _ in 0..10 {
            assert_eq!(choose_tile(&tiles, &domain, &mut selector), Some(2));
        }
        assert_eq!(
            choose_tile(&tiles, &TileBitset::new(3), &mut selector),
            None
        );
    }

    // Tests rare tiles are eliminated more often than common ones
    // Verified by using weight instead of its reciprocal
    #[test]
    fn test_choose_tile_favours_low_weight() {
        let tiles = tileset(&[1.0, 10.0]);
        let domain = TileBitset::all(2);
        let mut selector = RandomSelector::new(42);

        let mut counts = [0usize; 2];
        for _ in 0..2000 {
            if let Some(tile) = choose_tile(&tiles, &domain, &mut selector) {
                counts[tile] += 1;
            }
        }
        assert!(counts[0] > counts[1] * 5, "counts {counts:?}");
    }

    // Tests the chosen elimination targets a minimum-entropy cell
    #[test]
    fn test_choose_elimination() {
        let mut grid = SquareGrid::from_tiles(2, 1, tileset(&[1.0, 1.0, 1.0])).unwrap();
        grid.set_cell([0, 1], &[0, 2]).unwrap();
        grid.construct_deps().unwrap();
        let mut selector = RandomSelector::new(3);

        let choice = choose_elimination(&grid, &mut selector).unwrap().unwrap();
        assert_eq!(choice.cell, [0, 1]);
        assert!(grid.domain([0, 1]).unwrap().contains(choice.tile));
    }

    // Tests survey counts each kind of cell
    #[test]
    fn test_survey_counts() {
        let mut grid = SquareGrid::from_tiles(3, 1, tileset(&[1.0, 1.0, 1.0])).unwrap();
        grid.set_cell([0, 0], &[1]).unwrap();
        grid.set_cell([0, 1], &[]).unwrap();

        let state = survey(&grid).unwrap();
        assert_eq!(
            state,
            GridSurvey {
                collapsed: 1,
                undecided: 1,
                contradicted: 1,
                remaining: 2,
            }
        );
        assert!(!state.is_solved());
        assert!(!state.is_finished());
    }
}
