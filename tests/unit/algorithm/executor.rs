//! Tests for the generation driver and seeded random selection

#[cfg(test)]
mod tests {
    use wavetile::algorithm::executor::{Completion, Generator, RandomSelector, StepOutcome};
    use wavetile::spatial::edge::ReflexiveStringEdge;
    use wavetile::spatial::grid::Grid;
    use wavetile::spatial::square::{SquareGrid, SquareId};
    use wavetile::spatial::tiles::{Tile, Tileset};

    fn grid_of(patterns: &[&str], width: usize, height: usize) -> SquareGrid<(), ReflexiveStringEdge> {
        let tiles = patterns
            .iter()
            .map(|&p| Tile::new(p, (), ReflexiveStringEdge::from_patterns(&[p; 4]), 1.0).unwrap())
            .collect();
        let mut grid = SquareGrid::from_tiles(width, height, Tileset::new(tiles).unwrap()).unwrap();
        grid.construct_deps().unwrap();
        grid
    }

    fn domains(grid: &SquareGrid<(), ReflexiveStringEdge>) -> Vec<(SquareId, Vec<usize>)> {
        grid.cell_ids()
            .into_iter()
            .map(|id| (id, grid.domain(id).unwrap().to_vec()))
            .collect()
    }

    // Tests identical seeds produce identical choices
    // Verified by seeding from entropy instead of the given seed
    #[test]
    fn test_random_selector_is_deterministic() {
        let items: Vec<usize> = (0..100).collect();
        let mut a = RandomSelector::new(9);
        let mut b = RandomSelector::new(9);

        for _ in 0..20 {
            assert_eq!(a.choose(&items), b.choose(&items));
            assert_eq!(
                a.weighted_choice(&[1.0, 2.0, 3.0]),
                b.weighted_choice(&[1.0, 2.0, 3.0])
            );
        }
    }

    // Tests degenerate inputs yield no choice
    #[test]
    fn test_random_selector_empty_inputs() {
        let mut selector = RandomSelector::new(1);
        let empty: [u8; 0] = [];
        assert!(selector.choose(&empty).is_none());
        assert!(selector.weighted_choice(&[]).is_none());
        assert!(selector.weighted_choice(&[0.0, 0.0]).is_none());
        assert_eq!(selector.weighted_choice(&[0.0, 1.0]), Some(1));
    }

    // Tests a grid with a single tile is finished before any step
    #[test]
    fn test_step_on_collapsed_grid() {
        let mut generator = Generator::new(grid_of(&["a"], 3, 3), 0);

        assert_eq!(
            generator.step().unwrap(),
            StepOutcome::Finished(Completion::Solved)
        );
        assert_eq!(generator.iteration(), 0);
    }

    // Tests each step removes the chosen tile from the chosen cell
    // Verified by eliminating a tile other than the chosen one
    #[test]
    fn test_step_eliminates_chosen_tile() {
        let mut generator = Generator::new(grid_of(&["a", "b", "c"], 2, 2), 5);

        let StepOutcome::Eliminated {
            elimination,
            propagation,
        } = generator.step().unwrap()
        else {
            unreachable!("undecided grid must step")
        };
        assert_eq!(propagation.removals.first(), Some(&(elimination.cell, elimination.tile)));
        assert!(
            !generator
                .grid()
                .domain(elimination.cell)
                .unwrap()
                .contains(elimination.tile)
        );
        assert_eq!(generator.iteration(), 1);
    }

    // Tests a run ends solved for self-compatible tiles
    #[test]
    fn test_run_solves_compatible_tiles() {
        let mut generator = Generator::new(grid_of(&["a", "b"], 5, 4), 11);

        let summary = generator.run(None).unwrap();

        assert_eq!(summary.completion, Some(Completion::Solved));
        assert!(summary.survey.is_solved());
        assert_eq!(summary.survey.collapsed, 20);
        // Self-compatible but mutually exclusive tiles spread from the first cut
        let first = generator.grid().domain([0, 0]).unwrap().to_vec();
        assert!(domains(generator.grid()).iter().all(|(_, d)| *d == first));
    }

    // Tests the step budget stops a run early
    // Verified by checking the budget after stepping instead of before
    #[test]
    fn test_run_respects_max_steps() {
        let mut generator = Generator::new(grid_of(&["a", "b", "c"], 3, 3), 0);

        let summary = generator.run(Some(0)).unwrap();
        assert_eq!(summary.steps, 0);
        assert_eq!(summary.completion, None);
        assert_eq!(summary.survey.undecided, 9);

        let resumed = generator.run(Some(1)).unwrap();
        assert_eq!(resumed.steps, 1);
        assert_eq!(generator.iteration(), 1);
    }

    // Tests identical seeds replay identical runs
    // Verified by reseeding the selector on every step
    #[test]
    fn test_run_is_reproducible() {
        let mut first = Generator::new(grid_of(&["a", "b", "c"], 4, 4), 21);
        let mut second = Generator::new(grid_of(&["a", "b", "c"], 4, 4), 21);

        let mut trace = Vec::new();
        first
            .run_with(None, |_, outcome| trace.push(outcome.clone()))
            .unwrap();
        let mut replay = Vec::new();
        second
            .run_with(None, |_, outcome| replay.push(outcome.clone()))
            .unwrap();

        assert_eq!(trace, replay);
        assert_eq!(domains(first.grid()), domains(second.grid()));
    }
}
