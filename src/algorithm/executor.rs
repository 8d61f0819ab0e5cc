use crate::{
    algorithm::propagation::Propagation,
    algorithm::selection::{Elimination, GridSurvey, choose_elimination, survey},
    io::error::Result,
    math::probability::cumulative_pick,
    spatial::grid::Grid,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice among `items`; `None` when empty
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len()))
    }

    /// Generic weighted random selection
    ///
    /// Draws `r` uniformly in `[0, Σ weights)` and returns the first index
    /// whose cumulative weight reaches `r`. `None` if the weights sum to zero.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        let draw = self.rng.random::<f64>() * total;
        cumulative_pick(weights, draw)
    }
}

/// How a finished run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Every cell holds exactly one tile
    Solved,
    /// No cell can progress and some cells are empty
    Contradicted {
        /// Number of empty cells
        cells: usize,
    },
}

impl Completion {
    fn from_survey(survey: &GridSurvey) -> Self {
        if survey.contradicted == 0 {
            Self::Solved
        } else {
            Self::Contradicted {
                cells: survey.contradicted,
            }
        }
    }
}

/// Result of a single generation step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome<C> {
    /// One tile was eliminated and its consequences propagated
    Eliminated {
        /// The chosen cell and tile
        elimination: Elimination<C>,
        /// Everything the elimination removed
        propagation: Propagation<C>,
    },
    /// No cell has more than one candidate left
    Finished(Completion),
}

/// Summary of a multi-step run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Eliminations performed during the run
    pub steps: usize,
    /// How the run ended, or `None` if the step budget ran out first
    pub completion: Option<Completion>,
    /// Grid state at the end of the run
    pub survey: GridSurvey,
}

/// Generation driver: repeated minimum-entropy, inverse-weight elimination
///
/// Each step removes exactly one tile from one cell; cells collapse gradually
/// as their own eliminations and their neighbours' propagation prune them.
#[derive(Debug)]
pub struct Generator<G: Grid> {
    grid: G,
    random_selector: RandomSelector,
    iteration: usize,
}

impl<G: Grid> Generator<G> {
    /// Drive a sealed grid with a seeded selector
    pub fn new(grid: G, seed: u64) -> Self {
        Self {
            grid,
            random_selector: RandomSelector::new(seed),
            iteration: 0,
        }
    }

    /// The grid being generated
    pub const fn grid(&self) -> &G {
        &self.grid
    }

    /// Give the grid back
    pub fn into_grid(self) -> G {
        self.grid
    }

    /// Eliminations performed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current collapsed / undecided / contradicted counts
    ///
    /// # Errors
    ///
    /// Returns an error if a domain cannot be read.
    pub fn status(&self) -> Result<GridSurvey> {
        survey(&self.grid)
    }

    /// Perform one elimination, or report that generation is finished
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed.
    pub fn step(&mut self) -> Result<StepOutcome<G::CellId>> {
        let Some(elimination) = choose_elimination(&self.grid, &mut self.random_selector)? else {
            let completion = Completion::from_survey(&self.status()?);
            log::info!(
                "generation finished after {} steps: {completion:?}",
                self.iteration
            );
            return Ok(StepOutcome::Finished(completion));
        };
        let propagation = self.grid.eliminate(elimination.cell, elimination.tile)?;
        self.iteration += 1;
        Ok(StepOutcome::Eliminated {
            elimination,
            propagation,
        })
    }

    /// Step until finished or `max_steps` eliminations have been made
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed.
    pub fn run(&mut self, max_steps: Option<usize>) -> Result<RunSummary> {
        self.run_with(max_steps, |_, _| {})
    }

    /// Like [`Generator::run`], calling `observe` after every step
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not sealed.
    pub fn run_with<F>(&mut self, max_steps: Option<usize>, mut observe: F) -> Result<RunSummary>
    where
        F: FnMut(&G, &StepOutcome<G::CellId>),
    {
        let start = self.iteration;
        let mut completion = None;
        while max_steps.is_none_or(|limit| self.iteration - start < limit) {
            let outcome = self.step()?;
            observe(&self.grid, &outcome);
            if let StepOutcome::Finished(done) = outcome {
                completion = Some(done);
                break;
            }
        }
        Ok(RunSummary {
            steps: self.iteration - start,
            completion,
            survey: self.status()?,
        })
    }
}
