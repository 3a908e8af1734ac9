mod depth_first_search;
mod recursive_backtracker;

use std::{fmt, sync::Arc};

use rand::{thread_rng, Rng as _, RngCore, SeedableRng as _};
use thiserror::Error;

use crate::{
    dims::Dims,
    grid::{self, GridState},
    maze::Maze,
};
pub use depth_first_search::DepthFirstSearch;
pub use recursive_backtracker::RecursiveBacktracker;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size {0:?}, rows and columns must both be at least 1")]
    InvalidDimensions(Dims),
    #[error("start cell {0:?} is outside the grid")]
    StartOutOfBounds(Dims),
    #[error("maze size {0:?} is over the limit of {max} cells", max = grid::MAX_CELLS)]
    TooLarge(Dims),
}

/// Carves a perfect maze into a fresh [`GridState`].
///
/// Implementations must visit every cell reachable from `start` and open
/// exactly one wall per newly visited cell, so that the result is a spanning
/// tree of the grid.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn carve(
        &self,
        grid: &mut GridState,
        start: Dims,
        rng: &mut dyn RngCore,
    ) -> Result<(), GenerationError>;
}

/// Front door of the crate: validated size, optional seed and start cell,
/// and the algorithm to carve with.
#[derive(Debug, Clone)]
pub struct Generator {
    size: Dims,
    seed: Option<u64>,
    start: Option<Dims>,
    algorithm: Arc<dyn MazeAlgorithm>,
}

impl Generator {
    /// `size` is `Dims(rows, columns)`.
    pub fn new(size: Dims) -> Result<Self, GenerationError> {
        grid::check_size(size)?;

        Ok(Self {
            size,
            seed: None,
            start: None,
            algorithm: Arc::new(DepthFirstSearch),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fixes the start cell instead of drawing it from the random source.
    pub fn with_start(mut self, start: Dims) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl MazeAlgorithm + 'static) -> Self {
        self.algorithm = Arc::new(algorithm);
        self
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn algorithm(&self) -> &dyn MazeAlgorithm {
        self.algorithm.as_ref()
    }

    /// Generates with the crate's [`Random`], seeded from the configured seed
    /// or a fresh one. The seed used ends up in [`Maze::seed`].
    pub fn generate(&self) -> Result<Maze, GenerationError> {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);
        self.run(&mut rng, Some(seed))
    }

    /// Generates using a caller supplied random source.
    pub fn generate_with(&self, rng: &mut dyn RngCore) -> Result<Maze, GenerationError> {
        self.run(rng, None)
    }

    fn run(&self, rng: &mut dyn RngCore, seed: Option<u64>) -> Result<Maze, GenerationError> {
        if let Some(start) = self.start {
            if !start.is_inside(self.size) {
                return Err(GenerationError::StartOutOfBounds(start));
            }
        }

        let mut grid = GridState::new(self.size)?;

        let start = match self.start {
            Some(start) => start,
            None => Dims(rng.gen_range(0..self.size.0), rng.gen_range(0..self.size.1)),
        };

        log::debug!(
            "carving {}x{} maze from {:?} with {:?}, seed {:?}",
            self.size.0,
            self.size.1,
            start,
            self.algorithm,
            seed
        );

        self.algorithm.carve(&mut grid, start, rng)?;
        debug_assert!(grid.is_complete());
        debug_assert_eq!(grid.carve_order().len() + 1, grid.cell_count());

        Ok(grid.into_maze(start, seed))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn rejects_bad_sizes_up_front() {
        for size in [Dims(0, 1), Dims(1, 0), Dims(-3, -3)] {
            assert_eq!(
                Generator::new(size).unwrap_err(),
                GenerationError::InvalidDimensions(size)
            );
        }
    }

    #[test]
    fn rejects_huge_sizes_before_allocating() {
        assert_eq!(
            Generator::new(Dims(i32::MAX, i32::MAX)).unwrap_err(),
            GenerationError::TooLarge(Dims(i32::MAX, i32::MAX))
        );
    }

    #[test]
    fn rejects_start_outside() {
        let generator = Generator::new(Dims(3, 3)).unwrap().with_start(Dims(3, 0));
        assert_eq!(
            generator.generate().unwrap_err(),
            GenerationError::StartOutOfBounds(Dims(3, 0))
        );
    }

    #[test]
    fn records_the_seed() {
        let maze = Generator::new(Dims(4, 4)).unwrap().with_seed(42).generate().unwrap();
        assert_eq!(maze.seed(), Some(42));

        let random = Generator::new(Dims(4, 4)).unwrap().generate().unwrap();
        assert!(random.seed().is_some());
    }

    #[test]
    fn replaying_a_recorded_seed() {
        let generator = Generator::new(Dims(12, 9)).unwrap();
        let first = generator.generate().unwrap();
        let again = generator
            .clone()
            .with_seed(first.seed().unwrap())
            .generate()
            .unwrap();

        assert_eq!(first, again);
    }

    #[test]
    fn start_drawn_from_source() {
        // A constant-zero source always draws the low end of a range.
        let maze = Generator::new(Dims(5, 5))
            .unwrap()
            .generate_with(&mut StepRng::new(0, 0))
            .unwrap();

        assert_eq!(maze.start(), Dims(0, 0));
        assert_eq!(maze.seed(), None);
    }

    #[test]
    fn single_cell() {
        let maze = Generator::new(Dims(1, 1)).unwrap().with_seed(1).generate().unwrap();
        assert_eq!(maze.start(), Dims(0, 0));
        assert_eq!(maze.open_passage_count(), 0);
        assert!(maze.verticals().is_empty());
        assert!(maze.horizontals().is_empty());
    }
}
