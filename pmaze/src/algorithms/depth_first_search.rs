use rand::RngCore;

use super::{GenerationError, MazeAlgorithm};
use crate::{dims::Dims, direction::Direction, grid::GridState, shuffle::shuffle};

/// Randomized depth-first carving over an explicit, heap allocated stack.
///
/// Each frame keeps its shuffled candidates and how many of them were tried,
/// so the random source is consumed in exactly the order the recursive
/// version consumes it. Memory is bounded by the cell count rather than by
/// the thread's stack size.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

#[derive(Debug)]
struct Frame {
    cell: Dims,
    candidates: [Direction; 4],
    next: usize,
}

impl Frame {
    /// Marks `cell` visited and shuffles its candidates, `None` if it was
    /// already visited.
    fn enter(grid: &mut GridState, cell: Dims, rng: &mut dyn RngCore) -> Option<Frame> {
        if !grid.mark_visited(cell) {
            return None;
        }

        let mut candidates = Direction::get_in_order();
        shuffle(&mut candidates, rng);

        Some(Frame {
            cell,
            candidates,
            next: 0,
        })
    }
}

impl MazeAlgorithm for DepthFirstSearch {
    fn carve(
        &self,
        grid: &mut GridState,
        start: Dims,
        rng: &mut dyn RngCore,
    ) -> Result<(), GenerationError> {
        if !grid.is_in_bounds(start) {
            return Err(GenerationError::StartOutOfBounds(start));
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(grid.cell_count());
        stack.extend(Frame::enter(grid, start, rng));

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.candidates.len() {
                log::trace!("backtracking from {:?}", frame.cell);
                stack.pop();
                continue;
            }

            let (cell, dir) = (frame.cell, frame.candidates[frame.next]);
            frame.next += 1;

            let next = cell + dir.to_coord();
            if !grid.is_in_bounds(next) || grid.is_visited(next) {
                continue;
            }

            grid.open_wall(cell, dir);
            stack.extend(Frame::enter(grid, next, rng));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::algorithms::{Random, RecursiveBacktracker};

    fn carve_with(algorithm: &dyn MazeAlgorithm, size: Dims, start: Dims, seed: u64) -> GridState {
        let mut grid = GridState::new(size).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        algorithm.carve(&mut grid, start, &mut rng).unwrap();
        grid
    }

    #[test]
    fn matches_recursion_step_for_step() {
        for seed in 0..20 {
            let size = Dims(7 + seed as i32 % 5, 11 - seed as i32 % 4);
            let start = Dims(seed as i32 % size.0, seed as i32 % size.1);

            let iterative = carve_with(&DepthFirstSearch, size, start, seed);
            let recursive = carve_with(&RecursiveBacktracker, size, start, seed);

            assert_eq!(iterative.carve_order(), recursive.carve_order());
            assert_eq!(iterative.verticals(), recursive.verticals());
            assert_eq!(iterative.horizontals(), recursive.horizontals());
        }
    }

    #[test]
    fn visits_every_cell() {
        let grid = carve_with(&DepthFirstSearch, Dims(13, 8), Dims(6, 3), 7);
        assert!(grid.is_complete());
        assert_eq!(grid.carve_order().len(), 13 * 8 - 1);
    }

    #[test]
    fn rejects_start_outside() {
        let mut grid = GridState::new(Dims(2, 2)).unwrap();
        let mut rng = Random::seed_from_u64(0);
        assert_eq!(
            DepthFirstSearch.carve(&mut grid, Dims(0, -1), &mut rng),
            Err(GenerationError::StartOutOfBounds(Dims(0, -1)))
        );
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn survives_grids_deeper_than_the_call_stack() {
        // A single corridor makes the carving path as long as the grid.
        let grid = carve_with(&DepthFirstSearch, Dims(1, 200_000), Dims(0, 0), 1);
        assert!(grid.is_complete());
        assert!(grid.verticals().iter().all(|&open| open));
    }
}
