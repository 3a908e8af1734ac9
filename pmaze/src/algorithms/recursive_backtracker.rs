use rand::RngCore;

use super::{GenerationError, MazeAlgorithm};
use crate::{dims::Dims, direction::Direction, grid::GridState, shuffle::shuffle};

/// Randomized depth-first carving, written as plain recursion.
///
/// Call depth grows with the longest carved corridor, which can reach the
/// cell count, so prefer [`DepthFirstSearch`](super::DepthFirstSearch) for
/// large grids. Both produce the same maze from the same random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveBacktracker;

impl MazeAlgorithm for RecursiveBacktracker {
    fn carve(
        &self,
        grid: &mut GridState,
        start: Dims,
        rng: &mut dyn RngCore,
    ) -> Result<(), GenerationError> {
        if !grid.is_in_bounds(start) {
            return Err(GenerationError::StartOutOfBounds(start));
        }

        visit(grid, start, rng);
        Ok(())
    }
}

fn visit(grid: &mut GridState, cell: Dims, rng: &mut dyn RngCore) {
    if !grid.mark_visited(cell) {
        return;
    }

    let mut candidates = Direction::get_in_order();
    shuffle(&mut candidates, rng);

    for dir in candidates {
        let next = cell + dir.to_coord();
        if !grid.is_in_bounds(next) || grid.is_visited(next) {
            continue;
        }

        grid.open_wall(cell, dir);
        visit(grid, next, rng);
    }

    log::trace!("backtracking from {:?}", cell);
}
