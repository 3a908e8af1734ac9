use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    array::Array2D,
    board::{Board, BoardError, GoalPlacement},
    dims::Dims,
    direction::{Direction, Passage, WallAxis},
};

/// A finished perfect maze.
///
/// `verticals` is `rows × (columns - 1)`, entry `(r, c)` is `true` when the
/// wall between `(r, c)` and `(r, c + 1)` is open. `horizontals` is
/// `(rows - 1) × columns`, entry `(r, c)` is `true` when the wall between
/// `(r, c)` and `(r + 1, c)` is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMaze")]
pub struct Maze {
    size: Dims,
    verticals: Array2D<bool>,
    horizontals: Array2D<bool>,
    start: Dims,
    seed: Option<u64>,
    carve_order: Vec<Passage>,
}

/// Reasons a deserialized maze is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size {0:?} must have positive sides")]
    InvalidDimensions(Dims),
    #[error("{axis:?} walls are {found:?}, a {size:?} maze needs {expected:?}")]
    WallShape {
        axis: WallAxis,
        size: Dims,
        expected: Dims,
        found: Dims,
    },
    #[error("start cell {0:?} is outside the grid")]
    StartOutOfBounds(Dims),
    #[error("carved passage {0:?} is not open in the wall matrices")]
    StrayPassage(Passage),
}

#[derive(Deserialize)]
#[serde(rename = "Maze")]
struct RawMaze {
    size: Dims,
    verticals: Array2D<bool>,
    horizontals: Array2D<bool>,
    start: Dims,
    seed: Option<u64>,
    carve_order: Vec<Passage>,
}

impl TryFrom<RawMaze> for Maze {
    type Error = MazeError;

    fn try_from(raw: RawMaze) -> Result<Self, Self::Error> {
        let size = raw.size;
        if !size.all_positive() {
            return Err(MazeError::InvalidDimensions(size));
        }

        let shapes = [
            (WallAxis::Vertical, raw.verticals.size(), Dims(size.0, size.1 - 1)),
            (WallAxis::Horizontal, raw.horizontals.size(), Dims(size.0 - 1, size.1)),
        ];
        for (axis, found, expected) in shapes {
            if found != expected {
                return Err(MazeError::WallShape {
                    axis,
                    size,
                    expected,
                    found,
                });
            }
        }

        if !raw.start.is_inside(size) {
            return Err(MazeError::StartOutOfBounds(raw.start));
        }

        let maze = Maze::from_parts(
            size,
            raw.verticals,
            raw.horizontals,
            raw.start,
            raw.seed,
            raw.carve_order,
        );

        if let Some(&stray) = maze
            .carve_order
            .iter()
            .find(|passage| !maze.is_open(passage.from, passage.dir))
        {
            return Err(MazeError::StrayPassage(stray));
        }

        Ok(maze)
    }
}

impl Maze {
    pub(crate) fn from_parts(
        size: Dims,
        verticals: Array2D<bool>,
        horizontals: Array2D<bool>,
        start: Dims,
        seed: Option<u64>,
        carve_order: Vec<Passage>,
    ) -> Self {
        Self {
            size,
            verticals,
            horizontals,
            start,
            seed,
            carve_order,
        }
    }

    /// `Dims(rows, columns)`
    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn verticals(&self) -> &Array2D<bool> {
        &self.verticals
    }

    pub fn horizontals(&self) -> &Array2D<bool> {
        &self.horizontals
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    /// Seed the maze was generated from, `None` when the caller supplied the
    /// random source directly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Passages in the order they were carved.
    pub fn carve_order(&self) -> &[Passage] {
        &self.carve_order
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.is_inside(self.size)
    }

    /// Whether one can move from `cell` in `dir`. Moves off the grid are
    /// always blocked.
    pub fn is_open(&self, cell: Dims, dir: Direction) -> bool {
        if !self.is_in_bounds(cell) || !self.is_in_bounds(cell + dir.to_coord()) {
            return false;
        }

        let (axis, slot) = dir.wall_slot(cell);
        self.walls(axis).get(slot).copied().unwrap_or(false)
    }

    pub fn walls(&self, axis: WallAxis) -> &Array2D<bool> {
        match axis {
            WallAxis::Vertical => &self.verticals,
            WallAxis::Horizontal => &self.horizontals,
        }
    }

    pub fn open_passage_count(&self) -> usize {
        self.verticals
            .iter()
            .chain(self.horizontals.iter())
            .filter(|&&open| open)
            .count()
    }

    /// Cells reachable from `cell` in one step.
    pub fn neighbors(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        Direction::get_in_order()
            .into_iter()
            .filter(|&dir| self.is_open(cell, dir))
            .map(|dir| cell + dir.to_coord())
            .collect()
    }

    pub fn into_board(self, goal: Dims) -> Result<Board, BoardError> {
        Board::new(self, goal)
    }

    pub fn into_board_with(self, placement: GoalPlacement) -> Result<Board, BoardError> {
        let goal = placement.resolve(self.size, self.start);
        Board::new(self, goal)
    }
}
