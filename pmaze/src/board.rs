//! What the rendering and physics side gets to see.
//!
//! A [`Board`] is a finished [`Maze`] plus the goal cell the consumer picked.
//! It never changes after construction.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{array::Array2D, dims::Dims, direction::WallAxis, maze::Maze};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("goal cell {0:?} is outside the grid")]
    GoalOutOfBounds(Dims),
}

/// How a consumer picks the goal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalPlacement {
    /// The cell diagonally opposite the start.
    #[default]
    OppositeStart,
    /// The bottom-right cell.
    FarCorner,
    Fixed(Dims),
}

impl GoalPlacement {
    pub fn resolve(self, size: Dims, start: Dims) -> Dims {
        match self {
            GoalPlacement::OppositeStart => start.mirrored(size),
            GoalPlacement::FarCorner => size - Dims::ONE,
            GoalPlacement::Fixed(goal) => goal,
        }
    }
}

/// A wall drawn on the lattice of grid lines.
///
/// Endpoints are `(row_line, column_line)`, with line `0` along the top/left
/// edge of the grid and line `rows`/`columns` along the bottom/right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallSegment {
    pub from: Dims,
    pub to: Dims,
    pub axis: WallAxis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    maze: Maze,
    goal: Dims,
}

#[derive(Deserialize)]
#[serde(rename = "Board")]
struct RawBoard {
    maze: Maze,
    goal: Dims,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::new(raw.maze, raw.goal)
    }
}

impl Board {
    pub fn new(maze: Maze, goal: Dims) -> Result<Self, BoardError> {
        if !maze.is_in_bounds(goal) {
            return Err(BoardError::GoalOutOfBounds(goal));
        }

        Ok(Self { maze, goal })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn size(&self) -> Dims {
        self.maze.size()
    }

    pub fn start(&self) -> Dims {
        self.maze.start()
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn verticals(&self) -> &Array2D<bool> {
        self.maze.verticals()
    }

    pub fn horizontals(&self) -> &Array2D<bool> {
        self.maze.horizontals()
    }

    /// Every closed interior wall, horizontal walls first.
    pub fn wall_segments(&self) -> Vec<WallSegment> {
        let horizontal = self
            .horizontals()
            .iter_pos()
            .filter(|&pos| !self.horizontals()[pos])
            .map(|Dims(row, column)| WallSegment {
                from: Dims(row + 1, column),
                to: Dims(row + 1, column + 1),
                axis: WallAxis::Horizontal,
            });

        let vertical = self
            .verticals()
            .iter_pos()
            .filter(|&pos| !self.verticals()[pos])
            .map(|Dims(row, column)| WallSegment {
                from: Dims(row, column + 1),
                to: Dims(row + 1, column + 1),
                axis: WallAxis::Vertical,
            });

        horizontal.chain(vertical).collect()
    }

    /// The four outer walls: top, bottom, left, right.
    pub fn border_segments(&self) -> [WallSegment; 4] {
        let Dims(rows, columns) = self.size();
        [
            WallSegment {
                from: Dims(0, 0),
                to: Dims(0, columns),
                axis: WallAxis::Horizontal,
            },
            WallSegment {
                from: Dims(rows, 0),
                to: Dims(rows, columns),
                axis: WallAxis::Horizontal,
            },
            WallSegment {
                from: Dims(0, 0),
                to: Dims(rows, 0),
                axis: WallAxis::Vertical,
            },
            WallSegment {
                from: Dims(0, columns),
                to: Dims(rows, columns),
                axis: WallAxis::Vertical,
            },
        ]
    }

    /// Occupancy grid of `(2 * rows + 1) × (2 * columns + 1)` tiles, `1` being
    /// walkable and `0` a wall. Cell `(r, c)` sits at tile `(2r + 1, 2c + 1)`.
    pub fn to_binary_grid(&self) -> Array2D<u8> {
        let Dims(rows, columns) = self.size();
        let mut grid = Array2D::new(0u8, rows as usize * 2 + 1, columns as usize * 2 + 1);

        for Dims(row, column) in Dims::iter_fill(Dims::ZERO, self.size()) {
            grid[Dims(row * 2 + 1, column * 2 + 1)] = 1;
        }

        for pos in self.verticals().iter_pos() {
            if self.verticals()[pos] {
                grid[Dims(pos.0 * 2 + 1, pos.1 * 2 + 2)] = 1;
            }
        }

        for pos in self.horizontals().iter_pos() {
            if self.horizontals()[pos] {
                grid[Dims(pos.0 * 2 + 2, pos.1 * 2 + 1)] = 1;
            }
        }

        grid
    }

    fn cell_marker(&self, cell: Dims) -> &'static str {
        if cell == self.start() {
            " S "
        } else if cell == self.goal {
            " G "
        } else {
            "   "
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dims(rows, columns) = self.size();

        for row in 0..=rows {
            // grid line above `row`
            write!(f, "+")?;
            for column in 0..columns {
                let open = row > 0
                    && row < rows
                    && self.horizontals()[Dims(row - 1, column)];
                write!(f, "{}+", if open { "   " } else { "---" })?;
            }
            writeln!(f)?;

            if row == rows {
                break;
            }

            write!(f, "|")?;
            for column in 0..columns {
                let open = column + 1 < columns && self.verticals()[Dims(row, column)];
                write!(
                    f,
                    "{}{}",
                    self.cell_marker(Dims(row, column)),
                    if open { " " } else { "|" }
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
