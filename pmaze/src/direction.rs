use serde::{Deserialize, Serialize};

use crate::dims::Dims;

/// One of the four axis-aligned neighbors of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Which of the two wall matrices a wall lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallAxis {
    /// Walls between horizontally adjacent cells, `rows × (columns - 1)`.
    Vertical,
    /// Walls between vertically adjacent cells, `(rows - 1) × columns`.
    Horizontal,
}

impl Direction {
    /// Candidate order before shuffling: up, right, down, left.
    pub const fn get_in_order() -> [Direction; 4] {
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Direction::Up => Dims(-1, 0),
            Direction::Right => Dims(0, 1),
            Direction::Down => Dims(1, 0),
            Direction::Left => Dims(0, -1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The wall crossed when moving from `cell` in this direction, as a
    /// matrix and an index into it.
    ///
    /// The index is only meaningful when both `cell` and its neighbor are in
    /// the grid.
    pub fn wall_slot(self, cell: Dims) -> (WallAxis, Dims) {
        let Dims(row, column) = cell;
        match self {
            Direction::Up => (WallAxis::Horizontal, Dims(row - 1, column)),
            Direction::Right => (WallAxis::Vertical, Dims(row, column)),
            Direction::Down => (WallAxis::Horizontal, Dims(row, column)),
            Direction::Left => (WallAxis::Vertical, Dims(row, column - 1)),
        }
    }

    /// Direction leading from `cell` to `other`, if they are adjacent.
    pub fn between(cell: Dims, other: Dims) -> Option<Direction> {
        match (other.0 - cell.0, other.1 - cell.1) {
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// A carved passage: the wall between `from` and its neighbor in `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passage {
    pub from: Dims,
    pub dir: Direction,
}

impl Passage {
    pub fn new(from: Dims, dir: Direction) -> Self {
        Self { from, dir }
    }

    pub fn to(&self) -> Dims {
        self.from + self.dir.to_coord()
    }
}
