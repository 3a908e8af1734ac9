//! Perfect maze generation.
//!
//! A maze is carved by a randomized depth-first walk over an R×C grid and
//! handed out as two boolean wall matrices: see [`Maze`] and [`Board`].
//!
//! ```
//! use pmaze::{Dims, GoalPlacement, Generator};
//!
//! let maze = Generator::new(Dims(5, 8))?.with_seed(7).generate()?;
//! assert_eq!(maze.open_passage_count(), 5 * 8 - 1);
//!
//! let board = maze.into_board_with(GoalPlacement::FarCorner)?;
//! println!("{board}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithms;
pub mod array;
pub mod board;
pub mod dims;
pub mod direction;
pub mod grid;
pub mod maze;
pub mod shuffle;

pub use algorithms::{
    DepthFirstSearch, GenerationError, Generator, MazeAlgorithm, Random, RecursiveBacktracker,
};
pub use array::{Array2D, ShapeError};
pub use board::{Board, BoardError, GoalPlacement, WallSegment};
pub use dims::Dims;
pub use direction::{Direction, Passage, WallAxis};
pub use grid::GridState;
pub use maze::{Maze, MazeError};
pub use shuffle::shuffle;
