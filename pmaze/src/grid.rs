use crate::{
    algorithms::GenerationError,
    array::Array2D,
    dims::Dims,
    direction::{Direction, Passage, WallAxis},
    maze::Maze,
};

/// Largest grid, in cells, a run will allocate for.
///
/// A run keeps about 16 bytes per cell (three flag matrices plus the carve
/// log), so this caps a single run at roughly 256 MiB.
pub const MAX_CELLS: usize = 1 << 24;

/// Checks that `size` has positive sides and at most [`MAX_CELLS`] cells,
/// returning the cell count.
pub fn check_size(size: Dims) -> Result<usize, GenerationError> {
    if !size.all_positive() {
        return Err(GenerationError::InvalidDimensions(size));
    }

    match size.area() {
        Some(cells) if cells <= MAX_CELLS => Ok(cells),
        _ => Err(GenerationError::TooLarge(size)),
    }
}

/// Mutable state of a single generation run.
///
/// Holds the visited flags and both wall matrices. A wall entry set to `true`
/// means the passage is open. Only the carving algorithms mutate it, and it is
/// consumed by [`GridState::into_maze`] once carving is done.
#[derive(Debug, Clone)]
pub struct GridState {
    size: Dims,
    visited: Array2D<bool>,
    verticals: Array2D<bool>,
    horizontals: Array2D<bool>,
    visited_count: usize,
    carve_order: Vec<Passage>,
}

impl GridState {
    /// Builds an all-unvisited, all-walled grid of `size` (`Dims(rows, columns)`).
    pub fn new(size: Dims) -> Result<Self, GenerationError> {
        let cell_count = check_size(size)?;
        let Dims(rows, columns) = size;
        let (rows, columns) = (rows as usize, columns as usize);

        Ok(Self {
            size,
            visited: Array2D::new(false, rows, columns),
            verticals: Array2D::new(false, rows, columns - 1),
            horizontals: Array2D::new(false, rows - 1, columns),
            visited_count: 0,
            carve_order: Vec::with_capacity(cell_count.saturating_sub(1)),
        })
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.is_inside(self.size)
    }

    /// Out-of-range cells read as unvisited; callers bounds-check first.
    pub fn is_visited(&self, pos: Dims) -> bool {
        self.visited.get(pos).copied().unwrap_or(false)
    }

    /// Marks `pos` visited. Returns `false` if it already was, or is outside.
    pub fn mark_visited(&mut self, pos: Dims) -> bool {
        match self.visited.get_mut(pos) {
            Some(flag) if !*flag => {
                *flag = true;
                self.visited_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn is_complete(&self) -> bool {
        self.visited_count == self.cell_count()
    }

    /// Opens the wall between `cell` and its neighbor in `dir`.
    ///
    /// Returns `false` and changes nothing if either cell is outside the grid.
    pub fn open_wall(&mut self, cell: Dims, dir: Direction) -> bool {
        if !self.is_in_bounds(cell) || !self.is_in_bounds(cell + dir.to_coord()) {
            return false;
        }

        let (axis, slot) = dir.wall_slot(cell);
        let walls = match axis {
            WallAxis::Vertical => &mut self.verticals,
            WallAxis::Horizontal => &mut self.horizontals,
        };

        match walls.get_mut(slot) {
            Some(open) => {
                *open = true;
                self.carve_order.push(Passage::new(cell, dir));
                true
            }
            None => false,
        }
    }

    pub fn verticals(&self) -> &Array2D<bool> {
        &self.verticals
    }

    pub fn horizontals(&self) -> &Array2D<bool> {
        &self.horizontals
    }

    pub fn carve_order(&self) -> &[Passage] {
        &self.carve_order
    }

    /// Hands the wall matrices off as an immutable [`Maze`].
    pub fn into_maze(self, start: Dims, seed: Option<u64>) -> Maze {
        Maze::from_parts(
            self.size,
            self.verticals,
            self.horizontals,
            start,
            seed,
            self.carve_order,
        )
    }
}
