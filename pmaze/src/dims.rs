use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A `(row, column)` pair.
///
/// Used both for cell positions and for grid sizes (`Dims(rows, columns)`).
/// Components are signed, so neighbor offsets can step outside the grid and
/// be rejected by a bounds check instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Number of cells in a grid of this size, `None` if either side is negative.
    pub fn area(self) -> Option<usize> {
        let rows = usize::try_from(self.0).ok()?;
        let columns = usize::try_from(self.1).ok()?;
        rows.checked_mul(columns)
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Whether `self`, as a position, lies inside a grid of `size`.
    pub fn is_inside(self, size: Dims) -> bool {
        0 <= self.0 && self.0 < size.0 && 0 <= self.1 && self.1 < size.1
    }

    /// Cell diagonally opposite to `self` in a grid of `size`.
    pub fn mirrored(self, size: Dims) -> Dims {
        Dims(size.0 - 1 - self.0, size.1 - 1 - self.1)
    }

    /// Iterates all positions in `[from, to)`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |column| Dims(row, column)))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}
