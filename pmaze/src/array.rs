use std::ops;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("array of {rows}x{columns} holds {len} items")]
pub struct ShapeError {
    pub rows: usize,
    pub columns: usize,
    pub len: usize,
}

/// Dense row-major matrix addressed by `Dims(row, column)`.
///
/// Either side may be zero, which is how the wall matrices of a single-row
/// or single-column grid are represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArray2D<T>")]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

/// Unchecked form of [`Array2D`] as it comes off the wire.
#[derive(Deserialize)]
#[serde(rename = "Array2D")]
struct RawArray2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> TryFrom<RawArray2D<T>> for Array2D<T> {
    type Error = ShapeError;

    fn try_from(raw: RawArray2D<T>) -> Result<Self, Self::Error> {
        let RawArray2D { buf, rows, columns } = raw;
        if rows.checked_mul(columns) != Some(buf.len()) {
            return Err(ShapeError {
                rows,
                columns,
                len: buf.len(),
            });
        }

        Ok(Self { buf, rows, columns })
    }
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.columns as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let row = usize::try_from(pos.0).ok()?;
        let column = usize::try_from(pos.1).ok()?;

        if row >= self.rows || column >= self.columns {
            return None;
        }

        Some(row * self.columns + column)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims((idx / self.columns) as i32, (idx % self.columns) as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows as slices, top to bottom.
    ///
    /// Yields `rows()` slices even when `columns()` is zero.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        let columns = self.columns;
        (0..self.rows).map(move |row| &self.buf[row * columns..(row + 1) * columns])
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![item; rows * columns],
            rows,
            columns,
        }
    }

    /// Like [`Array2D::new`], `None` if `size` has a negative side.
    pub fn new_dims(item: T, size: Dims) -> Option<Self> {
        let rows = usize::try_from(size.0).ok()?;
        let columns = usize::try_from(size.1).ok()?;
        Some(Self::new(item, rows, columns))
    }

    /// Copies the matrix out as nested vectors, one per row.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.row_slices().map(|row| row.to_vec()).collect()
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
