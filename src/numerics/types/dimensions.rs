// src/numerics/types/dimensions.rs
// Row/column count pair used for shape checks.

use core::fmt;

/// Shape of a matrix, `rows x columns`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of entries a matrix of this shape stores, `None` when the
    /// count overflows `usize`
    pub fn checked_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Shape with rows and columns exchanged
    pub fn transposed(&self) -> Self {
        Self::new(self.columns, self.rows)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from(tuple: (usize, usize)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<Dimensions> for (usize, usize) {
    fn from(d: Dimensions) -> Self {
        (d.rows, d.columns)
    }
}
