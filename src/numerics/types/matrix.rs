// src/numerics/types/matrix.rs
// Dense row-major f64 matrix with runtime dimensions.

use core::ops::{Add, Index, IndexMut, Mul, MulAssign, Sub};
use core::slice::ChunksExact;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, MatrixError, Result};
use crate::numerics::types::dimensions::Dimensions;

/// Dense matrix of `f64` entries stored row by row.
///
/// A matrix always has at least one row and one column, and its shape never
/// changes after construction. Every constructor copies its input, so a
/// `Matrix` never shares storage with the caller.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Validate a shape and return its entry count.
    fn check_shape(rows: usize, columns: usize) -> Result<usize> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::EmptyShape { rows, columns });
        }
        Dimensions::new(rows, columns)
            .checked_size()
            .ok_or(MatrixError::TooLarge { rows, columns })
    }

    fn from_parts(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * columns);
        Self { rows, columns, data }
    }

    /// Construct a matrix from a list of equally long rows.
    ///
    /// Fails with [`MatrixError::RaggedRows`] when a row differs in length from
    /// the first one. The error message lists every row and marks the first
    /// offending one with `<--`.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = match rows.first() {
            Some(first) => first.as_ref(),
            None => return Err(MatrixError::EmptyShape { rows: 0, columns: 0 }),
        };
        let columns = first.len();

        if let Some(bad) = rows.iter().position(|row| row.as_ref().len() != columns) {
            return Err(MatrixError::RaggedRows {
                row: bad,
                rendering: render_rows(rows, bad),
            });
        }
        let size = Self::check_shape(rows.len(), columns)?;

        let mut data = Vec::with_capacity(size);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self::from_parts(rows.len(), columns, data))
    }

    /// Zero matrix
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        let size = Self::check_shape(rows, columns)?;
        Ok(Self::from_parts(rows, columns, vec![0.0; size]))
    }

    /// Construct a matrix from `rows * columns` values given in row-major order.
    pub fn from_flat_values(rows: usize, columns: usize, values: &[f64]) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::EmptyShape { rows, columns });
        }
        // A slice can never hold an overflowing count, so saturating still
        // reports a mismatch.
        let expected = rows.saturating_mul(columns);
        if values.len() != expected {
            return Err(MatrixError::ArgumentCount {
                rows,
                columns,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(rows, columns, values.to_vec()))
    }

    /// Square matrix with `entries` on the diagonal and zeros elsewhere
    pub fn diagonal(entries: &[f64]) -> Result<Self> {
        let n = entries.len();
        let mut m = Self::zeros(n, n)?;
        for (i, &entry) in entries.iter().enumerate() {
            m.data[i * n + i] = entry;
        }
        Ok(m)
    }

    /// Identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// 1 x n matrix
    pub fn row_vector(entries: &[f64]) -> Result<Self> {
        Self::from_flat_values(1, entries.len(), entries)
    }

    /// n x 1 matrix
    pub fn column_vector(entries: &[f64]) -> Result<Self> {
        Self::from_flat_values(entries.len(), 1, entries)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of stored entries, `rows * columns`
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.columns)
    }

    /// Entries in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over the rows as slices
    pub fn iter_rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.columns)
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds { axis: Axis::Row, index: i, len: self.rows });
        }
        Ok(())
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j >= self.columns {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: j,
                len: self.columns,
            });
        }
        Ok(())
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        self.check_row(i)?;
        self.check_column(j)?;
        Ok(i * self.columns + j)
    }

    /// Get the entry at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        Ok(self.data[self.offset(i, j)?])
    }

    /// Overwrite the entry at row `i`, column `j`
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let idx = self.offset(i, j)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        self.check_row(i)?;
        let idx = i * self.columns;
        Ok(&self.data[idx..(idx + self.columns)])
    }

    /// Get a column by index
    pub fn column(&self, j: usize) -> Result<Vec<f64>> {
        self.check_column(j)?;
        Ok(self.iter_rows().map(|row| row[j]).collect())
    }

    /// Swap two rows in place.
    ///
    /// Swapping an in-range row with itself is a no-op. Both indices are
    /// checked otherwise, including when they are equal but out of range.
    pub fn swap_rows(&mut self, i1: usize, i2: usize) -> Result<()> {
        if i1 == i2 && i1 < self.rows {
            return Ok(());
        }
        self.check_row(i1)?;
        self.check_row(i2)?;

        let c = self.columns;
        let (lo, hi) = if i1 < i2 { (i1, i2) } else { (i2, i1) };
        let (head, tail) = self.data.split_at_mut(hi * c);
        head[lo * c..(lo + 1) * c].swap_with_slice(&mut tail[..c]);
        Ok(())
    }

    /// Swap two columns in place, with the same index rules as [`Matrix::swap_rows`].
    pub fn swap_columns(&mut self, j1: usize, j2: usize) -> Result<()> {
        if j1 == j2 && j1 < self.columns {
            return Ok(());
        }
        self.check_column(j1)?;
        self.check_column(j2)?;

        for row in self.data.chunks_exact_mut(self.columns) {
            row.swap(j1, j2);
        }
        Ok(())
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: f64) -> Result<()> {
        self.check_row(row)?;
        let c = self.columns;
        for x in &mut self.data[row * c..(row + 1) * c] {
            *x *= scalar;
        }
        Ok(())
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: f64) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        let c = self.columns;
        for j in 0..c {
            self.data[target * c + j] += self.data[source * c + j] * scalar;
        }
        Ok(())
    }

    /// True when both matrices have the same number of rows and columns
    pub fn is_type_equal(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    /// Exact entrywise comparison. A matrix always equals itself, even when it
    /// holds NaN entries.
    pub fn is_equal(&self, other: &Matrix) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.is_type_equal(other) && self.data == other.data
    }

    /// True for square matrices with `m[i][j] == m[j][i]` off the diagonal
    pub fn is_symmetric(&self) -> bool {
        if !self.dimensions().is_square() {
            return false;
        }
        let n = self.rows;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.data[i * n + j] != self.data[j * n + i] {
                    return false;
                }
            }
        }
        true
    }

    fn check_type_equal(&self, other: &Matrix, operation: &'static str) -> Result<()> {
        if !self.is_type_equal(other) {
            return Err(MatrixError::Shape {
                operation,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Self::from_parts(self.rows, self.columns, data)
    }

    /// Entrywise sum, returned as a new matrix
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_type_equal(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Entrywise difference, returned as a new matrix
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_type_equal(other, "sub")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Add `other` into `self`. Nothing is modified when the shapes differ.
    pub fn add_assign(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_type_equal(other, "add_assign")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(self)
    }

    /// Subtract `other` from `self`. Nothing is modified when the shapes differ.
    pub fn sub_assign(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_type_equal(other, "sub_assign")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(self)
    }

    pub fn mul_scalar(&self, k: f64) -> Matrix {
        let data = self.data.iter().map(|&x| k * x).collect();
        Self::from_parts(self.rows, self.columns, data)
    }

    pub fn mul_scalar_assign(&mut self, k: f64) -> &mut Self {
        for x in &mut self.data {
            *x *= k;
        }
        self
    }

    /// Matrix product `self * other`.
    ///
    /// Each entry is accumulated left to right over the contraction index,
    /// starting from zero.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns != other.rows {
            return Err(MatrixError::Shape {
                operation: "mul",
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let (n, m, p) = (self.rows, self.columns, other.columns);
        let mut data = vec![0.0; n * p];
        for i in 0..n {
            for j in 0..p {
                let mut acc = 0.0;
                for k in 0..m {
                    acc += self.data[i * m + k] * other.data[k * p + j];
                }
                data[i * p + j] = acc;
            }
        }
        Ok(Self::from_parts(n, p, data))
    }

    pub fn transpose(&self) -> Matrix {
        let (r, c) = (self.rows, self.columns);
        let mut data = vec![0.0; self.size()];
        for i in 0..r {
            for j in 0..c {
                data[j * r + i] = self.data[i * c + j];
            }
        }
        Self::from_parts(c, r, data)
    }

    /// Place matrices side by side. All of them must have the same number of rows.
    pub fn combine_horizontally(matrices: &[&Matrix]) -> Result<Matrix> {
        let first = *matrices
            .first()
            .ok_or(MatrixError::NullArgument { operation: "combine_horizontally" })?;

        for m in &matrices[1..] {
            if m.rows != first.rows {
                return Err(MatrixError::Shape {
                    operation: "combine_horizontally",
                    left: first.dimensions(),
                    right: m.dimensions(),
                });
            }
        }

        let columns = matrices.iter().map(|m| m.columns).sum();
        let mut data = Vec::with_capacity(first.rows * columns);
        for i in 0..first.rows {
            for m in matrices {
                data.extend_from_slice(&m.data[i * m.columns..(i + 1) * m.columns]);
            }
        }
        Ok(Self::from_parts(first.rows, columns, data))
    }

    /// Stack matrices top to bottom. All of them must have the same number of columns.
    pub fn combine_vertically(matrices: &[&Matrix]) -> Result<Matrix> {
        let first = *matrices
            .first()
            .ok_or(MatrixError::NullArgument { operation: "combine_vertically" })?;

        for m in &matrices[1..] {
            if m.columns != first.columns {
                return Err(MatrixError::Shape {
                    operation: "combine_vertically",
                    left: first.dimensions(),
                    right: m.dimensions(),
                });
            }
        }

        let rows = matrices.iter().map(|m| m.rows).sum();
        let mut data = Vec::with_capacity(rows * first.columns);
        for m in matrices {
            data.extend_from_slice(&m.data);
        }
        Ok(Self::from_parts(rows, first.columns, data))
    }
}

/// One line per row, the first mismatching row marked with `<--`.
fn render_rows<R: AsRef<[f64]>>(rows: &[R], marked: usize) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!("{:?}", row.as_ref()));
        if i == marked {
            out.push_str(" <--");
        }
        out.push('\n');
    }
    out
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.columns,
            "index ({}, {}) out of bounds for {} matrix",
            i,
            j,
            self.dimensions()
        );
        &self.data[i * self.columns + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.columns,
            "index ({}, {}) out of bounds for {} matrix",
            i,
            j,
            self.dimensions()
        );
        &mut self.data[i * self.columns + j]
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, other: Self) -> Result<Matrix> {
        Matrix::add(self, other)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, other: Self) -> Result<Matrix> {
        Matrix::sub(self, other)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Result<Matrix> {
        Matrix::mul(self, rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.mul_scalar(scalar)
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.mul_scalar_assign(scalar);
    }
}

// Serialized as nested rows; deserialization goes through `from_rows` so a
// ragged or empty payload is rejected.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter_rows())
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<f64>>>::deserialize(deserializer)?;
        Matrix::from_rows(&rows).map_err(<D::Error as serde::de::Error>::custom)
    }
}
