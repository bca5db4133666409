use std::ops;

use super::{approx_eq::ApproxEq, matrix::Matrix};
use crate::error::{Error, Result};

/// Dense row-major matrix of arbitrary size.
///
/// Used for the intermediate steps of cofactor expansion (submatrices shrink
/// by one row and column each step) and wherever dimensions are only known at
/// runtime, so every size-dependent operation is checked.
#[derive(Debug, Clone)]
pub struct DynMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DynMatrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch {
                expected: format!("{} elements for a {}x{} matrix", rows * cols, rows, cols),
                found: format!("{} elements", data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if let Some(ragged) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::DimensionMismatch {
                expected: format!("rows of length {}", cols),
                found: format!("a row of length {}", ragged.len()),
            });
        }
        Self::new(rows.len(), cols, rows.concat())
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.; rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut res = Self::zeros(size, size);
        for i in 0..size {
            res[(i, i)] = 1.;
        }
        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::dimensions(
                (self.rows, self.rows),
                (self.rows, self.cols),
            ));
        }
        Ok(())
    }

    pub fn transpose(&self) -> Self {
        let mut res = Self::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                res[(col, row)] = self[(row, col)];
            }
        }
        res
    }

    pub fn checked_mul(&self, rhs: &DynMatrix) -> Result<DynMatrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                expected: format!("{} rows on the right-hand side", self.cols),
                found: format!("{} rows", rhs.rows),
            });
        }
        let mut res = Self::zeros(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                res[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        Ok(res)
    }

    /// Copy of the matrix without `row_to_del` and `col_to_del`.
    pub fn submatrix(&self, row_to_del: usize, col_to_del: usize) -> Self {
        debug_assert!(row_to_del < self.rows);
        debug_assert!(col_to_del < self.cols);

        let data = (0..self.rows)
            .filter(|&row| row != row_to_del)
            .flat_map(|row| {
                (0..self.cols)
                    .filter(move |&col| col != col_to_del)
                    .map(move |col| self[(row, col)])
            })
            .collect();

        Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    // callers guarantee the matrix is square
    pub(crate) fn square_determinant(&self) -> f64 {
        match self.rows {
            0 => 1.,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => (0..self.cols)
                .map(|col| self[(0, col)] * self.square_cofactor(0, col))
                .sum(),
        }
    }

    fn square_cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.submatrix(row, col).square_determinant();
        if (row + col) % 2 == 1 { -minor } else { minor }
    }

    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        Ok(self.square_determinant())
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.ensure_square()?;
        Ok(self.submatrix(row, col).square_determinant())
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        self.ensure_square()?;
        Ok(self.square_cofactor(row, col))
    }

    /// Exact test: only a determinant of exactly zero is singular.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.square_determinant() != 0.
    }

    /// Inverse through the adjugate: the transposed cofactor matrix
    /// divided by the determinant.
    pub fn inverse(&self) -> Result<DynMatrix> {
        let determinant = self.determinant()?;
        if determinant == 0. {
            return Err(Error::SingularMatrix);
        }

        let mut res = Self::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                // transposed on write
                res[(col, row)] = self.square_cofactor(row, col) / determinant;
            }
        }
        Ok(res)
    }
}

impl ApproxEq for DynMatrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(x, y)| x.approx_eq_epsilon(y, epsilon))
    }
}

impl PartialEq for DynMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for DynMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl ops::IndexMut<(usize, usize)> for DynMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl From<Matrix> for DynMatrix {
    fn from(val: Matrix) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: val.data().to_vec(),
        }
    }
}

impl TryFrom<&DynMatrix> for Matrix {
    type Error = Error;

    fn try_from(val: &DynMatrix) -> Result<Self> {
        let data: [f64; 16] = val
            .data
            .as_slice()
            .try_into()
            .map_err(|_| Error::dimensions((4, 4), (val.rows, val.cols)))?;
        if val.rows != 4 {
            return Err(Error::dimensions((4, 4), (val.rows, val.cols)));
        }
        Ok(Matrix::new(data))
    }
}

impl TryFrom<DynMatrix> for Matrix {
    type Error = Error;

    fn try_from(val: DynMatrix) -> Result<Self> {
        Matrix::try_from(&val)
    }
}
