use std::{f64::consts::PI, ops};

use super::{
    approx_eq::ApproxEq, dyn_matrix::DynMatrix, point::Point, transform::Transform, tuple::Tuple,
    vector::Vector,
};
use crate::error::{Error, Result};

const SIZE: usize = 4;

/// Row-major 4x4 matrix holding an affine transformation.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    data: [f64; SIZE * SIZE],
}

fn dot(lhs: [f64; SIZE], rhs: [f64; SIZE]) -> f64 {
    lhs.iter().zip(rhs).map(|(a, b)| a * b).sum()
}

impl Matrix {
    pub fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self::new([0.; 16])
    }

    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { 1. } else { 0. })
    }

    fn from_fn(mut cell: impl FnMut(usize, usize) -> f64) -> Self {
        Self::new(std::array::from_fn(|id| cell(id / SIZE, id % SIZE)))
    }

    fn row(&self, row: usize) -> [f64; SIZE] {
        std::array::from_fn(|col| self[(row, col)])
    }

    fn column(&self, col: usize) -> [f64; SIZE] {
        std::array::from_fn(|row| self[(row, col)])
    }

    pub fn data(&self) -> &[f64; 16] {
        &self.data
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Same as `self.transpose() * rhs` without building the transposed matrix.
    /// Normals are carried to world space this way by the inverse transformation.
    pub fn mul_transposed<T: Tuple>(&self, rhs: T) -> T {
        let rhs = rhs.to_homogeneous();
        T::new(
            dot(self.column(0), rhs),
            dot(self.column(1), rhs),
            dot(self.column(2), rhs),
        )
    }

    /// 3x3 matrix left after removing `row` and `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> DynMatrix {
        DynMatrix::from(*self).submatrix(row, col)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).square_determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { -minor } else { minor }
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..SIZE).map(|col| self[(0, col)] * self.cofactor(0, col)).sum()
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.
    }

    /// Adjugate divided by the determinant. Only an exactly zero determinant
    /// is rejected.
    pub fn inverse(&self) -> Result<Matrix> {
        let determinant = self.determinant();
        if determinant == 0. {
            return Err(Error::SingularMatrix);
        }
        Ok(Self::from_fn(|row, col| self.cofactor(col, row) / determinant))
    }

    /// Composes `transformations` so that the first one is applied first.
    pub fn chain<I: IntoIterator<Item = Matrix>>(transformations: I) -> Matrix {
        transformations.into_iter().collect()
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        let mut matrix = Self::identity();
        matrix[(0, 3)] = x;
        matrix[(1, 3)] = y;
        matrix[(2, 3)] = z;
        matrix
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        let mut matrix = Self::identity();
        matrix[(0, 0)] = x;
        matrix[(1, 1)] = y;
        matrix[(2, 2)] = z;
        matrix
    }

    pub fn scaling_uniform(factor: f64) -> Matrix {
        Self::scaling(factor, factor, factor)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        Matrix::new([
            1., 0., 0., 0.,
            0., cos, -sin, 0.,
            0., sin, cos, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        Matrix::new([
            cos, 0., sin, 0.,
            0., 1., 0., 0.,
            -sin, 0., cos, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        Matrix::new([
            cos, -sin, 0., 0.,
            sin, cos, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation by `fraction * PI` radians.
    pub fn rotation_x_frac_pi(fraction: f64) -> Matrix {
        Self::rotation_x(fraction * PI)
    }

    pub fn rotation_y_frac_pi(fraction: f64) -> Matrix {
        Self::rotation_y(fraction * PI)
    }

    pub fn rotation_z_frac_pi(fraction: f64) -> Matrix {
        Self::rotation_z(fraction * PI)
    }

    /// `xy` is how much x moves in proportion to y, and so on.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
        let mut matrix = Self::identity();
        let cells: [((usize, usize), f64); 6] = [
            ((0, 1), xy),
            ((0, 2), xz),
            ((1, 0), yx),
            ((1, 2), yz),
            ((2, 0), zx),
            ((2, 1), zy),
        ];
        for (cell, value) in cells {
            matrix[cell] = value;
        }
        matrix
    }

    /// World-to-camera transform for an eye at `from` looking at `to`.
    pub fn view_transformation(from: Point, to: Point, up: Vector) -> Matrix {
        let forward = (to - from).normalize();
        let left = forward.cross(up.normalize());
        let true_up = left.cross(forward);

        let axes = [left, true_up, -forward];
        let orientation = Self::from_fn(|row, col| match (axes.get(row), col) {
            (Some(axis), 0..=2) => axis.to_homogeneous()[col],
            _ if row == col => 1.,
            _ => 0.,
        });

        orientation * Matrix::translation(-from.x(), -from.y(), -from.z())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform for Matrix {
    fn transform(&mut self, matrix: &Matrix) {
        *self = matrix * &*self;
    }
}

impl FromIterator<Matrix> for Matrix {
    fn from_iter<T: IntoIterator<Item = Matrix>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Matrix::identity(), |applied, next| next * applied)
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(lhs, rhs)| lhs.approx_eq_epsilon(rhs, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < SIZE && col < SIZE);
        &self.data[row * SIZE + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < SIZE && col < SIZE);
        &mut self.data[row * SIZE + col]
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::from_fn(|row, col| dot(self.row(row), rhs.column(col)))
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Tuple> ops::Mul<T> for &Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        let rhs = rhs.to_homogeneous();
        T::new(
            dot(self.row(0), rhs),
            dot(self.row(1), rhs),
            dot(self.row(2), rhs),
        )
    }
}

impl<T: Tuple> ops::Mul<T> for Matrix {
    type Output = T;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
