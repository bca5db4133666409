use std::{array, ops};

use super::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector};

/// Position in space; `w` is always 1 so translations move it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    coords: [f64; 3],
}

impl Tuple for Point {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { coords: [x, y, z] }
    }

    fn x(&self) -> f64 {
        self.coords[0]
    }
    fn y(&self) -> f64 {
        self.coords[1]
    }
    fn z(&self) -> f64 {
        self.coords[2]
    }
    fn w(&self) -> f64 {
        1.
    }
}

impl Point {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.to_homogeneous()
            .iter()
            .zip(other.to_homogeneous())
            .all(|(lhs, rhs)| lhs.approx_eq_epsilon(&rhs, epsilon))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        let offset = rhs.to_homogeneous();
        Self {
            coords: array::from_fn(|i| self.coords[i] + offset[i]),
        }
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        self + -rhs
    }
}

/// Two positions differ by a direction.
impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Self::Output {
        let [x, y, z]: [f64; 3] = array::from_fn(|i| self.coords[i] - rhs.coords[i]);
        Vector::new(x, y, z)
    }
}
