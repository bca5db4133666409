use std::ops;

use super::{approx_eq::ApproxEq, point::Point, tuple::Tuple};

/// Direction in space, `w` is always 0 so translations leave it unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Vector {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn w(&self) -> f64 {
        0.
    }
}

impl Vector {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// A zero vector has no direction, so it normalizes to itself.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == 0. { Self::zero() } else { *self / len }
    }

    pub fn cross(&self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Mirrors `self` around `normal`, which must be normalized.
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * (2. * self.dot(normal))
    }
}

impl ApproxEq for Vector {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.to_homogeneous()
            .iter()
            .zip(other.to_homogeneous())
            .all(|(lhs, rhs)| lhs.approx_eq_epsilon(&rhs, epsilon))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Point> for Vector {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        rhs + self
    }
}

impl ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|a| a * rhs)
    }
}

impl ops::Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|a| a / rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn homogeneous_w_is_zero() {
        assert_eq!(Vector::new(0.5, -7., 2.).to_homogeneous(), [0.5, -7., 2., 0.]);
        assert!(Vector::from_homogeneous(0.5, -7., 2., 0.).is_ok());
        assert!(Vector::from_homogeneous(0.5, -7., 2., 1.).is_err());
    }

    #[test]
    fn vector_plus_point_is_point() {
        let p = Vector::new(1., 0.5, -2.) + Point::new(4., -1., 3.);
        assert_eq!(p, Point::new(5., -0.5, 1.));
        assert_eq!(p.w(), 1.);
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = Vector::new(6., -3., 1.5);
        let b = Vector::new(-2., 4., 0.5);

        assert_eq!(a + b, Vector::new(4., 1., 2.));
        assert_eq!(a - b, Vector::new(8., -7., 1.));
        assert_eq!(-a, Vector::new(-6., 3., -1.5));
        assert_eq!(a * -0.5, Vector::new(-3., 1.5, -0.75));
        assert_eq!(a / 3., Vector::new(2., -1., 0.5));
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vector::new(2., -3., 6.);

        assert_approx_eq_low_prec!(v.magnitude(), 7.);
        assert_eq!(v.normalize(), Vector::new(2. / 7., -3. / 7., 6. / 7.));
        assert_approx_eq_low_prec!(v.normalize().magnitude(), 1.);
        assert_approx_eq_low_prec!((-v).normalize().magnitude(), 1.);
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        assert_eq!(Vector::zero().normalize(), Vector::zero());
        assert_eq!(Vector::zero().magnitude(), 0.);
    }

    #[test]
    fn dot_product() {
        let a = Vector::new(3., -1., 2.);
        assert_approx_eq_low_prec!(a.dot(Vector::new(1., 5., -2.)), -6.);
        assert_approx_eq_low_prec!(a.dot(a), a.magnitude().powi(2));
    }

    #[test]
    fn cross_product_is_orthogonal_and_anticommutative() {
        let a = Vector::new(3., -1., 2.);
        let b = Vector::new(0., 4., 1.);
        let c = a.cross(b);

        assert_eq!(c, Vector::new(-9., -3., 12.));
        assert_eq!(b.cross(a), -c);
        assert_approx_eq_low_prec!(c.dot(a), 0.);
        assert_approx_eq_low_prec!(c.dot(b), 0.);
    }

    #[test]
    fn reflect_off_flat_floor() {
        let normal = Vector::new(0., 1., 0.);
        assert_eq!(Vector::new(2., -3., 0.5).reflect(normal), Vector::new(2., 3., 0.5));
    }

    #[test]
    fn reflect_off_slanted_surface() {
        let normal = Vector::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.);
        assert_eq!(Vector::new(0., -1., 0.).reflect(normal), Vector::new(1., 0., 0.));
    }
}
