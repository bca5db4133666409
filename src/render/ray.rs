use crate::{
    error::{Error, Result},
    math::{matrix::Matrix, point::Point, transform::Transform, tuple::Tuple, vector::Vector},
};

/// Half-line `origin + t * direction`. The direction is not required to be unit length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

/// Origin and direction move together, so world rays can be taken into object space.
impl Transform for Ray {
    fn transform(&mut self, matrix: &Matrix) {
        self.origin.transform(matrix);
        self.direction.transform(matrix);
    }
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Builds a ray from raw homogeneous quadruples.
    /// The origin must have `w = 1` and the direction `w = 0`.
    pub fn from_homogeneous(origin: [f64; 4], direction: [f64; 4]) -> Result<Self> {
        let [ox, oy, oz, ow] = origin;
        let [dx, dy, dz, dw] = direction;

        let origin = Point::from_homogeneous(ox, oy, oz, ow).map_err(|_| Error::InvalidRay {
            reason: format!("origin must be a point (w = 1), found w = {}", ow),
        })?;
        let direction =
            Vector::from_homogeneous(dx, dy, dz, dw).map_err(|_| Error::InvalidRay {
                reason: format!("direction must be a vector (w = 0), found w = {}", dw),
            })?;

        Ok(Self::new(origin, direction))
    }

    pub fn position(&self, time: f64) -> Point {
        self.origin + self.direction * time
    }
    pub fn origin(&self) -> &Point {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn position_walks_along_direction() {
        let ray = Ray::new(Point::new(-1., 0.5, 2.), Vector::new(0., 2., -1.));

        assert_approx_eq_low_prec!(ray.position(0.), Point::new(-1., 0.5, 2.));
        assert_approx_eq_low_prec!(ray.position(0.75), Point::new(-1., 2., 1.25));
        assert_approx_eq_low_prec!(ray.position(-2.), Point::new(-1., -3.5, 4.));
    }

    #[test]
    fn from_homogeneous_checks_w() {
        let ray = Ray::from_homogeneous([0., 1., 2., 1.], [1., 0., 0., 0.]).unwrap();
        assert_eq!(ray, Ray::new(Point::new(0., 1., 2.), Vector::new(1., 0., 0.)));

        for (origin, direction) in [
            ([0., 1., 2., 0.], [1., 0., 0., 0.]),
            ([0., 1., 2., 1.], [1., 0., 0., 1.]),
            ([0., 1., 2., 2.], [1., 0., 0., 0.]),
        ] {
            assert!(matches!(
                Ray::from_homogeneous(origin, direction),
                Err(Error::InvalidRay { .. })
            ));
        }
    }

    #[test]
    fn translation_moves_origin_only() {
        let mut ray = Ray::new(Point::new(0., 0., -2.), Vector::new(0., 0., 1.));
        ray.translate(5., -1., 2.);

        assert_approx_eq_low_prec!(*ray.origin(), Point::new(5., -1., 0.));
        assert_approx_eq_low_prec!(*ray.direction(), Vector::new(0., 0., 1.));
    }

    #[test]
    fn scaling_stretches_direction_without_normalizing() {
        let ray = Ray::new(Point::new(1., -1., 0.5), Vector::new(1., 1., 0.));
        let stretched = ray.transform_new(&Matrix::scaling(2., 0.5, 4.));

        assert_approx_eq_low_prec!(*stretched.origin(), Point::new(2., -0.5, 2.));
        assert_approx_eq_low_prec!(*stretched.direction(), Vector::new(2., 0.5, 0.));
        assert_approx_eq_low_prec!(stretched.position(1.), Point::new(4., 0., 2.));
    }
}
