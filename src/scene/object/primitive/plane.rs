//! The object-space xz plane, facing +y.

use crate::{
    math::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

pub fn normal_at() -> Vector {
    Vector::new(0., 1., 0.)
}

/// Rays with no y component never cross the plane, even when they lie in it.
pub fn intersect(object_ray: &Ray, times: &mut Vec<f64>) {
    let dy = object_ray.direction().y();
    if !dy.approx_eq(&0.) {
        times.push(-object_ray.origin().y() / dy);
    }
}
