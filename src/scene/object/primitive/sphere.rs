//! Sphere of radius 1 centered at the object-space origin.

use crate::{
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

pub fn normal_at(object_point: Point) -> Vector {
    object_point - Point::zero()
}

/// Pushes both roots of `|o + t*d|^2 = 1`, so a tangent ray yields the same
/// time twice and roots behind the origin are kept.
pub fn intersect(object_ray: &Ray, times: &mut Vec<f64>) {
    let dir = *object_ray.direction();
    let to_origin = *object_ray.origin() - Point::zero();

    let a = dir.dot(dir);
    if a == 0. {
        return;
    }
    let half_b = dir.dot(to_origin);
    let c = to_origin.dot(to_origin) - 1.;

    let quarter_disc = half_b * half_b - a * c;
    if quarter_disc < 0. {
        return;
    }
    let root = quarter_disc.sqrt();
    times.extend([(-half_b - root) / a, (-half_b + root) / a]);
}
