use crate::{
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

use super::{plane, sphere};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Unit sphere at the origin.
    Sphere,
    /// The xz plane, normal pointing along +y.
    Plane,
}

impl Shape {
    /// Appends the hit times of a ray already mapped into object space.
    pub fn local_intersect(&self, object_ray: &Ray, times: &mut Vec<f64>) {
        match self {
            Shape::Sphere => sphere::intersect(object_ray, times),
            Shape::Plane => plane::intersect(object_ray, times),
        }
    }

    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        match self {
            Shape::Sphere => sphere::normal_at(object_point),
            Shape::Plane => plane::normal_at(),
        }
    }
}
