//! Phong ray casting kernel: homogeneous math, spheres and planes,
//! point lights with hard shadows, and a parallel per-pixel render loop.

pub mod error;

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod dyn_matrix;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod animation;
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
    pub mod renderer;
}

pub mod scene {
    pub mod camera;
    pub mod light;
    pub mod object;
    pub mod presets;
    pub mod world;
}

pub use error::{Error, Result};
pub use math::{
    color::Color, matrix::Matrix, point::Point, transform::Transform, tuple::Tuple, vector::Vector,
};
pub use scene::{
    camera::Camera,
    light::PointLightSource,
    object::{Object, ObjectId, material::Material, primitive::shape::Shape},
    world::World,
};
