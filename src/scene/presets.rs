//! Ready-made scenes for the command line renderer and for tests.

use std::fmt::Display;

use clap::ValueEnum;

use crate::{
    error::Result,
    math::{
        color::Color, matrix::Matrix, point::Point, transform::Transform, tuple::Tuple,
        vector::Vector,
    },
    scene::{
        camera::Camera,
        light::PointLightSource,
        object::{Object, material::Material, primitive::shape::Shape},
        world::World,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Two nested spheres and one light
    Default,
    /// Floor with three spheres
    ThreeSpheres,
    /// Three spheres lit by two lights
    TwoLights,
}

impl Preset {
    pub fn world(&self) -> Result<World> {
        match self {
            Preset::Default => default_world(),
            Preset::ThreeSpheres => three_spheres(),
            Preset::TwoLights => two_lights(),
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Default => write!(f, "default"),
            Preset::ThreeSpheres => write!(f, "three-spheres"),
            Preset::TwoLights => write!(f, "two-lights"),
        }
    }
}

/// Unit sphere enclosing a smaller one, lit from the upper left.
pub fn default_world() -> Result<World> {
    let outer = Object::with_shape_material(
        Shape::Sphere,
        Material {
            color: Color::new(0.8, 1.0, 0.6),
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.2,
            shininess: 200.,
        },
    )?;
    let inner = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(0.5))?;

    let lights = vec![PointLightSource::new(
        Point::new(-10., 10., -10.),
        Color::white(),
    )];
    Ok(World::new(vec![outer, inner], lights))
}

fn three_spheres_objects() -> Result<Vec<Object>> {
    let floor = Object::with_shape_material(
        Shape::Plane,
        Material {
            specular: 0.,
            ..Material::with_color(Color::new(1., 0.9, 0.9))
        },
    )?;

    let glossy = Material {
        color: Color::new(0.1, 1., 0.5),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    };

    let middle_sphere = Object::new(
        Shape::Sphere,
        Matrix::translation(-0.5, 1., 0.5),
        glossy,
    )?;

    let right_sphere = Object::new(
        Shape::Sphere,
        Matrix::scaling_uniform(0.5)
            .translate(1.5, 0.5, -0.5)
            .transformed(),
        Material {
            color: Color::new(0.5, 1., 0.1),
            ..glossy
        },
    )?;

    let left_sphere = Object::new(
        Shape::Sphere,
        Matrix::scaling_uniform(0.33)
            .translate(-1.5, 0.33, -0.75)
            .transformed(),
        Material::matte(Color::new(1., 0.8, 0.1)),
    )?;

    Ok(vec![floor, middle_sphere, right_sphere, left_sphere])
}

pub fn three_spheres() -> Result<World> {
    let lights = vec![PointLightSource::new(
        Point::new(-10., 10., -10.),
        Color::white(),
    )];
    Ok(World::new(three_spheres_objects()?, lights))
}

/// Same objects as [`three_spheres`] with the light split in two.
pub fn two_lights() -> Result<World> {
    let half = Color::new(0.5, 0.5, 0.5);
    let lights = vec![
        PointLightSource::new(Point::new(-10., 10., -10.), half),
        PointLightSource::new(Point::new(-7., 10., -10.), half),
    ];
    Ok(World::new(three_spheres_objects()?, lights))
}

/// Camera slightly above the floor looking at the middle sphere.
pub fn default_camera(width: usize, height: usize, field_of_view: f64) -> Result<Camera> {
    let from = Point::new(0., 1.5, -5.);
    let to = Point::new(0., 1., 0.);
    let up_v = Vector::new(0., 1., 0.);

    Camera::with_transformation(
        width,
        height,
        field_of_view,
        Matrix::view_transformation(from, to, up_v),
    )
}
