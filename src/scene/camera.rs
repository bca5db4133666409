use crate::{
    error::Result,
    math::{matrix::Matrix, point::Point, tuple::Tuple},
    render::{canvas::Canvas, ray::Ray},
};

/// Pinhole camera. In its own space it sits at the origin looking toward -z,
/// with the canvas on the z = -1 plane, so +x ends up on the left of the image.
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    field_of_view: f64,

    transformation: Matrix,
    inverse_transformation: Matrix,
    // camera origin mapped to world space, shared by every primary ray
    world_origin: Point,

    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

/// Half extents of the canvas plane; the longer side spans the field of view.
fn half_extents(target_width: usize, target_height: usize, field_of_view: f64) -> (f64, f64) {
    let half_view = (field_of_view / 2.).tan();
    let aspect = target_width as f64 / target_height as f64;

    if aspect >= 1. {
        (half_view, half_view / aspect)
    } else {
        (half_view * aspect, half_view)
    }
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Self {
        let (half_width, half_height) = half_extents(target_width, target_height, field_of_view);

        Self {
            target_width,
            target_height,
            field_of_view,

            transformation: Matrix::identity(),
            inverse_transformation: Matrix::identity(),
            world_origin: Point::zero(),

            pixel_size: 2. * half_width / target_width as f64,
            half_width,
            half_height,
        }
    }

    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Result<Self> {
        let mut camera = Self::new(target_width, target_height, field_of_view);
        camera.set_transformation(transformation)?;
        Ok(camera)
    }

    /// Sets the world-to-camera transformation, usually built with
    /// [`Matrix::view_transformation`]. A singular matrix leaves the camera untouched.
    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        let inverse = transformation.inverse()?;
        self.transformation = transformation;
        self.inverse_transformation = inverse;
        self.world_origin = inverse * Point::zero();
        Ok(())
    }

    /// Ray from the camera through the center of pixel `(x, y)`.
    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Ray {
        let canvas_x = self.half_width - (x + 0.5) * self.pixel_size;
        let canvas_y = self.half_height - (y + 0.5) * self.pixel_size;

        let pixel = self.inverse_transformation * Point::new(canvas_x, canvas_y, -1.);
        Ray::new(self.world_origin, (pixel - self.world_origin).normalize())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn transformation(&self) -> Matrix {
        self.transformation
    }

    pub fn inverse_transformation(&self) -> Matrix {
        self.inverse_transformation
    }
}
