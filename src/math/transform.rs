use super::{matrix::Matrix, point::Point, vector::Vector};

/// Anything that can be moved around by a 4x4 matrix.
///
/// Chained calls compose left to right: `p.scale(..).translate(..)` scales
/// first and translates the scaled result.
pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix);

    /// Transformed copy; `self` is left as is.
    fn transform_new(&self, matrix: &Matrix) -> Self {
        let mut moved = self.clone();
        moved.transform(matrix);
        moved
    }

    /// Ends a chain of `&mut Self` calls with an owned value.
    fn transformed(self) -> Self {
        self
    }

    fn transform_chain(&mut self, matrix: &Matrix) -> &mut Self {
        self.transform(matrix);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn sheare(&mut self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> &mut Self {
        self.transform_chain(&Matrix::shearing(xy, xz, yx, yz, zx, zy))
    }
}

impl Transform for Point {
    fn transform(&mut self, matrix: &Matrix) {
        *self = matrix * *self;
    }
}

impl Transform for Vector {
    fn transform(&mut self, matrix: &Matrix) {
        *self = matrix * *self;
    }
}
