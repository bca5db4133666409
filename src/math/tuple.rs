use crate::error::{Error, Result};

/// Homogeneous coordinate. `w` is fixed by the implementing type:
/// 1 for points, 0 for vectors.
pub trait Tuple: Sized {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;

    /// Builds the tuple from a raw homogeneous quadruple,
    /// rejecting a `w` that does not belong to `Self`.
    fn from_homogeneous(x: f64, y: f64, z: f64, w: f64) -> Result<Self> {
        let tuple = Self::new(x, y, z);
        if tuple.w() != w {
            return Err(Error::InvalidRay {
                reason: format!("expected w = {}, found w = {}", tuple.w(), w),
            });
        }
        Ok(tuple)
    }

    fn to_homogeneous(&self) -> [f64; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }
}
