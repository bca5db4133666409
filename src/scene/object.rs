pub mod material;
pub mod primitive {
    pub mod plane;
    pub mod shape;
    pub mod sphere;
}

use material::Material;
use primitive::shape::Shape;

use crate::{
    error::Result,
    math::{matrix::Matrix, point::Point, vector::Vector},
    render::{intersection::Intersection, ray::Ray},
};

/// Stable handle of an object inside a [`World`](crate::scene::world::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Handle of an object that was never added to a world.
    pub const DETACHED: ObjectId = ObjectId(usize::MAX);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> Option<usize> {
        (!self.is_detached()).then_some(self.0)
    }

    pub fn is_detached(&self) -> bool {
        *self == Self::DETACHED
    }
}

/// A shape placed in the world with a material.
///
/// The inverse of the transformation is cached, so intersecting and computing
/// normals never inverts a matrix. Objects compare equal by handle; a detached
/// object is only equal to itself.
#[derive(Debug, Clone)]
pub struct Object {
    id: ObjectId,
    shape: Shape,
    material: Material,
    transformation: Matrix,
    transformation_inverse: Matrix,
}

impl Object {
    pub fn new(shape: Shape, transformation: Matrix, material: Material) -> Result<Self> {
        material.validate()?;
        let transformation_inverse = transformation.inverse()?;
        Ok(Self {
            id: ObjectId::DETACHED,
            shape,
            material,
            transformation,
            transformation_inverse,
        })
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self {
            id: ObjectId::DETACHED,
            shape,
            material: Material::default(),
            transformation: Matrix::identity(),
            transformation_inverse: Matrix::identity(),
        }
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix) -> Result<Self> {
        Self::new(shape, transformation, Material::default())
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Result<Self> {
        Self::new(shape, Matrix::identity(), material)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) -> Result<()> {
        material.validate()?;
        self.material = material;
        Ok(())
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix {
        &self.transformation_inverse
    }

    /// Replaces the transformation. A singular matrix is rejected and the
    /// object is left unchanged.
    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        let inverse = transformation.inverse().inspect_err(|err| {
            log::debug!("rejected transformation of object {:?}: {}", self.id, err);
        })?;
        self.transformation = transformation;
        self.transformation_inverse = inverse;
        Ok(())
    }

    pub fn intersection_times(&self, world_ray: &Ray) -> Vec<f64> {
        let object_ray = Ray::new(
            &self.transformation_inverse * *world_ray.origin(),
            &self.transformation_inverse * *world_ray.direction(),
        );
        let mut times = Vec::with_capacity(2);
        self.shape.local_intersect(&object_ray, &mut times);
        times
    }

    pub fn intersect(&self, world_ray: &Ray) -> Vec<Intersection<'_>> {
        self.intersection_times(world_ray)
            .into_iter()
            .map(|time| Intersection::new(time, self))
            .collect()
    }

    pub fn normal_vector_at(&self, world_point: Point) -> Vector {
        let object_point = &self.transformation_inverse * world_point;
        let object_normal = self.shape.local_normal_at(object_point);
        // inverse transpose keeps the normal perpendicular under non-uniform scaling,
        // and a Vector result drops the translation part
        let world_normal: Vector = self.transformation_inverse.mul_transposed(object_normal);
        world_normal.normalize()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.id.is_detached() || other.id.is_detached() {
            return std::ptr::eq(self, other);
        }
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        error::Error,
        math::{color::Color, tuple::Tuple},
    };

    #[test]
    fn identity_is_default_transformation() {
        let obj = Object::with_shape(Shape::Sphere);
        assert_eq!(*obj.transformation(), Matrix::identity());
        assert_eq!(*obj.material(), Material::default());
        assert!(obj.id().is_detached());
    }

    #[test]
    fn singular_transformation_is_rejected() {
        assert!(matches!(
            Object::with_transformation(Shape::Sphere, Matrix::scaling(0., 1., 1.)),
            Err(Error::SingularMatrix)
        ));

        let mut obj = Object::with_shape(Shape::Plane);
        let translation = Matrix::translation(1., 2., 3.);
        obj.set_transformation(translation).unwrap();
        assert!(obj.set_transformation(Matrix::empty()).is_err());
        assert_eq!(*obj.transformation(), translation);
    }

    #[test]
    fn invalid_material_is_rejected() {
        let material = Material {
            ambient: -1.,
            ..Default::default()
        };
        assert!(matches!(
            Object::with_shape_material(Shape::Sphere, material),
            Err(Error::InvalidMaterial { field: "ambient", .. })
        ));

        let mut obj = Object::with_shape(Shape::Sphere);
        assert!(obj.set_material(material).is_err());
        assert!(obj.set_material(Material::with_color(Color::red())).is_ok());
        assert_eq!(obj.material().color, Color::red());
    }

    #[test]
    fn cached_inverse_round_trips_points() {
        let obj = Object::with_transformation(
            Shape::Sphere,
            Matrix::chain([
                Matrix::scaling(2., 1., 0.5),
                Matrix::rotation_y_frac_pi(0.3),
                Matrix::translation(4., -1., 2.),
            ]),
        )
        .unwrap();
        let p = Point::new(-3., 0.25, 8.);

        assert_approx_eq_low_prec!(obj.transformation_inverse() * (obj.transformation() * p), p);
    }

    #[test]
    fn equality_is_by_handle() {
        let mut a = Object::with_shape(Shape::Sphere);
        let mut b = Object::with_shape(Shape::Sphere);
        assert_ne!(a, b);
        assert_ne!(a, a.clone());

        a.set_id(ObjectId::new(3));
        b.set_id(ObjectId::new(3));
        assert_eq!(a, b);

        b.set_id(ObjectId::new(4));
        assert_ne!(a, b);
    }
}
