use crate::{
    math::{approx_eq::EPSILON, point::Point, vector::Vector},
    scene::object::Object,
};

use super::ray::Ray;

#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }

    /// Shading geometry at this intersection. When the eye is inside the
    /// object the normal is flipped to face it.
    pub fn computations(&self, ray: &Ray) -> IntersecComputations<'a> {
        let point = ray.position(self.time);
        let eye_v = -*ray.direction();
        let outward = self.object.normal_vector_at(point);

        let inside = outward.dot(eye_v) < 0.;
        let normal_v = if inside { -outward } else { outward };

        IntersecComputations {
            time: self.time,
            object: self.object,
            point,
            over_point: point + normal_v * EPSILON,
            eye_v,
            normal_v,
            inside,
        }
    }
}

/// Geometry at a hit, shared by every light when shading it.
#[derive(Debug, Clone, Copy)]
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    point: Point,
    /// `point` nudged along the normal, origin of shadow rays
    over_point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside: bool,
}

impl<'a> IntersecComputations<'a> {
    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn over_point(&self) -> Point {
        self.over_point
    }
    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }
    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }
    pub fn inside(&self) -> bool {
        self.inside
    }
}

/// Intersections of one ray, sorted by time, with the hit index cached.
#[derive(Debug, Clone)]
pub struct IntersectionCollection<'a> {
    ray: Ray,
    vec: Vec<Intersection<'a>>,
    hit_index: Option<usize>,
}

impl<'a> IntersectionCollection<'a> {
    pub fn new(ray: Ray, mut vec: Vec<Intersection<'a>>) -> Self {
        vec.sort_unstable_by(|i1, i2| i1.time().total_cmp(&i2.time()));
        let mut res = Self {
            ray,
            vec,
            hit_index: None,
        };
        res.update_hit();
        res
    }

    pub fn from_times_and_obj(ray: Ray, times: Vec<f64>, object: &'a Object) -> Self {
        Self::new(
            ray,
            times
                .into_iter()
                .map(|time| Intersection::new(time, object))
                .collect(),
        )
    }

    pub fn empty(ray: Ray) -> Self {
        Self::new(ray, Vec::new())
    }

    fn update_hit(&mut self) {
        self.hit_index = self.vec.iter().position(|inter| inter.time() >= 0.);
    }

    /// Inserts keeping the time order.
    pub fn add(&mut self, intersection: Intersection<'a>) {
        let index = self
            .vec
            .partition_point(|inter| inter.time().total_cmp(&intersection.time()).is_le());
        self.vec.insert(index, intersection);
        self.update_hit();
    }

    /// Intersection with the smallest non-negative time.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.hit_index.map(|index| &self.vec[index])
    }

    pub fn hit_computations(&self) -> Option<IntersecComputations<'a>> {
        self.hit().map(|inter| inter.computations(&self.ray))
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    pub fn count(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn vec(&self) -> &[Intersection<'a>] {
        &self.vec
    }

    pub fn times_vec(&self) -> Vec<f64> {
        self.vec.iter().map(|inter| inter.time()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{approx_eq::ApproxEq, tuple::Tuple},
        scene::object::primitive::shape::Shape,
    };

    fn any_ray() -> Ray {
        Ray::new(Point::zero(), Vector::new(1., 0., 0.))
    }

    #[test]
    fn hit_is_smallest_non_negative_time() {
        let obj = Object::with_shape(Shape::Sphere);
        let cases: [(Vec<f64>, Option<f64>); 6] = [
            (vec![3., 0.5], Some(0.5)),
            (vec![2.5, -0.5], Some(2.5)),
            (vec![-4., -0.5], None),
            (vec![9., 6., -2., 3.5], Some(3.5)),
            (vec![1., 0.], Some(0.)),
            (vec![], None),
        ];

        for (times, expected) in cases {
            let collection = IntersectionCollection::from_times_and_obj(any_ray(), times, &obj);
            assert_eq!(collection.hit().map(Intersection::time), expected);
        }
    }

    #[test]
    fn collection_sorts_and_keeps_duplicates() {
        let obj = Object::with_shape(Shape::Sphere);
        let collection =
            IntersectionCollection::from_times_and_obj(any_ray(), vec![4., -2., 4., 0.25], &obj);

        assert_eq!(collection.times_vec(), vec![-2., 0.25, 4., 4.]);
        assert_eq!(collection.count(), 4);
    }

    #[test]
    fn add_keeps_order_and_updates_hit() {
        let obj = Object::with_shape(Shape::Plane);
        let mut collection = IntersectionCollection::empty(any_ray());
        assert!(collection.is_empty());

        collection.add(Intersection::new(-0.5, &obj));
        assert!(collection.hit().is_none());

        collection.add(Intersection::new(8., &obj));
        assert_eq!(collection.hit().map(Intersection::time), Some(8.));

        collection.add(Intersection::new(2., &obj));
        assert_eq!(collection.times_vec(), vec![-0.5, 2., 8.]);
        assert_eq!(collection.hit().map(Intersection::time), Some(2.));
    }

    #[test]
    fn computations_from_outside() {
        let ray = Ray::new(Point::new(0., -3., 0.), Vector::new(0., 1., 0.));
        let obj = Object::with_shape(Shape::Sphere);
        let comps = Intersection::new(2., &obj).computations(&ray);

        assert_eq!(comps.time(), 2.);
        assert_eq!(comps.object(), &obj);
        assert_approx_eq_low_prec!(comps.point(), Point::new(0., -1., 0.));
        assert_approx_eq_low_prec!(comps.eye_v(), Vector::new(0., -1., 0.));
        assert_approx_eq_low_prec!(comps.normal_v(), Vector::new(0., -1., 0.));
        assert!(!comps.inside());
        assert!(comps.over_point().y() < -1.);
    }

    #[test]
    fn computations_from_inside_flip_normal() {
        let obj = Object::with_shape(Shape::Sphere);
        let comps = Intersection::new(1., &obj).computations(&any_ray());

        assert!(comps.inside());
        assert_approx_eq_low_prec!(comps.point(), Point::new(1., 0., 0.));
        assert_approx_eq_low_prec!(comps.normal_v(), Vector::new(-1., 0., 0.));
        // nudged back into the sphere
        assert!(comps.over_point().x() < 1.);
    }

    #[test]
    fn over_point_sits_epsilon_along_normal() {
        let ray = Ray::new(Point::new(2., 2., 2.), Vector::new(-1., -1., -1.).normalize());
        let obj = Object::with_shape(Shape::Sphere);
        let comps = IntersectionCollection::new(ray, obj.intersect(&ray))
            .hit_computations()
            .unwrap();

        let offset = comps.over_point() - comps.point();
        assert!(offset.magnitude().approx_eq_epsilon(&EPSILON, 1e-9));
        assert!(offset.dot(comps.normal_v()) > 0.);
    }

    #[test]
    fn computations_on_plane() {
        let obj = Object::with_shape(Shape::Plane);
        let ray = Ray::new(Point::new(1., 4., 1.), Vector::new(0.6, -0.8, 0.));
        let comps = IntersectionCollection::new(ray, obj.intersect(&ray))
            .hit_computations()
            .unwrap();

        assert_approx_eq_low_prec!(comps.time(), 5.);
        assert_approx_eq_low_prec!(comps.point(), Point::new(4., 0., 1.));
        assert_approx_eq_low_prec!(comps.eye_v(), Vector::new(-0.6, 0.8, 0.));
        assert_approx_eq_low_prec!(comps.normal_v(), Vector::new(0., 1., 0.));
    }
}
