use rayon::prelude::*;

use crate::{
    math::{color::Color, point::Point},
    render::{
        canvas::Canvas,
        intersection::{IntersecComputations, Intersection, IntersectionCollection},
        ray::Ray,
    },
    scene::{
        camera::Camera,
        light::PointLightSource,
        object::{Object, ObjectId},
    },
};

/// Objects and lights of a scene. Read-only while rendering.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<Object>,
    light_sources: Vec<PointLightSource>,
}

impl World {
    /// Below this many objects a ray is tested against them sequentially.
    pub const PARALLEL_INTERSECT_THRESHOLD: usize = 64;

    pub fn new(objects: Vec<Object>, light_sources: Vec<PointLightSource>) -> Self {
        let mut world = Self {
            objects: Vec::with_capacity(objects.len()),
            light_sources,
        };
        for obj in objects {
            world.add_obj(obj);
        }
        world
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds the object and returns the handle it was given.
    pub fn add_obj(&mut self, mut obj: Object) -> ObjectId {
        let id = ObjectId::new(self.objects.len());
        obj.set_id(id);
        self.objects.push(obj);
        id
    }

    pub fn add_light(&mut self, light_source: PointLightSource) {
        self.light_sources.push(light_source);
    }

    pub fn set_light_sources(&mut self, light_sources: Vec<PointLightSource>) {
        self.light_sources = light_sources;
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        id.index().and_then(|index| self.objects.get(index))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        id.index().and_then(|index| self.objects.get_mut(index))
    }

    pub fn light_sources(&self) -> &[PointLightSource] {
        &self.light_sources
    }

    pub fn light_sources_mut(&mut self) -> &mut [PointLightSource] {
        &mut self.light_sources
    }

    fn collect_intersections(&self, ray: &Ray, parallel: bool) -> Vec<Intersection<'_>> {
        if parallel {
            self.objects
                .par_iter()
                .flat_map_iter(|obj| obj.intersect(ray))
                .collect()
        } else {
            self.objects
                .iter()
                .flat_map(|obj| obj.intersect(ray))
                .collect()
        }
    }

    pub fn intersect(&self, ray: Ray) -> IntersectionCollection<'_> {
        let parallel = self.objects.len() >= Self::PARALLEL_INTERSECT_THRESHOLD;
        IntersectionCollection::new(ray, self.collect_intersections(&ray, parallel))
    }

    /// True when the nearest non-negative hit from `point` toward the light
    /// lies strictly between them. A hit at `t = 0` is the surface the point
    /// sits on and does not count.
    pub fn is_point_shadowed(&self, light_source: &PointLightSource, point: Point) -> bool {
        let to_light = light_source.position() - point;
        let distance = to_light.magnitude();
        let shadow_ray = Ray::new(point, to_light.normalize());

        self.intersect(shadow_ray)
            .hit()
            .is_some_and(|hit| hit.time() > 0. && hit.time() < distance)
    }

    /// True when the point is hidden from at least one light.
    pub fn is_shadowed(&self, point: Point) -> bool {
        self.light_sources
            .iter()
            .any(|light_source| self.is_point_shadowed(light_source, point))
    }

    /// Sum of every light's Phong contribution, each with its own shadow test.
    pub fn shade_hit(&self, comps: &IntersecComputations) -> Color {
        let material = comps.object().material();
        let point = comps.over_point();

        self.light_sources
            .iter()
            .map(|light| {
                let shadowed = self.is_point_shadowed(light, point);
                light.color_of_illuminated_point(
                    material,
                    point,
                    comps.eye_v(),
                    comps.normal_v(),
                    shadowed,
                )
            })
            .sum()
    }

    pub fn color_at(&self, ray: Ray) -> Color {
        self.intersect(ray)
            .hit_computations()
            .map_or(Color::black(), |hit_comps| self.shade_hit(&hit_comps))
    }

    pub fn render_with_progress(
        &self,
        camera: &Camera,
        progressbar: Option<indicatif::ProgressBar>,
    ) -> Canvas {
        let mut image = camera.canvas();
        image.set_each_pixel(
            |x: usize, y: usize| self.color_at(camera.ray_for_pixel(x as f64, y as f64)),
            progressbar,
        );
        image
    }

    pub fn render(&self, camera: &Camera) -> Canvas {
        self.render_with_progress(camera, None)
    }
}
