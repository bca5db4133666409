use crate::{
    math::{color::Color, matrix::Matrix, point::Point, transform::Transform, vector::Vector},
    scene::object::material::Material,
};

/// Zero-size light with infinite reach. Casts hard shadows only.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PointLightSource {
    position: Point,
    intensity: Color,
}

impl Default for PointLightSource {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            intensity: Color::white(),
        }
    }
}

impl Transform for PointLightSource {
    fn transform(&mut self, matrix: &Matrix) {
        self.position.transform(matrix);
    }
}

impl PointLightSource {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Phong shading of `point` as seen along `eye_v`. A point in shadow
    /// keeps only the ambient term. The result is not clamped.
    pub fn color_of_illuminated_point(
        &self,
        material: &Material,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
        in_shadow: bool,
    ) -> Color {
        let surface = material.color * self.intensity;
        let ambient = surface * material.ambient;
        if in_shadow {
            return ambient;
        }

        let light_v = (self.position - point).normalize();
        let cos_incidence = light_v.dot(normal_v);
        // light arrives from behind the surface
        if cos_incidence <= 0. {
            return ambient;
        }
        let diffuse = surface * (material.diffuse * cos_incidence);

        let cos_reflection = (-light_v).reflect(normal_v).dot(eye_v);
        if cos_reflection <= 0. {
            return ambient + diffuse;
        }
        let specular = self.intensity * (material.specular * cos_reflection.powf(material.shininess));

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::{assert_approx_eq_low_prec, math::tuple::Tuple};

    fn up() -> Vector {
        Vector::new(0., 1., 0.)
    }

    // orange, mostly diffuse
    fn clay() -> Material {
        Material::new(Color::new(1., 0.5, 0.25), 0.2, 0.6, 0.3, 10.).unwrap()
    }

    fn shade(light: PointLightSource, eye_v: Vector, in_shadow: bool) -> Color {
        light.color_of_illuminated_point(&clay(), Point::zero(), eye_v, up(), in_shadow)
    }

    fn white_light_at(x: f64, y: f64, z: f64) -> PointLightSource {
        PointLightSource::new(Point::new(x, y, z), Color::white())
    }

    #[test]
    fn light_and_eye_along_normal() {
        assert_approx_eq_low_prec!(
            shade(white_light_at(0., 4., 0.), up(), false),
            Color::new(1.1, 0.7, 0.5)
        );
    }

    #[test]
    fn shadow_leaves_only_ambient() {
        assert_approx_eq_low_prec!(
            shade(white_light_at(0., 4., 0.), up(), true),
            Color::new(0.2, 0.1, 0.05)
        );
    }

    #[test]
    fn oblique_light_halves_diffuse() {
        let light = white_light_at(3_f64.sqrt(), 1., 0.);

        // reflection is 60 degrees off the eye, so specular is 0.3 * 0.5^10
        let glint = 0.3 * 0.5_f64.powi(10);
        assert_approx_eq_low_prec!(
            shade(light, up(), false),
            Color::new(0.5 + glint, 0.25 + glint, 0.125 + glint)
        );
    }

    #[test]
    fn eye_on_mirror_direction_sees_full_specular() {
        let light = white_light_at(3_f64.sqrt(), 1., 0.);
        let eye_v = Vector::new(-3_f64.sqrt() / 2., 0.5, 0.);

        assert_approx_eq_low_prec!(shade(light, eye_v, false), Color::new(0.8, 0.55, 0.425));
    }

    #[test]
    fn light_below_or_level_with_surface_is_ambient_only() {
        for light in [white_light_at(0., -3., 0.), white_light_at(5., 0., 0.)] {
            assert_approx_eq_low_prec!(shade(light, up(), false), Color::new(0.2, 0.1, 0.05));
        }
    }

    #[test]
    fn bright_light_exceeds_one() {
        let light = PointLightSource::new(Point::new(0., 4., 0.), Color::new(3., 3., 3.));
        assert_approx_eq_low_prec!(shade(light, up(), false), Color::new(3.3, 2.1, 1.5));
    }

    #[test]
    fn cyan_light_drops_red_channel() {
        let light = PointLightSource::new(Point::new(0., 4., 0.), Color::new(0., 1., 1.));
        assert_approx_eq_low_prec!(shade(light, up(), false), Color::new(0., 0.7, 0.5));
    }

    #[test]
    fn light_moves_with_transform() {
        let mut light = white_light_at(2., 0., 0.);
        light.rotate_y(FRAC_PI_2).translate(0., 1., 0.);

        assert_approx_eq_low_prec!(light.position(), Point::new(0., 1., -2.));
        assert_eq!(light.intensity(), Color::white());
    }
}
