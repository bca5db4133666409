use crate::{
    error::{Error, Result},
    math::color::Color,
};

/// Phong reflectance parameters. Weights are expected in `[0, 1]` and the
/// shininess exponent is usually between 10 and 200; only negative or NaN
/// values are rejected, when the material is attached to an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Material {
    pub fn new(
        color: Color,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
    ) -> Result<Self> {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
        .validated()
    }

    /// Default weights with another surface color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Dull surface with a wide, faint highlight.
    pub fn matte(color: Color) -> Self {
        Self {
            specular: 0.05,
            shininess: 15.,
            ..Self::with_color(color)
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("shininess", self.shininess),
        ];
        match fields.into_iter().find(|&(_, value)| value.is_nan() || value < 0.) {
            Some((field, value)) => Err(Error::InvalidMaterial { field, value }),
            None => Ok(()),
        }
    }

    fn validated(self) -> Result<Self> {
        self.validate().map(|()| self)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_white_and_shiny() {
        let Material {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        } = Material::default();

        assert_eq!(color, Color::white());
        assert_eq!([ambient, diffuse, specular, shininess], [0.1, 0.9, 0.9, 200.]);
    }

    #[test]
    fn presets_only_change_what_they_name() {
        let tint = Color::new(0.3, 0.3, 0.9);
        let plain = Material::with_color(tint);
        let matte = Material::matte(tint);

        assert_eq!(plain.color, tint);
        assert_eq!(plain.diffuse, Material::default().diffuse);
        assert_eq!((matte.specular, matte.shininess), (0.05, 15.));
        assert_eq!(matte.ambient, plain.ambient);
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = Material::new(Color::white(), 0.2, -0.1, -3., 50.).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMaterial {
                field: "diffuse",
                ..
            }
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let m = Material {
            ambient: f64::NAN,
            ..Material::default()
        };
        assert!(matches!(
            m.validate(),
            Err(Error::InvalidMaterial {
                field: "ambient",
                ..
            })
        ));
    }

    #[test]
    fn zero_and_above_one_are_accepted() {
        assert!(Material::new(Color::black(), 0., 0., 0., 0.).is_ok());
        assert!(Material::new(Color::white(), 1.5, 2., 1., 1000.).is_ok());
    }
}
