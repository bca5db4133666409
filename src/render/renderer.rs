use derive_builder::Builder;

use crate::{
    render::canvas::Canvas,
    scene::{camera::Camera, world::World},
};

pub(crate) fn progress_style(template: &str) -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::with_template(template)
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
}

#[derive(Debug, Clone, Builder)]
/// Renders a world through a camera, one parallel task per pixel.
pub struct Renderer {
    camera: Camera,
    world: World,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl Renderer {
    fn pixel_count(&self) -> u64 {
        self.camera.target_width() as u64 * self.camera.target_height() as u64
    }

    pub(crate) fn pixel_progress_bar(&self) -> Option<indicatif::ProgressBar> {
        if !self.use_progress_bar {
            return None;
        }
        let style = progress_style(
            "[{elapsed_precise}] {wide_bar:.cyan/blue} {human_pos}/{human_len} pixels, eta {eta}",
        );
        Some(indicatif::ProgressBar::new(self.pixel_count()).with_style(style))
    }

    /// Renders `world` instead of the owned one, keeping the camera.
    pub fn render_world(&self, world: &World, progressbar: Option<indicatif::ProgressBar>) -> Canvas {
        world.render_with_progress(&self.camera, progressbar)
    }

    pub fn render(&self) -> Canvas {
        let (width, height) = (self.camera.target_width(), self.camera.target_height());
        log::info!(
            "rendering {}x{} image of {} objects lit by {} lights",
            width,
            height,
            self.world.objects().len(),
            self.world.light_sources().len()
        );

        let started = std::time::Instant::now();
        let image = self.render_world(&self.world, self.pixel_progress_bar());
        let elapsed = started.elapsed();

        log::info!(
            "rendered in {:.2?}, {:.0} primary rays/s",
            elapsed,
            self.pixel_count() as f64 / elapsed.as_secs_f64()
        );
        image
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn use_progress_bar(&self) -> bool {
        self.use_progress_bar
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple, vector::Vector},
        scene::presets,
    };

    fn default_renderer() -> Renderer {
        let camera = Camera::with_transformation(
            11,
            11,
            FRAC_PI_2,
            Matrix::view_transformation(
                Point::new(0., 0., -5.),
                Point::zero(),
                Vector::new(0., 1., 0.),
            ),
        )
        .unwrap();

        RendererBuilder::default()
            .camera(camera)
            .world(presets::default_world().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn progress_bar_is_off_by_default() {
        let renderer = default_renderer();
        assert!(!renderer.use_progress_bar());
        assert!(renderer.pixel_progress_bar().is_none());
    }

    #[test]
    fn builder_requires_camera_and_world() {
        assert!(RendererBuilder::default().build().is_err());
    }

    #[test]
    fn render_default_world() {
        let canvas = default_renderer().render();

        assert_eq!(canvas.width(), 11);
        assert_eq!(canvas.height(), 11);
        assert_approx_eq_low_prec!(canvas.pixel_at(5, 5), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn render_with_progress_bar_matches_plain_render() {
        let mut renderer = default_renderer();
        let plain = renderer.render();
        renderer.use_progress_bar = true;
        let bar = renderer.pixel_progress_bar().unwrap();
        bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());

        let with_bar = renderer.render_world(renderer.world(), Some(bar));
        assert_eq!(plain.as_u8_rgb(), with_bar.as_u8_rgb());
    }
}
