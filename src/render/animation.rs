use std::{io::Write, time::Duration};

use derive_builder::Builder;

use super::{
    canvas::Canvas,
    renderer::{Renderer, progress_style},
};
use crate::{
    error::Result,
    math::{matrix::Matrix, transform::Transform},
    scene::world::World,
};

/// Renders a sequence of frames, orbiting every light around the world
/// Y axis by a fixed step between consecutive frames.
#[derive(Clone, Debug, Builder)]
pub struct AnimationRenderer {
    renderer: Renderer,
    #[builder(default = "AnimationRenderer::DEFAULT_FRAME_COUNT")]
    frame_count: u32,
    /// Rotation between two frames as a fraction of PI
    #[builder(default = "AnimationRenderer::DEFAULT_ROTATION_STEP")]
    rotation_step: f64,
    /// Delay between frames in hundredths of a second
    #[builder(default = "AnimationRenderer::DEFAULT_FRAME_DELAY")]
    frame_delay: u16,
}

impl AnimationRenderer {
    pub const DEFAULT_FRAME_COUNT: u32 = 24;
    pub const DEFAULT_ROTATION_STEP: f64 = 1. / 12.;
    pub const DEFAULT_FRAME_DELAY: u16 = 8;

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    /// World of frame `index`, lights rotated by `index * rotation_step * PI`.
    pub fn frame_world(&self, index: u32) -> World {
        let rotation = Matrix::rotation_y_frac_pi(index as f64 * self.rotation_step);
        let mut world = self.renderer.world().clone();
        for light_source in world.light_sources_mut() {
            light_source.transform(&rotation);
        }
        world
    }

    fn frame_progress_bar(&self) -> Option<indicatif::ProgressBar> {
        if !self.renderer.use_progress_bar() {
            return None;
        }
        let bar = indicatif::ProgressBar::new(self.frame_count as u64).with_style(progress_style(
            "[{elapsed_precise}] {wide_bar:.cyan/blue} frame {human_pos} of {human_len}, eta {eta}",
        ));
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    }

    /// Renders the frames in order, handing each one to `encode_fun`.
    /// Stops at the first encoding error.
    pub fn render_animation<F>(&self, mut encode_fun: F) -> Result<()>
    where
        F: FnMut(Canvas) -> Result<()>,
    {
        log::info!(
            "rendering {} frames, rotating lights by {} PI per frame",
            self.frame_count,
            self.rotation_step
        );
        let frames_bar = self.frame_progress_bar();

        for index in 0..self.frame_count {
            let now = std::time::Instant::now();
            let world = self.frame_world(index);
            let image = self.renderer.render_world(&world, None);
            log::debug!("frame {} rendered in {:?}", index, now.elapsed());

            encode_fun(image)?;
            if let Some(bar) = &frames_bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = frames_bar {
            bar.finish();
        }
        Ok(())
    }

    /// Encodes the animation as a looping gif.
    pub fn render_gif<W: Write>(&self, writer: W) -> Result<()> {
        let camera = self.renderer.camera();
        let (width, height) = Canvas::gif_dimensions(camera.target_width(), camera.target_height())?;

        let mut encoder = gif::Encoder::new(writer, width, height, &[])?;
        encoder.set_repeat(gif::Repeat::Infinite)?;

        self.render_animation(|image| {
            let mut frame = image.to_gif_frame()?;
            frame.delay = self.frame_delay;
            encoder.write_frame(&frame)?;
            Ok(())
        })?;
        encoder.into_inner()?.flush()?;
        Ok(())
    }
}
