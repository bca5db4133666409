use std::{fmt, io::Write};

use clap::ValueEnum;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    math::color::Color,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
    Gif,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Row-major grid of linear RGB colors, `(0, 0)` being the top left pixel.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.cell(x, y)]
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        let cell = self.cell(x, y);
        self.pixels[cell] = color;
    }

    /// Computes every pixel in parallel. Each task writes only its own cell,
    /// so the result does not depend on scheduling.
    pub fn set_each_pixel<F>(&mut self, shade: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        let fill = |(cell, color): (usize, &mut Color)| {
            *color = shade(cell % width, cell / width);
        };

        let cells = self.pixels.par_iter_mut().enumerate();
        match progressbar {
            Some(bar) => cells.progress_with(bar).for_each(fill),
            None => cells.for_each(fill),
        }
    }

    /// Interleaved 8-bit RGB, three bytes per pixel.
    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(Color::as_scaled_values)
            .collect()
    }

    pub fn save_to_file<W: Write>(&self, writer: W, format: ImageFormat) -> Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(writer),
            ImageFormat::Png => self.save_to_png(writer),
            ImageFormat::Gif => self.save_to_gif(writer),
        }
    }
}

/// Plain text PPM
impl Canvas {
    const PPM_LINE_LIMIT: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// One image row per line, wrapped before a line would exceed the limit.
    fn ppm_data(&self) -> String {
        let mut data = String::new();
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for value in row.iter().flat_map(Color::as_scaled_values) {
                let token = value.to_string();
                if line_len > 0 && line_len + 1 + token.len() > Self::PPM_LINE_LIMIT {
                    data.push('\n');
                    line_len = 0;
                } else if line_len > 0 {
                    data.push(' ');
                    line_len += 1;
                }
                data.push_str(&token);
                line_len += token.len();
            }
            data.push('\n');
        }
        data
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_data()
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_ppm().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// PNG, 8-bit RGB
impl Canvas {
    pub fn save_to_png<W: Write>(&self, mut writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(&mut writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut image = encoder.write_header()?;
        image.write_image_data(&self.as_u8_rgb())?;
        image.finish()?;
        writer.flush()?;
        Ok(())
    }
}

/// GIF, a single frame or one frame of an animation
impl Canvas {
    pub(crate) fn gif_dimensions(width: usize, height: usize) -> Result<(u16, u16)> {
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(width), Ok(height)) => Ok((width, height)),
            _ => Err(Error::Encoding(format!(
                "gif dimensions are limited to {}x{}, got {}x{}",
                u16::MAX,
                u16::MAX,
                width,
                height
            ))),
        }
    }

    pub fn to_gif_frame(&self) -> Result<gif::Frame<'static>> {
        let (width, height) = Self::gif_dimensions(self.width, self.height)?;
        Ok(gif::Frame::from_rgb(width, height, &self.as_u8_rgb()))
    }

    pub fn save_to_gif<W: Write>(&self, writer: W) -> Result<()> {
        let (width, height) = Self::gif_dimensions(self.width, self.height)?;
        let mut encoder = gif::Encoder::new(writer, width, height, &[])?;
        encoder.write_frame(&self.to_gif_frame()?)?;
        // writes the trailer
        encoder.into_inner()?.flush()?;
        Ok(())
    }
}
