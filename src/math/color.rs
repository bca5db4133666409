use std::{array, ops};

use super::approx_eq::ApproxEq;

/// Linear RGB triple. Channels are unbounded; clamping happens
/// only when the color is encoded.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    channels: [f64; 3],
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            channels: [r, g, b],
        }
    }
    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }
    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn r(&self) -> f64 {
        self.channels[0]
    }
    pub fn g(&self) -> f64 {
        self.channels[1]
    }
    pub fn b(&self) -> f64 {
        self.channels[2]
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            channels: self.channels.map(f),
        }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            channels: array::from_fn(|i| f(self.channels[i], rhs.channels[i])),
        }
    }

    /// Channels clamped to [0, 1] and scaled to 8 bits.
    pub fn as_scaled_values(&self) -> [u8; 3] {
        self.channels
            .map(|channel| (channel.clamp(0., 1.) * 255.).round() as u8)
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.channels
            .iter()
            .zip(other.channels.iter())
            .all(|(lhs, rhs)| lhs.approx_eq_epsilon(rhs, epsilon))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Hadamard product, used to filter light through a surface color.
impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|a| a * rhs)
    }
}

impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|a| a / rhs)
    }
}

impl std::iter::Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Color::black(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accessors() {
        let c = Color::new(0.25, -1., 3.5);
        assert_eq!((c.r(), c.g(), c.b()), (0.25, -1., 3.5));
    }

    #[test]
    fn arithmetic_is_per_channel() {
        let light = Color::new(1.5, 0.5, 0.25);
        let surface = Color::new(0.2, 1., 0.8);

        assert_eq!(light + surface, Color::new(1.7, 1.5, 1.05));
        assert_eq!(light - surface, Color::new(1.3, -0.5, -0.55));
        assert_eq!(light * surface, Color::new(0.3, 0.5, 0.2));
        assert_eq!(light * 4., Color::new(6., 2., 1.));
        assert_eq!(light / 0.5, Color::new(3., 1., 0.5));
    }

    #[test]
    fn filtering_white_light_keeps_surface_color() {
        let surface = Color::new(0.8, 1., 0.6);
        assert_eq!(Color::white() * surface, surface);
        assert_eq!(Color::black() * surface, Color::black());
    }

    #[test]
    fn sum_of_light_contributions() {
        let total: Color = [Color::new(0.1, 0.2, 0.3); 3].into_iter().sum();
        assert_eq!(total, Color::new(0.3, 0.6, 0.9));
        assert_eq!(std::iter::empty::<Color>().sum::<Color>(), Color::black());
    }

    #[test]
    fn scaled_values_are_clamped() {
        assert_eq!(Color::new(1.5, 0.5, -0.5).as_scaled_values(), [255, 128, 0]);
        assert_eq!(Color::new(0.2, 0.8, 1.).as_scaled_values(), [51, 204, 255]);
    }
}
