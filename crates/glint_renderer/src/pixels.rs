//! 8-bit pixel buffer handed to image encoders.

use crate::Color;
use glint_math::Interval;

/// Byte order of the three channels in each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    /// Blue first, as expected by raw-bits encoders on little-endian targets
    Bgr,
}

/// Row-major, top row first, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub order: ChannelOrder,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Quantize linear colors (row-major, top row first).
    pub fn from_colors(width: u32, height: u32, colors: &[Color], order: ChannelOrder) -> Self {
        let mut data = Vec::with_capacity(colors.len() * 3);
        for color in colors {
            let [r, g, b] = color_to_rgb8(*color);
            match order {
                ChannelOrder::Rgb => data.extend_from_slice(&[r, g, b]),
                ChannelOrder::Bgr => data.extend_from_slice(&[b, g, r]),
            }
        }

        Self {
            width,
            height,
            order,
            data,
        }
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    /// Channel bytes for pixel (x, y), in buffer order.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Convert a linear color to 8-bit RGB: `round(clamp(c, 0, 1) * 255)`.
///
/// No gamma correction is applied.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb8_rounds_and_clamps() {
        assert_eq!(color_to_rgb8(Color::new(0.0, 0.5, 1.0)), [0, 128, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 2.0, 0.998)), [0, 255, 254]);
        assert_eq!(color_to_rgb8(Color::new(0.001, 0.003, 0.0)), [0, 1, 0]);
    }

    #[test]
    fn test_channel_order() {
        let colors = [Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)];

        let rgb = PixelBuffer::from_colors(2, 1, &colors, ChannelOrder::Rgb);
        assert_eq!(rgb.data, vec![255, 0, 0, 0, 0, 255]);

        let bgr = PixelBuffer::from_colors(2, 1, &colors, ChannelOrder::Bgr);
        assert_eq!(bgr.pixel(0, 0), [0, 0, 255]);
        assert_eq!(bgr.pixel(1, 0), [255, 0, 0]);
        assert_eq!(bgr.stride(), 6);
    }

    #[test]
    fn test_row_major_top_first() {
        let colors = [Color::ZERO, Color::ZERO, Color::ONE, Color::ZERO];
        let buffer = PixelBuffer::from_colors(2, 2, &colors, ChannelOrder::Rgb);

        assert_eq!(buffer.pixel(0, 1), [255, 255, 255]);
        assert_eq!(buffer.into_raw().len(), 12);
    }
}
