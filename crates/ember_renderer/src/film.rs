//! Pixel buffer for finished renders.

use crate::Color;
use ember_math::Interval;

/// Row-major grid of display-ready colors.
///
/// Row 0 is the bottom scanline, matching the image-plane `t` axis of the
/// camera. Encoders walk the rows top-down via [`Film::rows_top_down`].
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[self.offset(row, col)]
    }

    /// Set the pixel at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, color: Color) {
        let offset = self.offset(row, col);
        self.pixels[offset] = color;
    }

    /// Scanlines from the top of the image to the bottom.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks(self.width.max(1) as usize).rev()
    }

    /// Packed 8-bit RGB, top scanline first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for row in self.rows_top_down() {
            for color in row {
                bytes.extend_from_slice(&to_rgb8(*color));
            }
        }
        bytes
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.width as usize + col as usize
    }
}

/// Scale a [0, 1] color to 8-bit channels, clamping out-of-range values.
pub(crate) fn to_rgb8(color: Color) -> [u8; 3] {
    let unit = Interval::new(0.0, 1.0);
    [
        (255.0 * unit.clamp(color.x)) as u8,
        (255.0 * unit.clamp(color.y)) as u8,
        (255.0 * unit.clamp(color.z)) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_get_set() {
        let mut film = Film::new(4, 3);
        film.set(2, 1, Color::new(0.1, 0.2, 0.3));

        assert_eq!(film.get(2, 1), Color::new(0.1, 0.2, 0.3));
        assert_eq!(film.get(0, 0), Color::ZERO);
        assert_eq!(film.width(), 4);
        assert_eq!(film.height(), 3);
    }

    #[test]
    fn test_rows_top_down_starts_at_last_row() {
        let mut film = Film::new(2, 3);
        film.set(2, 0, Color::ONE);
        film.set(0, 1, Color::X);

        let rows: Vec<_> = film.rows_top_down().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Color::ONE);
        assert_eq!(rows[2][1], Color::X);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(to_rgb8(Color::new(0.0, 1.0, 0.5)), [0, 255, 127]);
        assert_eq!(to_rgb8(Color::new(-0.5, 2.0, f32::NAN)), [0, 255, 0]);
    }

    #[test]
    fn test_film_to_rgb8_order() {
        let mut film = Film::new(1, 2);
        film.set(0, 0, Color::ZERO);
        film.set(1, 0, Color::ONE);

        assert_eq!(film.to_rgb8(), vec![255, 255, 255, 0, 0, 0]);
    }
}
