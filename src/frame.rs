use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::OriginDimensions;
use embedded_graphics::prelude::Size;

pub const WIDTH: usize = 64;

pub const HEIGHT: usize = 64;

/// One complete picture of the panel, row-major.
///
/// Frames are write-only for the compositor; only sinks read them back out.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    cells: [[Rgb888; WIDTH]; HEIGHT],
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            cells: [[crate::color::BLACK; WIDTH]; HEIGHT],
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl Frame {
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Rgb888 {
        self.cells[y][x]
    }

    /// All cells, row by row, top-left first.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb888> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb888; WIDTH]> + '_ {
        self.cells.iter()
    }

    fn is_valid_pixel(pixel: &embedded_graphics::Pixel<Rgb888>) -> bool {
        pixel.0.x >= 0
            && (pixel.0.x as usize) < WIDTH
            && pixel.0.y >= 0
            && (pixel.0.y as usize) < HEIGHT
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl embedded_graphics::prelude::DrawTarget for Frame {
    type Color = Rgb888;

    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = embedded_graphics::Pixel<Self::Color>>,
    {
        for pixel in pixels.into_iter().filter(Self::is_valid_pixel) {
            self.cells[pixel.0.y as usize][pixel.0.x as usize] = pixel.1;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for row in self.cells.iter_mut() {
            row.fill(color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::DrawTarget;
    use embedded_graphics::prelude::Point;
    use embedded_graphics::Pixel;

    use super::*;

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut frame = Frame::default();
        frame
            .draw_iter([
                Pixel(Point::new(-1, 0), crate::color::WHITE),
                Pixel(Point::new(64, 3), crate::color::WHITE),
                Pixel(Point::new(2, 64), crate::color::WHITE),
                Pixel(Point::new(63, 63), crate::color::RED),
            ])
            .unwrap();

        assert_eq!(frame.get(63, 63), crate::color::RED);
        assert_eq!(
            frame.pixels().filter(|c| *c != crate::color::BLACK).count(),
            1
        );
    }

    #[test]
    fn test_clear_overwrites_everything() {
        let mut frame = Frame::default();
        frame
            .draw_iter([Pixel(Point::new(10, 20), crate::color::GREEN)])
            .unwrap();
        frame.clear(crate::color::BLUE).unwrap();
        assert!(frame.pixels().all(|c| c == crate::color::BLUE));
        assert_eq!(frame.pixels().count(), WIDTH * HEIGHT);
    }
}
