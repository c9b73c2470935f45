//! The seconds worm: four pixels running once around the panel per minute.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics::prelude::Point;
use embedded_graphics::Pixel;

/// Milliseconds from the start of a minute to its last representable instant.
const LAST_MILLISECOND: u64 = 59 * 1000 + 999;

/// Colors from the lead pixel to the last trailing one.
pub const SHADES: [Rgb888; 4] = [
    crate::color::LIGHT_SKY_BLUE,
    crate::color::CORNFLOWER_BLUE,
    crate::color::BLUE,
    crate::color::DARK_BLUE,
];

/// Closed loop along the panel border.
///
/// Starts right of the diamond at (32, 2), runs clockwise and ends left of it at (31, 2).
/// Every leg emits both of its end points, so corner cells appear twice in a row.
#[derive(Debug, Clone)]
pub struct WormPath {
    points: Vec<Point>,
}

impl Default for WormPath {
    fn default() -> Self {
        Self::new()
    }
}

impl WormPath {
    pub fn new() -> Self {
        let points = (32..=60)
            .map(|x| Point::new(x, 2))
            .chain((2..=62).map(|y| Point::new(60, y)))
            .chain((3..=60).rev().map(|x| Point::new(x, 62)))
            .chain((2..=62).rev().map(|y| Point::new(3, y)))
            .chain((3..=31).map(|x| Point::new(x, 2)))
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Index of the lead pixel, proportional to the time elapsed in the current minute.
    pub fn lead_index(&self, second: u8, millisecond: u16) -> usize {
        let elapsed = (u64::from(second) * 1000 + u64::from(millisecond)).min(LAST_MILLISECOND);
        let last = self.len() as u64 - 1;
        ((2 * elapsed * last + LAST_MILLISECOND) / (2 * LAST_MILLISECOND)) as usize
    }

    pub fn trail(&self, second: u8, millisecond: u16) -> Trail {
        Trail::behind(self.lead_index(second, millisecond), self.len())
    }

    pub fn draw<D>(&self, trail: Trail, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pixels = trail
            .indices()
            .zip(SHADES)
            .map(|(index, color)| Pixel(self.point(index), color));
        target.draw_iter(pixels)
    }
}

/// Path indices of the lead pixel and the three pixels following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trail {
    pub lead: usize,
    pub trailing: [usize; 3],
}

impl Trail {
    /// Trailing indices wrap to the end of a path of `len` points when `lead < 3`.
    pub fn behind(lead: usize, len: usize) -> Self {
        Self {
            lead,
            trailing: std::array::from_fn(|k| (lead + len - (k + 1)) % len),
        }
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> {
        std::iter::once(self.lead).chain(self.trailing)
    }
}
