//! Seconds diamond: a rhombus filling bottom-up once per minute, with two columns of
//! "dripping" pixels above the fill level.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Primitive;
use embedded_graphics::primitives::Line;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::Drawable;
use embedded_graphics::Pixel;

/// Number of fill rows inside the outline.
pub const ROWS: u8 = 13;

/// Half-width of each fill row, bottom row first.
const HALF_WIDTH: [i32; ROWS as usize] = [0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1, 0];

const LEFT: i32 = 31;

const TOP: i32 = 3;

const RADIUS: i32 = 7;

/// Number of rows to fill at `second`, i.e. `round(13 / 59 * second)` with ties away from zero.
pub fn fill_count(second: u8) -> u8 {
    let second = u32::from(second);
    let rounded = (2 * u32::from(ROWS) * second + 59) / (2 * 59);
    (rounded as u8).min(ROWS)
}

/// Vertical offsets of the two drip columns.
///
/// Flips on every frame, so the animation runs at the render cadence, not per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    pub left: u8,
    pub right: u8,
}

impl Default for Blink {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Blink {
    pub const INITIAL: Self = Self { left: 0, right: 1 };

    pub fn toggled(self) -> Self {
        Self {
            left: self.left ^ 1,
            right: self.right ^ 1,
        }
    }

    /// Moves to the next frame and returns the offsets to draw it with.
    ///
    /// The phase is re-synchronized to [`Blink::INITIAL`] on every frame showing second 59.
    pub fn advance(&mut self, second: u8) -> Self {
        if second == 59 {
            *self = Self::INITIAL;
        }
        *self = self.toggled();
        *self
    }
}

pub fn draw<D>(second: u8, blink: Blink, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    draw_drips(blink, target)?;
    draw_outline(target)?;
    draw_fill(fill_count(second), target)
}

fn draw_drips<D>(blink: Blink, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let left = i32::from(blink.left);
    let right = i32::from(blink.right);
    let drips = (0..=12).step_by(2).flat_map(|i| {
        [
            Pixel(Point::new(LEFT, TOP + 1 + i + left), crate::color::YELLOW),
            Pixel(Point::new(LEFT + 1, TOP + 1 + i + right), crate::color::YELLOW),
        ]
    });
    target.draw_iter(drips)
}

fn draw_outline<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_stroke(crate::color::WHITE, 1);
    let middle = TOP + RADIUS;
    let bottom = TOP + 2 * RADIUS;

    [
        Line::new(Point::new(LEFT + 1, TOP), Point::new(LEFT + 1 + RADIUS, middle)),
        Line::new(Point::new(LEFT + 1 + RADIUS, middle), Point::new(LEFT + 1, bottom)),
        Line::new(Point::new(LEFT, bottom), Point::new(LEFT - RADIUS, middle)),
        Line::new(Point::new(LEFT - RADIUS, middle), Point::new(LEFT, TOP)),
    ]
    .into_iter()
    .try_for_each(|line| line.into_styled(style).draw(target))
}

fn draw_fill<D>(rows: u8, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_stroke(crate::color::YELLOW, 1);
    HALF_WIDTH
        .iter()
        .take(usize::from(rows))
        .enumerate()
        .try_for_each(|(row, dx)| {
            let y = TOP + i32::from(ROWS) - row as i32;
            Line::new(Point::new(LEFT - dx, y), Point::new(LEFT + dx + 1, y))
                .into_styled(style)
                .draw(target)
        })
}
