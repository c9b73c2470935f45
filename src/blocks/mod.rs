//! The four tiers of indicator blocks and their quantization rules.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics::prelude::Point;
use embedded_graphics::prelude::Primitive;
use embedded_graphics::prelude::Size;
use embedded_graphics::primitives::PrimitiveStyleBuilder;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::primitives::StrokeAlignment;
use embedded_graphics::Drawable;

use crate::color::BLUE;
use crate::color::GREEN;
use crate::color::RED;
use crate::color::YELLOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    HourFive,
    HourOne,
    MinuteFive,
    MinuteOne,
}

impl Tier {
    pub const fn cardinality(self) -> usize {
        match self {
            Tier::HourFive | Tier::HourOne | Tier::MinuteOne => 4,
            Tier::MinuteFive => 11,
        }
    }

    /// Whether block `index` (0-based) of this tier is lit at `hour:minute`.
    pub fn is_lit(self, index: usize, hour: u8, minute: u8) -> bool {
        debug_assert!(index < self.cardinality());
        let step = index as u8 + 1;
        match self {
            Tier::HourFive => hour >= 5 * step,
            Tier::HourOne => hour % 5 >= step,
            Tier::MinuteFive => minute >= 5 * step,
            Tier::MinuteOne => minute % 5 >= step,
        }
    }
}

const STANDARD_SIZE: Size = Size::new(12, 9);

const NARROW_SIZE: Size = Size::new(4, 9);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub tier: Tier,
    pub index: usize,
    pub top_left: Point,
    pub size: Size,
    pub fill: Rgb888,
}

impl Block {
    const fn standard(tier: Tier, index: usize, top: i32, left: i32, fill: Rgb888) -> Self {
        Self {
            tier,
            index,
            top_left: Point::new(left, top),
            size: STANDARD_SIZE,
            fill,
        }
    }

    const fn narrow(tier: Tier, index: usize, top: i32, left: i32, fill: Rgb888) -> Self {
        Self {
            tier,
            index,
            top_left: Point::new(left, top),
            size: NARROW_SIZE,
            fill,
        }
    }

    /// Draws border and fill. Both are drawn either way, only the colors depend on `enabled`.
    pub fn draw<D>(&self, enabled: bool, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let (border, fill) = if enabled {
            (crate::color::WHITE, self.fill)
        } else {
            (crate::color::DARK_SLATE_GREY, crate::color::UNLIT_FILL)
        };

        let style = PrimitiveStyleBuilder::new()
            .stroke_color(border)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .fill_color(fill)
            .build();

        Rectangle::new(self.top_left, self.size)
            .into_styled(style)
            .draw(target)
    }
}

pub const BLOCK_COUNT: usize = 23;

pub static LAYOUT: [Block; BLOCK_COUNT] = [
    Block::standard(Tier::HourFive, 0, 19, 5, RED),
    Block::standard(Tier::HourFive, 1, 19, 19, RED),
    Block::standard(Tier::HourFive, 2, 19, 33, RED),
    Block::standard(Tier::HourFive, 3, 19, 47, RED),
    Block::standard(Tier::HourOne, 0, 30, 5, GREEN),
    Block::standard(Tier::HourOne, 1, 30, 19, GREEN),
    Block::standard(Tier::HourOne, 2, 30, 33, GREEN),
    Block::standard(Tier::HourOne, 3, 30, 47, GREEN),
    Block::narrow(Tier::MinuteFive, 0, 41, 5, YELLOW),
    Block::narrow(Tier::MinuteFive, 1, 41, 10, BLUE),
    Block::narrow(Tier::MinuteFive, 2, 41, 15, YELLOW),
    Block::narrow(Tier::MinuteFive, 3, 41, 20, BLUE),
    Block::narrow(Tier::MinuteFive, 4, 41, 25, YELLOW),
    Block::narrow(Tier::MinuteFive, 5, 41, 30, BLUE),
    Block::narrow(Tier::MinuteFive, 6, 41, 35, YELLOW),
    Block::narrow(Tier::MinuteFive, 7, 41, 40, BLUE),
    Block::narrow(Tier::MinuteFive, 8, 41, 45, YELLOW),
    Block::narrow(Tier::MinuteFive, 9, 41, 50, BLUE),
    Block::narrow(Tier::MinuteFive, 10, 41, 55, YELLOW),
    Block::standard(Tier::MinuteOne, 0, 52, 5, BLUE),
    Block::standard(Tier::MinuteOne, 1, 52, 19, BLUE),
    Block::standard(Tier::MinuteOne, 2, 52, 33, BLUE),
    Block::standard(Tier::MinuteOne, 3, 52, 47, BLUE),
];

/// Lit state of every block, one array per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStates {
    pub hour_five: [bool; 4],
    pub hour_one: [bool; 4],
    pub minute_five: [bool; 11],
    pub minute_one: [bool; 4],
}

impl BlockStates {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour_five: std::array::from_fn(|i| Tier::HourFive.is_lit(i, hour, minute)),
            hour_one: std::array::from_fn(|i| Tier::HourOne.is_lit(i, hour, minute)),
            minute_five: std::array::from_fn(|i| Tier::MinuteFive.is_lit(i, hour, minute)),
            minute_one: std::array::from_fn(|i| Tier::MinuteOne.is_lit(i, hour, minute)),
        }
    }

    pub fn tier(&self, tier: Tier) -> &[bool] {
        match tier {
            Tier::HourFive => &self.hour_five,
            Tier::HourOne => &self.hour_one,
            Tier::MinuteFive => &self.minute_five,
            Tier::MinuteOne => &self.minute_one,
        }
    }

    pub fn is_enabled(&self, block: &Block) -> bool {
        self.tier(block.tier)[block.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    const TIERS: [Tier; 4] = [Tier::HourFive, Tier::HourOne, Tier::MinuteFive, Tier::MinuteOne];

    impl BlockStates {
        fn count_enabled(&self, tier: Tier) -> usize {
            self.tier(tier).iter().filter(|lit| **lit).count()
        }
    }

    #[test]
    fn test_layout_cardinality() {
        for tier in TIERS {
            let blocks = LAYOUT.iter().filter(|b| b.tier == tier).count();
            assert_eq!(blocks, tier.cardinality(), "{tier:?}");
        }

        for block in LAYOUT.iter() {
            assert!(block.index < block.tier.cardinality());
        }
    }

    #[test]
    fn test_hour_counts() {
        for hour in 0..24u8 {
            let states = BlockStates::new(hour, 0);
            assert_eq!(states.count_enabled(Tier::HourFive), usize::from(hour / 5));
            assert_eq!(states.count_enabled(Tier::HourOne), usize::from(hour % 5));
        }
    }

    #[test]
    fn test_minute_counts() {
        for minute in 0..60u8 {
            let states = BlockStates::new(0, minute);
            assert_eq!(states.count_enabled(Tier::MinuteFive), usize::from(minute / 5));
            assert_eq!(states.count_enabled(Tier::MinuteOne), usize::from(minute % 5));
        }
    }

    #[test]
    fn test_lit_blocks_fill_from_the_left() {
        for minute in 0..60u8 {
            let states = BlockStates::new(0, minute);
            for tier in [Tier::MinuteFive, Tier::MinuteOne] {
                let lit = states.tier(tier);
                let n = states.count_enabled(tier);
                assert!(lit[..n].iter().all(|l| *l));
                assert!(lit[n..].iter().all(|l| !*l));
            }
        }
    }

    #[test]
    fn test_thirteen_forty_seven() {
        let states = BlockStates::new(13, 47);
        insta::assert_debug_snapshot!(states, @r"
        BlockStates {
            hour_five: [
                true,
                true,
                false,
                false,
            ],
            hour_one: [
                true,
                true,
                true,
                false,
            ],
            minute_five: [
                true,
                true,
                true,
                true,
                true,
                true,
                true,
                true,
                true,
                false,
                false,
            ],
            minute_one: [
                true,
                true,
                false,
                false,
            ],
        }
        ");
    }

    #[test]
    fn test_states_are_pure() {
        assert_eq!(BlockStates::new(21, 8), BlockStates::new(21, 8));
    }

    #[test]
    fn test_draw_enabled_block() {
        let mut frame = Frame::default();
        let block = &LAYOUT[0];
        block.draw(true, &mut frame).unwrap();

        // corners of the 12x9 border
        assert_eq!(frame.get(5, 19), crate::color::WHITE);
        assert_eq!(frame.get(16, 19), crate::color::WHITE);
        assert_eq!(frame.get(5, 27), crate::color::WHITE);
        assert_eq!(frame.get(16, 27), crate::color::WHITE);

        // interior
        assert_eq!(frame.get(6, 20), RED);
        assert_eq!(frame.get(15, 26), RED);

        // nothing outside
        assert_eq!(frame.get(17, 19), crate::color::BLACK);
        assert_eq!(frame.get(5, 28), crate::color::BLACK);
    }

    #[test]
    fn test_draw_disabled_narrow_block() {
        let mut frame = Frame::default();
        let block = LAYOUT
            .iter()
            .find(|b| b.tier == Tier::MinuteFive && b.index == 1)
            .unwrap();
        block.draw(false, &mut frame).unwrap();

        assert_eq!(frame.get(10, 41), crate::color::DARK_SLATE_GREY);
        assert_eq!(frame.get(13, 49), crate::color::DARK_SLATE_GREY);
        assert_eq!(frame.get(11, 45), crate::color::UNLIT_FILL);
        assert_eq!(frame.get(12, 45), crate::color::UNLIT_FILL);
        assert_eq!(frame.get(14, 45), crate::color::BLACK);
    }
}
