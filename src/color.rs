//! Fixed palette of the clock face.

use embedded_graphics::pixelcolor::Rgb888;

pub(crate) const BLACK: Rgb888 = Rgb888::new(0, 0, 0);

pub(crate) const WHITE: Rgb888 = Rgb888::new(255, 255, 255);

pub(crate) const RED: Rgb888 = Rgb888::new(255, 0, 0);

pub(crate) const GREEN: Rgb888 = Rgb888::new(0, 255, 0);

pub(crate) const YELLOW: Rgb888 = Rgb888::new(255, 255, 0);

pub(crate) const BLUE: Rgb888 = Rgb888::new(0, 0, 255);

pub(crate) const DARK_BLUE: Rgb888 = Rgb888::new(0, 0, 139);

pub(crate) const CORNFLOWER_BLUE: Rgb888 = Rgb888::new(100, 149, 237);

pub(crate) const LIGHT_SKY_BLUE: Rgb888 = Rgb888::new(135, 206, 250);

pub(crate) const DARK_SLATE_GREY: Rgb888 = Rgb888::new(47, 79, 79);

/// Fill of a block that is switched off. Not quite black so the unlit grid stays visible.
pub(crate) const UNLIT_FILL: Rgb888 = Rgb888::new(10, 10, 10);
