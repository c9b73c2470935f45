use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;

use crate::blocks::BlockStates;
use crate::diamond::Blink;
use crate::time_sample::TimeSample;
use crate::worm::WormPath;

/// Turns time samples into complete frames.
///
/// Everything is recomputed from the sample on every call. The blink phase of the drip
/// columns is the only state carried from one frame to the next.
#[derive(Debug, Default)]
pub struct Compositor {
    worm: WormPath,
    blink: Blink,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose<D>(&mut self, sample: TimeSample, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(crate::color::BLACK)?;

        let blink = self.blink.advance(sample.second);
        crate::diamond::draw(sample.second, blink, target)?;

        let trail = self.worm.trail(sample.second, sample.millisecond);
        self.worm.draw(trail, target)?;

        let states = BlockStates::new(sample.hour, sample.minute);
        for block in crate::blocks::LAYOUT.iter() {
            block.draw(states.is_enabled(block), target)?;
        }

        Ok(())
    }
}
