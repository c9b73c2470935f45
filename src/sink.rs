use crate::frame::Frame;

/// Where finished frames go.
///
/// Drawing itself happens on the [`Frame`] through `embedded_graphics::DrawTarget`.
/// `present` takes ownership of the finished frame and hands back the offscreen one to draw
/// the next frame into.
pub trait DrawingSink {
    type Error;

    fn present(&mut self, frame: Frame) -> Result<Frame, Self::Error>;
}

/// Streams frames to a DDP receiver (WLED and friends), row by row.
pub struct DdpSink {
    writer: crate::writer::Writer,
    brightness: u8,
    presented: Frame,
}

impl DdpSink {
    pub fn new(writer: crate::writer::Writer, brightness_percent: u8) -> Self {
        let brightness = brightness_from_percent(brightness_percent);
        tracing::debug!(brightness_percent, brightness, "Configured DDP sink");

        Self {
            writer,
            brightness,
            presented: Frame::default(),
        }
    }
}

/// Scales a 0-100 percent setting to the 0-255 range of `smart_leds::brightness`.
fn brightness_from_percent(percent: u8) -> u8 {
    (u16::from(percent.min(100)) * 255 / 100) as u8
}

impl DrawingSink for DdpSink {
    type Error = ddp_rs::error::DDPError;

    fn present(&mut self, frame: Frame) -> Result<Frame, Self::Error> {
        use smart_leds::SmartLedsWrite;

        let pixels = frame.pixels().map(crate::writer::rgb888_to_rgb8);
        self.writer
            .write(smart_leds::brightness(pixels, self.brightness))?;

        Ok(std::mem::replace(&mut self.presented, frame))
    }
}
