use ddp_rs::connection::DDPConnection;
use smart_leds::RGB8;

pub struct Writer {
    connection: DDPConnection,
}

impl Writer {
    pub fn new(connection: DDPConnection) -> Self {
        Self { connection }
    }
}

impl smart_leds::SmartLedsWrite for Writer {
    type Error = ddp_rs::error::DDPError;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let payload = iterator
            .into_iter()
            .map(Into::into)
            .flat_map(|rgb: RGB8| [rgb.r, rgb.g, rgb.b])
            .collect::<Vec<u8>>();

        tracing::trace!(bytes = payload.len(), "Writing frame");
        self.connection.write(&payload).map(drop)
    }
}

pub fn rgb888_to_rgb8(rgb888: embedded_graphics::pixelcolor::Rgb888) -> RGB8 {
    use embedded_graphics::prelude::RgbColor;
    RGB8::new(rgb888.r(), rgb888.g(), rgb888.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(
            rgb888_to_rgb8(crate::color::CORNFLOWER_BLUE),
            RGB8::new(100, 149, 237)
        );
    }
}
