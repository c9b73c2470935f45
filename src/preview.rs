//! Text rendering of a frame, for looking at the face without a panel attached.

use embedded_graphics::pixelcolor::Rgb888;

use crate::color;
use crate::frame::Frame;

fn glyph(cell: Rgb888) -> char {
    match cell {
        color::BLACK => ' ',
        color::WHITE => '#',
        color::RED => 'R',
        color::GREEN => 'G',
        color::YELLOW => 'Y',
        color::BLUE => 'B',
        color::DARK_SLATE_GREY => '+',
        color::UNLIT_FILL => '.',
        color::LIGHT_SKY_BLUE => '@',
        color::CORNFLOWER_BLUE => 'o',
        color::DARK_BLUE => 'b',
        _ => '?',
    }
}

pub fn write_frame<W>(frame: &Frame, out: &mut W) -> std::io::Result<()>
where
    W: std::io::Write,
{
    for row in frame.rows() {
        let line: String = row.iter().copied().map(glyph).collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::time;

    use super::*;
    use crate::compositor::Compositor;

    fn preview(at: time::Time) -> String {
        let mut frame = Frame::default();
        Compositor::new()
            .compose(at.into(), &mut frame)
            .unwrap_or_else(|never| match never {});

        let mut out = Vec::new();
        write_frame(&frame, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let text = preview(time!(13:47:30));
        assert_eq!(text.lines().count(), crate::frame::HEIGHT);
        assert!(text.lines().all(|l| l.chars().count() <= crate::frame::WIDTH));
        assert!(!text.contains('?'));
    }

    #[test]
    fn test_block_interiors() {
        let text = preview(time!(13:47:30));
        // two lit hour-five blocks and three lit hour-one blocks, 10x7 interior each
        assert_eq!(text.matches('R').count(), 2 * 70);
        assert_eq!(text.matches('G').count(), 3 * 70);
    }

    #[test]
    fn test_worm_drawn_once() {
        let text = preview(time!(00:00:10));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('o').count(), 1);
        assert_eq!(text.matches('b').count(), 1);
    }

    #[test]
    fn test_midnight_is_all_dark() {
        let text = preview(time!(00:00:00));
        // twelve 12x9 and eleven 4x9 blocks, none lit
        assert_eq!(text.matches('R').count(), 0);
        assert_eq!(text.matches('G').count(), 0);
        assert_eq!(text.matches('.').count(), 12 * 70 + 11 * 14);
    }
}
