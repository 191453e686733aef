/// Before/after size bars
/// Two horizontal bars scaled against the larger of the two sizes
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

const ORIGINAL_COLOR: Color = Color { r: 0.55, g: 0.55, b: 0.55, a: 1.0 };
const COMPRESSED_COLOR: Color = Color { r: 0.16, g: 0.65, b: 0.27, a: 1.0 };
const TRACK_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.08 };

#[derive(Debug, Clone, Copy)]
pub struct SizeChart {
    pub original: u64,
    pub compressed: u64,
}

impl SizeChart {
    pub fn new(original: u64, compressed: u64) -> Self {
        Self {
            original,
            compressed,
        }
    }

    /// Bar lengths as fractions of the full width
    pub fn fractions(&self) -> (f32, f32) {
        let max = self.original.max(self.compressed);
        if max == 0 {
            return (0.0, 0.0);
        }
        (
            self.original as f32 / max as f32,
            self.compressed as f32 / max as f32,
        )
    }
}

impl canvas::Program<Message> for SizeChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let (original, compressed) = self.fractions();
        let width = bounds.width;
        let gap = 6.0;
        let bar_height = ((bounds.height - gap) / 2.0).max(1.0);

        let bars = [
            (0.0, original, ORIGINAL_COLOR),
            (bar_height + gap, compressed, COMPRESSED_COLOR),
        ];

        for (y, fraction, color) in bars {
            frame.fill_rectangle(Point::new(0.0, y), Size::new(width, bar_height), TRACK_COLOR);
            if fraction > 0.0 {
                frame.fill_rectangle(
                    Point::new(0.0, y),
                    Size::new((width * fraction).max(1.0), bar_height),
                    color,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions_scale_to_larger() {
        assert_eq!(SizeChart::new(200, 50).fractions(), (1.0, 0.25));
        assert_eq!(SizeChart::new(100, 100).fractions(), (1.0, 1.0));
        assert_eq!(SizeChart::new(0, 0).fractions(), (0.0, 0.0));
    }
}
