use txml_engine::coords::{Rect, Vec2};
use txml_engine::paint::Color;
use txml_engine::scene::DrawList;
use txml_engine::text::FontId;
use txml_markup::Rgba;

use crate::layout::PaintOp;

/// Records layout output into the engine's [`DrawList`].
///
/// All text is drawn with one font at one size.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    font: FontId,
    size: f32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font: FontId, size: f32) -> Self {
        Self { draw_list, font, size }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.draw_list.push_rect(rect, to_color(color));
    }

    /// One line of text with its top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, origin: Vec2, color: Rgba) {
        self.draw_list.push_text(text, self.font, self.size, to_color(color), origin);
    }

    /// Records every op in order.
    pub fn paint(&mut self, ops: &[PaintOp]) {
        for op in ops {
            match op {
                PaintOp::Fill { rect, color } => self.fill_rect(*rect, *color),
                PaintOp::Text { text, origin, color } => self.text(text.as_str(), *origin, *color),
            }
        }
    }
}

fn to_color(c: Rgba) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_become_rects_and_texts_in_order() {
        let mut dl = DrawList::new();
        let ops = [
            PaintOp::Fill { rect: Rect::new(0.0, 0.0, 10.0, 10.0), color: Rgba::BLACK },
            PaintOp::Text { text: "hi".into(), origin: Vec2::new(1.0, 2.0), color: Rgba::WHITE },
        ];
        Painter::new(&mut dl, FontId::default(), 24.0).paint(&ops);

        assert_eq!(dl.len(), 2);
        let rect = dl.rects().next().unwrap();
        assert_eq!(rect.rect, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(rect.color, Color::BLACK);

        let text = dl.texts().next().unwrap();
        assert_eq!(text.text, "hi");
        assert_eq!(text.font, FontId::default());
        assert_eq!(text.size, 24.0);
        assert_eq!(text.origin, Vec2::new(1.0, 2.0));
        assert_eq!(text.color, Color::WHITE);
    }
}
