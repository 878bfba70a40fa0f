use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

use super::{DrawCmd, RectCmd, TextCmd};

/// Recorded draw stream.
///
/// Commands keep insertion order. Renderers run one kind at a time (all
/// rectangles, then all text), so a rectangle never covers text regardless of
/// where it was pushed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a text run with its top-left at `origin`.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), font, size, color, origin }));
    }

    /// Rectangle commands in insertion order.
    pub fn rects(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter().filter_map(|item| match item {
            DrawCmd::Rect(cmd) => Some(cmd),
            _ => None,
        })
    }

    /// Text commands in insertion order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|item| match item {
            DrawCmd::Text(cmd) => Some(cmd),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_filtered_in_insertion_order() {
        let font = FontId(0);
        let mut dl = DrawList::new();
        dl.push_text("a", font, 24.0, Color::WHITE, Vec2::new(0.0, 0.0));
        dl.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        dl.push_text("b", font, 24.0, Color::WHITE, Vec2::new(0.0, 10.0));
        dl.push_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::BLACK);

        let texts: Vec<_> = dl.texts().map(|t| t.text.as_str()).collect();
        let widths: Vec<_> = dl.rects().map(|r| r.rect.size.x).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(widths, [1.0, 2.0]);
        assert_eq!(dl.len(), 4);
    }

    #[test]
    fn clear_empties() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        dl.clear();
        assert!(dl.is_empty());
        assert_eq!(dl.rects().count(), 0);
    }
}
