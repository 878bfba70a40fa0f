use txml_engine::coords::Viewport;
use txml_engine::scene::DrawList;
use txml_engine::text::{FontId, FontSystem};
use txml_markup::Element;

use crate::layout::{layout, LayoutCtx};
use crate::painter::Painter;

/// Owns the fonts and the recorded draw list shared across frames.
///
/// The GPU renderers live in the application and borrow `draw_list` and
/// `font_system` each frame.
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
    font: FontId,
    font_size: f32,
}

impl UiScene {
    /// A scene that lays out and draws all text with `font` at `font_size`.
    pub fn new(font_system: FontSystem, font: FontId, font_size: f32) -> Self {
        Self { font_system, draw_list: DrawList::new(), font, font_size }
    }

    /// Lays out `elements` against `viewport` and re-records the draw list.
    pub fn frame(&mut self, elements: &[Element], viewport: Viewport) -> &DrawList {
        self.draw_list.clear();

        let ctx = LayoutCtx { fonts: &self.font_system, font: self.font, size: self.font_size };
        let ops = layout(elements, viewport, &ctx);
        Painter::new(&mut self.draw_list, self.font, self.font_size).paint(&ops);

        log::debug!(
            "laid out {} of {} elements in {}x{}",
            self.draw_list.texts().count(),
            elements.len(),
            viewport.width,
            viewport.height,
        );
        &self.draw_list
    }
}
