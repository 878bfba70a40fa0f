use txml_engine::coords::{Rect, Vec2, Viewport};
use txml_engine::text::{FontId, FontSystem};
use txml_markup::{Element, Rgba};

/// Distance from the top of the viewport to the first element.
pub const TOP_MARGIN: f32 = 20.0;
/// Vertical gap between consecutive elements.
pub const ROW_GAP: f32 = 10.0;
/// Horizontal extent of a button background beyond its label.
pub const BUTTON_PAD_X: f32 = 5.0;
/// Vertical extent of a button background beyond its label.
pub const BUTTON_PAD_Y: f32 = 3.0;
/// Fill color of button backgrounds.
pub const BUTTON_BACKGROUND: Rgba = Rgba::opaque(100, 100, 100);

/// Measures a single line of text with the active font.
///
/// `None` means the string cannot be rendered (empty, unknown font, no
/// glyphs); layout skips such elements.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Option<Vec2>;
}

/// [`TextMeasure`] backed by one font of a [`FontSystem`] at a fixed size.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    pub font: FontId,
    pub size: f32,
}

impl TextMeasure for LayoutCtx<'_> {
    fn measure(&self, text: &str) -> Option<Vec2> {
        self.fonts.measure_text(text, self.font, self.size)
    }
}

/// A positioned drawing operation produced by [`layout`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Fill { rect: Rect, color: Rgba },
    Text { text: String, origin: Vec2, color: Rgba },
}

/// Stacks `elements` top to bottom, each centered horizontally.
///
/// Buttons get a [`BUTTON_BACKGROUND`] rectangle behind their label, emitted
/// before the label. Elements that cannot be measured are skipped and take no
/// space. Content below the viewport is still emitted.
pub fn layout(elements: &[Element], viewport: Viewport, measure: &impl TextMeasure) -> Vec<PaintOp> {
    let mut ops = Vec::with_capacity(elements.len() * 2);
    let mut y = TOP_MARGIN;

    for el in elements {
        let Some(size) = measure.measure(&el.content) else {
            log::debug!("skipping unmeasurable {} {:?}", el.kind.tag(), el.content);
            continue;
        };
        let size = size.ceil();
        let x = ((viewport.width - size.x) / 2.0).trunc();
        let label = Rect::new(x, y, size.x, size.y);

        if el.is_button() {
            ops.push(PaintOp::Fill {
                rect: label.outset(BUTTON_PAD_X, BUTTON_PAD_Y),
                color: BUTTON_BACKGROUND,
            });
        }
        ops.push(PaintOp::Text {
            text: el.content.clone(),
            origin: label.origin,
            color: el.color,
        });

        y += size.y + ROW_GAP;
    }

    ops
}
