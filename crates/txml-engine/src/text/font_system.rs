use std::borrow::Cow;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle names the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and passed to the text renderer each frame so new glyphs can be rasterized
/// on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Height of one line (ascent − descent) at `size`, or `None` for an
    /// unknown font.
    pub fn line_height(&self, id: FontId, size: f32) -> Option<f32> {
        let font = self.get(id)?;
        Some(match font.horizontal_line_metrics(size) {
            Some(m) => m.ascent - m.descent,
            None => size * 1.2,
        })
    }

    /// Bounding box of `text` laid out on one line without wrapping.
    ///
    /// Line breaks are drawn as spaces (see [`single_line`]). Width is the
    /// pen extent after the last glyph; height is at least one line. Returns
    /// `None` when there is nothing to rasterize: unknown font, empty string,
    /// no glyphs produced, or zero total width.
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Option<Vec2> {
        let font = self.get(id)?;
        if text.is_empty() {
            return None;
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(&single_line(text), size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return None;
        }

        // Pen position after each glyph, not the bitmap right edge, so that
        // trailing spaces count towards the width.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        if w <= 0.0 {
            return None;
        }
        let line = self.line_height(id, size).unwrap_or(size);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(line, f32::max);
        Some(Vec2::new(w, h))
    }
}

/// `text` with every `\r` and `\n` replaced by a space.
///
/// Text runs are single lines; fontdue would otherwise start a new line at
/// each break. Measurement and rendering both go through this.
pub fn single_line(text: &str) -> Cow<'_, str> {
    let is_break = |c: char| matches!(c, '\r' | '\n');
    if text.contains(is_break) {
        Cow::Owned(text.replace(is_break, " "))
    } else {
        Cow::Borrowed(text)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fs = FontSystem::new();
        let err = fs.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn unknown_font_measures_nothing() {
        let fs = FontSystem::new();
        assert_eq!(fs.measure_text("hi", FontId(3), 24.0), None);
        assert_eq!(fs.line_height(FontId(3), 24.0), None);
    }

    #[test]
    fn line_breaks_become_spaces() {
        assert_eq!(single_line("plain"), "plain");
        assert!(matches!(single_line("plain"), Cow::Borrowed(_)));
        assert_eq!(single_line("\n  Welcome\r\n"), "   Welcome  ");
    }

    /// First DejaVu/Noto font present on this machine. Tests that need real
    /// glyphs return early without one.
    fn system_font() -> Option<(FontSystem, FontId)> {
        let bytes = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(p).ok())?;
        let mut fs = FontSystem::new();
        let id = fs.load_font(&bytes).ok()?;
        Some((fs, id))
    }

    #[test]
    fn multi_line_content_measures_as_one_line() {
        let Some((fs, id)) = system_font() else { return };
        let line = fs.line_height(id, 24.0).unwrap();
        let broken = fs.measure_text("x\ny", id, 24.0).unwrap();
        let spaced = fs.measure_text("x y", id, 24.0).unwrap();
        assert_eq!(broken, spaced);
        assert!(broken.y < line * 1.5, "{broken:?} is taller than one line ({line})");
    }

    #[test]
    fn width_is_the_pen_extent() {
        let Some((fs, id)) = system_font() else { return };
        let one = fs.measure_text("i", id, 24.0).unwrap();
        let two = fs.measure_text("ii", id, 24.0).unwrap();
        let spaced = fs.measure_text("i ", id, 24.0).unwrap();

        // Advance widths add up and trailing spaces count.
        assert!((two.x - 2.0 * one.x).abs() < 2.0, "{one:?} {two:?}");
        assert!(spaced.x > one.x);
        // Height is one line regardless of glyph shape.
        assert!(one.y >= fs.line_height(id, 24.0).unwrap());
        assert_eq!(one.y, two.y);
    }

    #[test]
    fn larger_size_measures_wider() {
        let Some((fs, id)) = system_font() else { return };
        let small = fs.measure_text("Welcome", id, 12.0).unwrap();
        let large = fs.measure_text("Welcome", id, 24.0).unwrap();
        assert!(large.x > small.x * 1.8 && large.y > small.y);
    }

    #[test]
    fn zero_width_text_is_unmeasurable() {
        let Some((fs, id)) = system_font() else { return };
        // Without a real glyph it falls back to .notdef, which has width.
        if fs.get(id).unwrap().lookup_glyph_index('\u{200b}') == 0 {
            return;
        }
        assert_eq!(fs.measure_text("\u{200b}", id, 24.0), None);
        assert_eq!(fs.measure_text("\u{200b}\u{200b}", id, 24.0), None);
    }
}
