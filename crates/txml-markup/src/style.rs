use crate::color::{Rgba, hex_to_color};
use crate::scanner::{Scanner, truncate_chars};
use crate::{MAX_COLOR_TOKEN_LEN, MAX_ID_LEN, MAX_STYLES};

/// A named color defined inside a `<sty>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub id: String,
    pub color: Rgba,
}

/// Append-only style collection with first-match lookup.
///
/// Duplicate ids are kept; [`resolve`](Self::resolve) scans in insertion
/// order, so the earliest definition of an id wins. The table holds at most
/// [`MAX_STYLES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the styles of every `<sty>...</sty>` block in `markup`.
    pub fn parse(markup: &str) -> Self {
        let mut table = Self::new();
        let mut scanner = Scanner::new(markup);

        while let Some(block) = scanner.next_block("<sty>", "</sty>") {
            for line in block.split('\n') {
                if let Some((id, token)) = parse_style_line(line) {
                    table.push(id, hex_to_color(token));
                }
            }
        }

        log::debug!("parsed {} style(s)", table.len());
        table
    }

    /// Appends a style. Returns `false` when the id is empty or the table is
    /// full; the style is dropped in both cases.
    pub fn push(&mut self, id: &str, color: Rgba) -> bool {
        if id.is_empty() {
            return false;
        }
        if self.styles.len() >= MAX_STYLES {
            log::trace!("style table full; dropping {id:?}");
            return false;
        }
        self.styles.push(Style { id: truncate_chars(id, MAX_ID_LEN).to_string(), color });
        true
    }

    /// First style whose id equals `id` (exact, case-sensitive).
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Color of the first style named `id`, or white.
    pub fn resolve(&self, id: &str) -> Rgba {
        match self.get(id) {
            Some(style) => style.color,
            None => {
                log::trace!("unresolved style {id:?}; using white");
                Rgba::WHITE
            }
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }
}

/// Splits one style line into `(id, color token)`.
///
/// Accepted forms (leading `*` is a cosmetic bullet):
///
/// ```text
///   * primary = color(#ff0000)
///     accent  = #00ff00
/// ```
fn parse_style_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start_matches([' ', '\t']);
    let line = line.strip_prefix('*').unwrap_or(line);

    let (key, value) = line.split_once('=')?;
    let id = key.trim();
    let value = value.trim_start();

    let token = match value.find("color(") {
        Some(at) => {
            let inner = &value[at + "color(".len()..];
            // No closing paren: the token stays empty and decodes to white.
            inner.find(')').map_or("", |end| &inner[..end])
        }
        None => value.trim(),
    };

    Some((id, truncate_chars(token, MAX_COLOR_TOKEN_LEN)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> StyleTable {
        StyleTable::parse(src)
    }

    // ── line forms ────────────────────────────────────────────────────────

    #[test]
    fn color_function_form() {
        let t = table("<sty>\nprimary = color(#ff0000)\n</sty>");
        assert_eq!(t.resolve("primary"), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn bare_hex_form() {
        let t = table("<sty>accent=#00ff00</sty>");
        assert_eq!(t.resolve("accent"), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn bullet_and_indentation_are_ignored() {
        let t = table("<sty>\n\t  * ok = color(#0000ff)\n</sty>");
        assert_eq!(t.resolve("ok"), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn id_is_trimmed_on_both_sides() {
        let t = table("<sty>   spaced \t = #010203</sty>");
        assert_eq!(t.get("spaced").map(|s| s.color), Some(Rgba::opaque(1, 2, 3)));
    }

    #[test]
    fn crlf_lines_still_decode() {
        let t = table("<sty>\r\na = #abcdef\r\nb = color(#123456)\r\n</sty>");
        assert_eq!(t.resolve("a"), Rgba::opaque(0xab, 0xcd, 0xef));
        assert_eq!(t.resolve("b"), Rgba::opaque(0x12, 0x34, 0x56));
    }

    #[test]
    fn line_without_equals_contributes_nothing() {
        let t = table("<sty>\njust words\n</sty>");
        assert!(t.is_empty());
    }

    #[test]
    fn empty_id_is_skipped() {
        let t = table("<sty>\n = #ff0000\n*=#00ff00\n</sty>");
        assert!(t.is_empty());
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        let t = table("<sty>bad = color(#zzz)</sty>");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("bad").unwrap().color, Rgba::WHITE);
    }

    #[test]
    fn unclosed_color_function_is_white() {
        let t = table("<sty>x = color(#ff0000</sty>");
        assert_eq!(t.get("x").unwrap().color, Rgba::WHITE);
    }

    #[test]
    fn overlong_token_is_truncated_then_rejected() {
        let t = table("<sty>x = #ff0000000000000000</sty>");
        assert_eq!(t.get("x").unwrap().color, Rgba::WHITE);
    }

    #[test]
    fn long_id_is_truncated() {
        let long = "k".repeat(80);
        let t = table(&format!("<sty>{long} = #ffffff</sty>"));
        assert_eq!(t.iter().next().unwrap().id.chars().count(), MAX_ID_LEN);
    }

    // ── blocks ────────────────────────────────────────────────────────────

    #[test]
    fn text_outside_blocks_is_ignored() {
        let t = table("a = #ff0000\n<sty>b = #00ff00</sty>\nc = #0000ff");
        assert_eq!(t.len(), 1);
        assert!(t.get("a").is_none());
        assert!(t.get("c").is_none());
    }

    #[test]
    fn multiple_blocks_in_order() {
        let t = table("<sty>a=#000001</sty> mid <sty>b=#000002</sty>");
        let ids: Vec<_> = t.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn unterminated_trailing_block_is_ignored() {
        let t = table("<sty>a=#000001</sty><sty>b=#000002");
        assert_eq!(t.len(), 1);
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn first_duplicate_wins() {
        let t = table("<sty>\nx = #ff0000\nx = #00ff00\n</sty>");
        assert_eq!(t.len(), 2);
        assert_eq!(t.resolve("x"), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn resolution_is_case_sensitive() {
        let t = table("<sty>Primary = #ff0000</sty>");
        assert_eq!(t.resolve("primary"), Rgba::WHITE);
    }

    #[test]
    fn empty_table_resolves_white() {
        assert_eq!(StyleTable::new().resolve("anything"), Rgba::WHITE);
    }

    #[test]
    fn cap_keeps_earliest() {
        let lines: String = (0..60).map(|i| format!("s{i} = #000000\n")).collect();
        let src = format!("<sty>\n{lines}</sty><sty>\n{lines}</sty>");
        let t = table(&src);
        assert_eq!(t.len(), MAX_STYLES);
        assert_eq!(t.iter().last().unwrap().id, "s39");
    }

    #[test]
    fn push_reports_drops() {
        let mut t = StyleTable::new();
        assert!(!t.push("", Rgba::BLACK));
        for i in 0..MAX_STYLES {
            assert!(t.push(&format!("s{i}"), Rgba::BLACK));
        }
        assert!(!t.push("late", Rgba::BLACK));
        assert_eq!(t.len(), MAX_STYLES);
    }
}
