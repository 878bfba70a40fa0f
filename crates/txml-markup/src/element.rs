use crate::color::{Rgba, hex_to_color};
use crate::scanner::{Scanner, truncate_chars};
use crate::style::StyleTable;
use crate::{MAX_COLOR_TOKEN_LEN, MAX_CONTENT_LEN, MAX_ELEMENTS, MAX_ID_LEN};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Text,
    Button,
}

impl ElementKind {
    /// Tag name in markup.
    pub const fn tag(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Button => "btn",
        }
    }
}

/// A renderable label or button with its color already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub content: String,
    pub color: Rgba,
    /// Raw `id` attribute of a button, kept for diagnostics. Always `None`
    /// for text elements.
    pub style_ref: Option<String>,
}

impl Element {
    pub fn text(content: impl Into<String>, color: Rgba) -> Self {
        Self { kind: ElementKind::Text, content: content.into(), color, style_ref: None }
    }

    pub fn button(content: impl Into<String>, color: Rgba, style_ref: Option<String>) -> Self {
        Self { kind: ElementKind::Button, content: content.into(), color, style_ref }
    }

    #[inline]
    pub fn is_button(&self) -> bool {
        self.kind == ElementKind::Button
    }
}

/// Extracts `<text>` and `<btn>` elements from `markup`.
///
/// Runs two independent scans over the whole input: every text element is
/// collected first, then every button, so the result is grouped by kind
/// rather than in document order. Both scans share the [`MAX_ELEMENTS`] cap.
/// An unterminated tag ends its own scan only.
pub fn parse_elements(markup: &str, styles: &StyleTable) -> Vec<Element> {
    let mut elements = Vec::new();
    scan_texts(markup, &mut elements);
    scan_buttons(markup, styles, &mut elements);
    elements
}

fn scan_texts(markup: &str, out: &mut Vec<Element>) {
    let mut scanner = Scanner::new(markup);

    while out.len() < MAX_ELEMENTS {
        let Some(tag) = scanner.next_tag(ElementKind::Text.tag()) else {
            log_scan_end(&scanner, ElementKind::Text);
            return;
        };

        let color = tag
            .attr("color")
            .map(|token| hex_to_color(truncate_chars(token, MAX_COLOR_TOKEN_LEN)))
            .unwrap_or(Rgba::WHITE);

        out.push(Element::text(truncate_chars(tag.content, MAX_CONTENT_LEN), color));
    }
    log::debug!("element cap ({MAX_ELEMENTS}) reached during text scan");
}

fn scan_buttons(markup: &str, styles: &StyleTable, out: &mut Vec<Element>) {
    let mut scanner = Scanner::new(markup);

    while out.len() < MAX_ELEMENTS {
        let Some(tag) = scanner.next_tag(ElementKind::Button.tag()) else {
            log_scan_end(&scanner, ElementKind::Button);
            return;
        };

        let style_ref = tag.attr("id").map(|id| truncate_chars(id, MAX_ID_LEN).to_string());
        let color = style_ref.as_deref().map_or(Rgba::WHITE, |id| styles.resolve(id));

        out.push(Element::button(truncate_chars(tag.content, MAX_CONTENT_LEN), color, style_ref));
    }
    log::debug!("element cap ({MAX_ELEMENTS}) reached during button scan");
}

fn log_scan_end(scanner: &Scanner<'_>, kind: ElementKind) {
    let open = format!("<{}", kind.tag());
    if scanner.find(&open).is_some() {
        log::debug!(
            "unterminated <{}> at byte {}; remaining tags skipped",
            kind.tag(),
            scanner.pos()
        );
    }
}
