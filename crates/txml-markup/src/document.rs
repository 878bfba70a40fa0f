use crate::element::{Element, ElementKind, parse_elements};
use crate::style::StyleTable;

/// Result of interpreting one markup source: its styles and the elements
/// extracted with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub styles: StyleTable,
    pub elements: Vec<Element>,
}

impl Document {
    /// Number of elements of `kind`.
    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|e| e.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Interprets a TXML source string.
///
/// Styles are collected first, then elements are extracted with those styles
/// in scope. Interpretation never fails; malformed constructs degrade to the
/// documented defaults.
pub fn parse_document(src: &str) -> Document {
    let styles = StyleTable::parse(src);
    let elements = parse_elements(src, &styles);

    for el in &elements {
        match &el.style_ref {
            Some(id) => log::trace!("{:?} {:?} color={} style={id:?}", el.kind, el.content, el.color),
            None => log::trace!("{:?} {:?} color={}", el.kind, el.content, el.color),
        }
    }

    Document { styles, elements }
}
