// ── Scanner ───────────────────────────────────────────────────────────────

/// Left-to-right cursor over markup text.
///
/// TXML has no token grammar: constructs are found by literal marker search
/// (first match, non-overlapping). The scanner keeps the byte position of the
/// next search and exposes the handful of marker operations the style and
/// element passes are built from.
pub struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

/// One `<name ...>content</name>` construct found by [`Scanner::next_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'s> {
    /// Everything between `<name` and the `>` closing the opening tag.
    pub attrs: &'s str,
    /// Everything strictly between that `>` and `</name>`.
    pub content: &'s str,
}

impl<'s> TagMatch<'s> {
    /// Value of a `key="..."` attribute inside the opening tag.
    pub fn attr(&self, key: &str) -> Option<&'s str> {
        attribute(self.attrs, key)
    }
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the next search.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Absolute offset of the next `marker` at or after the cursor.
    pub fn find(&self, marker: &str) -> Option<usize> {
        self.find_from(self.pos, marker)
    }

    /// Absolute offset of the next `marker` at or after `from`.
    pub fn find_from(&self, from: usize, marker: &str) -> Option<usize> {
        self.src.get(from..)?.find(marker).map(|i| from + i)
    }

    /// Moves the cursor to `pos`, clamped to the end of the source.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.src.len());
    }

    /// Source text in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        &self.src[start..end]
    }

    /// Finds the next `open ... close` block and returns the text between
    /// the markers, leaving the cursor just past `close`.
    ///
    /// Returns `None` when no `open` remains or the last `open` is never
    /// closed; in the latter case the cursor is not moved.
    pub fn next_block(&mut self, open: &str, close: &str) -> Option<&'s str> {
        let start = self.find(open)? + open.len();
        let end = self.find_from(start, close)?;
        self.seek(end + close.len());
        Some(self.slice(start, end))
    }

    /// Finds the next `<name ...>content</name>` construct.
    ///
    /// The opening tag ends at the first `>` after `<name`; the content ends
    /// at the first `</name>` after that. A missing `>` or end tag returns
    /// `None` without moving the cursor, which stops the caller's scan.
    pub fn next_tag(&mut self, name: &str) -> Option<TagMatch<'s>> {
        let open = format!("<{name}");
        let close = format!("</{name}>");

        let tag_start = self.find(&open)?;
        let attrs_start = tag_start + open.len();
        let tag_end = self.find_from(attrs_start, ">")?;
        let content_end = self.find_from(tag_end + 1, &close)?;

        self.seek(content_end + close.len());
        Some(TagMatch {
            attrs: self.slice(attrs_start, tag_end),
            content: self.slice(tag_end + 1, content_end),
        })
    }
}

/// Value of the first `key="..."` in `attrs`, up to the next `"`.
///
/// Matching is a plain substring search, so `data-id="x"` also answers `id`.
/// An unterminated value counts as absent.
pub fn attribute<'s>(attrs: &'s str, key: &str) -> Option<&'s str> {
    let marker = format!("{key}=\"");
    let start = attrs.find(&marker)? + marker.len();
    let len = attrs[start..].find('"')?;
    Some(&attrs[start..start + len])
}

/// Longest prefix of `s` holding at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_absolute() {
        let mut s = Scanner::new("ab<x>ab<x>");
        assert_eq!(s.find("<x>"), Some(2));
        s.seek(3);
        assert_eq!(s.find("<x>"), Some(7));
        s.seek(100);
        assert_eq!(s.pos(), 10);
    }

    #[test]
    fn find_from_past_end_is_none() {
        let s = Scanner::new("abc");
        assert_eq!(s.find_from(10, "a"), None);
    }

    #[test]
    fn seek_clamps() {
        let mut s = Scanner::new("abc");
        s.seek(99);
        assert_eq!(s.pos(), 3);
        assert_eq!(s.find("a"), None);
    }

    #[test]
    fn blocks_are_non_overlapping_and_ordered() {
        let mut s = Scanner::new("x<sty>one</sty>y<sty>two</sty>z");
        assert_eq!(s.next_block("<sty>", "</sty>"), Some("one"));
        assert_eq!(s.next_block("<sty>", "</sty>"), Some("two"));
        assert_eq!(s.next_block("<sty>", "</sty>"), None);
    }

    #[test]
    fn unterminated_block_is_ignored() {
        let mut s = Scanner::new("<sty>a</sty><sty>b");
        assert_eq!(s.next_block("<sty>", "</sty>"), Some("a"));
        let before = s.pos();
        assert_eq!(s.next_block("<sty>", "</sty>"), None);
        assert_eq!(s.pos(), before);
    }

    #[test]
    fn tag_splits_attrs_and_content() {
        let src = r#"<btn id="go">Go!</btn>"#;
        let mut s = Scanner::new(src);
        let tag = s.next_tag("btn").unwrap();
        assert_eq!(tag.attrs, r#" id="go""#);
        assert_eq!(tag.content, "Go!");
        assert_eq!(tag.attr("id"), Some("go"));
        assert_eq!(s.pos(), src.len());
    }

    #[test]
    fn tag_content_may_be_empty() {
        let mut s = Scanner::new("<text></text>");
        assert_eq!(s.next_tag("text").unwrap().content, "");
    }

    #[test]
    fn tag_without_close_angle_stops() {
        let mut s = Scanner::new("<text never closed");
        assert_eq!(s.next_tag("text"), None);
    }

    #[test]
    fn tag_without_end_tag_stops() {
        let mut s = Scanner::new("<text>dangling");
        assert_eq!(s.next_tag("text"), None);
    }

    #[test]
    fn attribute_outside_opening_tag_is_not_seen() {
        let mut s = Scanner::new(r##"<text>color="#ff0000"</text>"##);
        let tag = s.next_tag("text").unwrap();
        assert_eq!(tag.attr("color"), None);
    }

    #[test]
    fn attribute_is_substring_match() {
        assert_eq!(attribute(r#" data-id="x""#, "id"), Some("x"));
    }

    #[test]
    fn unterminated_attribute_is_absent() {
        assert_eq!(attribute(r#" id="oops"#, "id"), None);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
