//! Interpreter for **TXML**, a small markup for text labels and buttons with
//! named color styles.
//!
//! This crate has no GPU or window dependencies so the interpreter can be
//! tested and reused headless.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgba`, `hex_to_color` |
//! | [`scanner`] | `Scanner`, `TagMatch` marker search |
//! | [`style`] | `Style`, `StyleTable` (`<sty>` blocks) |
//! | [`element`] | `Element`, `ElementKind`, `parse_elements` |
//! | [`document`] | `Document`, `parse_document` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use txml_markup::{parse_document, Rgba};
//!
//! let src = r#"
//! <sty>
//!   * primary = color(#ff0000)
//! </sty>
//! <text>Welcome</text>
//! <btn id="primary">OK</btn>
//! "#;
//!
//! let doc = parse_document(src);
//! assert_eq!(doc.elements.len(), 2);
//! assert_eq!(doc.elements[1].color, Rgba::opaque(255, 0, 0));
//! ```
//!
//! Malformed input never produces an error: bad colors become white,
//! unterminated tags end the scan, and over-long values are truncated.

pub mod color;
pub mod document;
pub mod element;
pub mod scanner;
pub mod style;

pub use color::{Rgba, hex_to_color};
pub use document::{Document, parse_document};
pub use element::{Element, ElementKind, parse_elements};
pub use style::{Style, StyleTable};

/// Maximum number of styles retained across all `<sty>` blocks.
pub const MAX_STYLES: usize = 100;
/// Maximum number of elements (text and buttons combined).
pub const MAX_ELEMENTS: usize = 100;
/// Maximum characters of element content.
pub const MAX_CONTENT_LEN: usize = 255;
/// Maximum characters of a style id or button `id` attribute.
pub const MAX_ID_LEN: usize = 63;
/// Maximum characters of a color token before decoding.
pub const MAX_COLOR_TOKEN_LEN: usize = 15;
