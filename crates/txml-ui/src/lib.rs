//! TXML UI: lays out an interpreted document and shows it in a window.
//!
//! Elements are stacked top to bottom and centered horizontally; buttons
//! get a gray background behind their label.
//!
//! ```rust,ignore
//! use txml_ui::Application;
//!
//! let doc = txml_markup::parse_document(&src);
//! Application::new()
//!     .title("TXML Interpreter")
//!     .font(fonts, font_id, 24.0)
//!     .run(doc)?;
//! ```
//!
//! [`layout::layout`] is pure and works with any [`layout::TextMeasure`], so
//! the geometry can be checked without a GPU.

pub mod app;
pub mod layout;
pub mod painter;
pub mod scene;

pub use app::Application;

/// Common imports for code driving the layout directly.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::layout::{layout, LayoutCtx, PaintOp, TextMeasure};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;

    pub use txml_engine::coords::{Rect, Vec2, Viewport};
    pub use txml_engine::paint::Color;
    pub use txml_engine::text::FontId;
}
