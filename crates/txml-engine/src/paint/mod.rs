//! Color model shared between layout and renderers.
//!
//! Only solid fills exist: every rect and text run is painted with one
//! [`Color`]. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
