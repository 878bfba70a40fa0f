//! TXML engine crate.
//!
//! Platform + GPU runtime used by the viewer: one window, a draw list of
//! solid rectangles and text runs, and the renderers that turn it into pixels.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
