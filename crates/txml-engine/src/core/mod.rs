//! Core engine-facing contracts.
//!
//! The interface between the runtime loop and the layer that draws: an
//! [`App`] receives a [`FrameCtx`] whenever the window needs repainting.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
