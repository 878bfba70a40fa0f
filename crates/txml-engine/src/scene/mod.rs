//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - hand each renderer the commands of its own kind

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd};
pub use list::DrawList;
