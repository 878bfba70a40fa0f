//! GPU rendering subsystem.
//!
//! Renderers consume the `scene` draw list and issue GPU commands via wgpu.
//! Each renderer owns its own GPU resources (pipelines, buffers, atlas).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
