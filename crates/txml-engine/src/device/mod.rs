//! GPU device + surface management.
//!
//! Creates the wgpu instance/adapter/device/queue for the viewer window,
//! configures its swapchain, and hands out one frame (encoder + view) at a
//! time.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
