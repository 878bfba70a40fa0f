/// Viewport size in logical pixels.
///
/// Layout centers content against this size; renderers upload it to convert
/// logical positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `[width, height]` with each side at least one pixel, for shader uniforms.
    #[inline]
    pub fn to_uniform(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
