/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are linear-light and multiplied by `a`.
///
/// Surfaces are configured with an sRGB format where available, so the
/// hardware re-encodes these values on store. Colors written as sRGB bytes in
/// markup must therefore go through [`Color::from_srgb_u8`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from straight-alpha sRGB bytes (`0`–`255`).
    ///
    /// RGB channels are decoded from the sRGB transfer curve to linear light;
    /// alpha is linear already.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clear value for a render pass.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    if c == 255 {
        return 1.0;
    }
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_endpoints_are_exact() {
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 255), Color::BLACK);
        assert_eq!(Color::from_srgb_u8(255, 255, 255, 255), Color::WHITE);
    }

    #[test]
    fn srgb_midtone_is_linearized() {
        // sRGB 100/255 ≈ 0.1274 linear.
        let c = Color::from_srgb_u8(100, 100, 100, 255);
        assert!(close(c.r, 0.1274), "got {}", c.r);
        assert!(close(c.g, c.r) && close(c.b, c.r));
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
    }

    #[test]
    fn straight_inputs_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }
}
