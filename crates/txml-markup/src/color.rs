use std::fmt;

/// Straight-alpha RGBA color with 8-bit channels, as written in markup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fallback for every malformed or unresolved color.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Decodes a `#rrggbb` token.
///
/// Anything that is not exactly `#` plus six hex digits decodes to
/// [`Rgba::WHITE`]. The markup has no alpha channel, so alpha is always 255.
pub fn hex_to_color(token: &str) -> Rgba {
    let Some(hex) = token.strip_prefix('#') else {
        return Rgba::WHITE;
    };
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgba::WHITE;
    }

    // Six ascii hex digits: every pair is valid and fits in a u8.
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(255);
    Rgba::opaque(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_lowercase() {
        assert_eq!(hex_to_color("#ff8000"), Rgba::opaque(255, 128, 0));
    }

    #[test]
    fn decodes_uppercase_and_mixed() {
        assert_eq!(hex_to_color("#00FF7f"), Rgba::opaque(0, 255, 127));
    }

    #[test]
    fn alpha_is_always_opaque() {
        assert_eq!(hex_to_color("#000000").a, 255);
    }

    #[test]
    fn missing_hash_is_white() {
        assert_eq!(hex_to_color("ff0000"), Rgba::WHITE);
    }

    #[test]
    fn wrong_length_is_white() {
        assert_eq!(hex_to_color("#fff"), Rgba::WHITE);
        assert_eq!(hex_to_color("#ff0000ff"), Rgba::WHITE);
        assert_eq!(hex_to_color("#ff0000 "), Rgba::WHITE);
    }

    #[test]
    fn non_hex_is_white() {
        assert_eq!(hex_to_color("#gg0000"), Rgba::WHITE);
        assert_eq!(hex_to_color("#+f0000"), Rgba::WHITE);
    }

    #[test]
    fn multibyte_input_is_white() {
        // 6 bytes but not six hex digits.
        assert_eq!(hex_to_color("#ééé"), Rgba::WHITE);
    }

    #[test]
    fn empty_is_white() {
        assert_eq!(hex_to_color(""), Rgba::WHITE);
        assert_eq!(hex_to_color("#"), Rgba::WHITE);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgba::opaque(1, 171, 255).to_string(), "#01abff");
    }
}
