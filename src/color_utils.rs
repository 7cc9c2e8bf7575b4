//! Color utility functions shared across the application.
//!
//! Highlight styles and card badges use the same packed `0xRRGGBB` colors.

/// Unpack a `0xRRGGBB` color.
pub fn rgb_from_hex(hex: u32) -> [u8; 3] {
    [
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    ]
}

/// Format a color as a CSS hex string (`#rrggbb`).
pub fn css_hex(color: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(rgb_from_hex(0x59bc59), [0x59, 0xbc, 0x59]);
        assert_eq!(rgb_from_hex(0xff7676), [255, 118, 118]);
        assert_eq!(rgb_from_hex(0), [0, 0, 0]);
    }

    #[test]
    fn test_css_hex() {
        assert_eq!(css_hex([0x59, 0x7c, 0xff]), "#597cff");
        assert_eq!(css_hex([0, 0, 0]), "#000000");
    }
}
