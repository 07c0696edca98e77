// SPDX-License-Identifier: MPL-2.0
//! Colours applied by the navigator to indicators and nav links.
//!
//! Kept free of any GUI toolkit type; the host converts [`Rgb`] into its own
//! colour representation.

/// 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a colour from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Channel-wise linear blend; `t = 0.0` is `self`, `t = 1.0` is `other`.
    #[must_use]
    pub fn mix(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u8 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            // result stays within 0..=255
            let value = (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            value
        };
        Self {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
        }
    }
}

/// Highlight colour: active indicator fill and border, active nav link.
pub const ACCENT: Rgb = Rgb::from_hex(0x10B981);

/// Fill of inactive indicators.
pub const NEUTRAL: Rgb = Rgb::from_hex(0x9CA3AF);

/// Fill previewed while hovering an inactive indicator.
pub const HOVER: Rgb = Rgb::from_hex(0xF59E0B);

/// Colour of nav links that do not point at the current section.
pub const LINK_DEFAULT: Rgb = Rgb::from_hex(0xFFFFFF);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(
            ACCENT,
            Rgb {
                r: 0x10,
                g: 0xB9,
                b: 0x81
            }
        );
        assert_eq!(LINK_DEFAULT, Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn mix_blends_towards_other() {
        let black = Rgb::from_hex(0x000000);
        assert_eq!(black.mix(LINK_DEFAULT, 0.0), black);
        assert_eq!(black.mix(LINK_DEFAULT, 1.0), LINK_DEFAULT);
        assert_eq!(black.mix(LINK_DEFAULT, 0.5), Rgb::from_hex(0x808080));
    }
}
