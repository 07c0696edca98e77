// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent navbar color
let navbar_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb8(0x03, 0x07, 0x12);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_300: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);
    pub const GRAY_50: Color = Color::from_rgb8(0xF9, 0xFA, 0xFB);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Navigation bar height.
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Diameter of an indicator dot at rest, excluding its border.
    pub const INDICATOR_DOT: f32 = 12.0;

    /// Gap between two indicator dots at rest.
    pub const INDICATOR_GAP: f32 = 15.0;

    /// Distance between the indicator panel and the right window edge.
    pub const INDICATOR_EDGE_OFFSET: f32 = 30.0;

    /// Widest readable line for section body text.
    pub const SECTION_TEXT_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: Section headings
    //! - Body: Section content and navigation links
    //! - Caption: Tooltips

    /// Display - Full-screen section headings
    pub const DISPLAY: f32 = 56.0;

    /// Large body - Section content
    pub const BODY_LG: f32 = 20.0;

    /// Standard body - Navigation links
    pub const BODY: f32 = 16.0;

    /// Caption - Tooltips and small labels
    pub const CAPTION: f32 = 13.0;

    /// Line height multiplier used when laying out wrapped text.
    pub const LINE_HEIGHT: f32 = 1.5;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Indicator dots
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXL > spacing::XL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::INDICATOR_DOT > 0.0);
    assert!(sizing::INDICATOR_GAP > 0.0);
    assert!(sizing::NAVBAR_HEIGHT > typography::BODY);

    // Typography validation
    assert!(typography::DISPLAY > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::LINE_HEIGHT >= 1.0);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
