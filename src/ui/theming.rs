// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and conversion of navigator colours.

use crate::navigator::Rgb;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Section surfaces, alternated from one section to the next
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    /// Translucent band behind the nav links; links are white, so it stays dark.
    pub navbar_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_50,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            navbar_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_900
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,

            navbar_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Background of the section at `index`.
    #[must_use]
    pub fn section_background(&self, index: usize) -> Color {
        if index % 2 == 0 {
            self.surface_primary
        } else {
            self.surface_secondary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Built-in iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

/// `color` with its alpha multiplied by `factor`.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn sections_alternate_backgrounds() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.section_background(0), scheme.surface_primary);
        assert_eq!(scheme.section_background(1), scheme.surface_secondary);
        assert_eq!(scheme.section_background(4), scheme.surface_primary);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn rgb_converts_to_iced_color() {
        let color = Color::from(crate::navigator::style::ACCENT);
        assert_abs_diff_eq!(color.g, 185.0 / 255.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(color.a, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::WHITE, 0.25);
        assert_abs_diff_eq!(color.a, 0.25, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(color.r, 1.0, epsilon = F32_EPSILON);
    }
}
