// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Color, Theme};
    use iced_folio::navigator::style::{ACCENT, LINK_DEFAULT};
    use iced_folio::navigator::DotState;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, tooltip};
    use iced_folio::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::nav_link(Color::from(LINK_DEFAULT))(&theme, Status::Active);
        let _ = container::navbar(&ColorScheme::dark())(&theme);
        let _ = container::indicator_dot(Color::from(ACCENT), DotState::Active.style(), 1.0)(
            &theme,
        );
        let _ = tooltip::tooltip_container(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::GRAY_900;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::INDICATOR_DOT;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_mode(ThemeMode::Light);
        let dark = ColorScheme::for_mode(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn highlighted_link_uses_accent() {
        let style = button::nav_link(Color::from(ACCENT))(&Theme::Light, Status::Hovered);
        assert_eq!(style.text_color, Color::from(ACCENT));
    }
}
