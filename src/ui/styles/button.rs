// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Text-only button used for navigation links.
///
/// `text_color` is the colour the navigator assigned to the link. Hovering
/// adds a faint backdrop without changing that colour.
pub fn nav_link(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn nav_link_keeps_assigned_color_in_every_state() {
        let style = nav_link(palette::GRAY_300);
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
        ] {
            assert_eq!(style(&Theme::Dark, status).text_color, palette::GRAY_300);
        }
    }

    #[test]
    fn nav_link_is_transparent_until_hovered() {
        let style = nav_link(WHITE);
        assert!(style(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(style(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
