// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Indicator dots show their section title in a tooltip that contrasts with
//! the active theme.

use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, spacing, typography,
};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme};

/// Style for tooltip container with good contrast and shadow.
///
/// Automatically adapts to light/dark theme for optimal visibility.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    // Determine if we're in dark mode by checking the background luminance
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    // Inverted surface so the tip stands out from the sections behind it
    let (bg_color, text_color, border_color) = if is_dark {
        (palette::GRAY_50, palette::GRAY_900, palette::GRAY_300)
    } else {
        (palette::GRAY_800, palette::GRAY_50, palette::GRAY_600)
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..border_color
            },
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            ..shadow::SM
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` on hover.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
