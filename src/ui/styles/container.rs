// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::navigator::DotStyle;
use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent band behind the navigation links.
pub fn navbar(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.navbar_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Round indicator dot.
///
/// `fill` and `border_alpha` are the interpolated values of the dot's
/// transition; `target` supplies the border colour.
pub fn indicator_dot(
    fill: Color,
    target: DotStyle,
    border_alpha: f32,
) -> impl Fn(&Theme) -> container::Style {
    let border_color = target.border.map_or(Color::TRANSPARENT, |rgb| Color {
        a: border_alpha,
        ..Color::from(rgb)
    });
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::DotState;

    #[test]
    fn inactive_dot_border_is_transparent() {
        let style = indicator_dot(Color::WHITE, DotState::Inactive.style(), 1.0)(&Theme::Dark);
        assert_eq!(style.border.color, Color::TRANSPARENT);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn active_dot_border_fades_in() {
        let style = indicator_dot(Color::WHITE, DotState::Active.style(), 0.5)(&Theme::Dark);
        assert!((style.border.color.a - 0.5).abs() < f32::EPSILON);
    }
}
