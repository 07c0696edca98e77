// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with one link per named section.

use crate::app::i18n::fluent::I18n;
use crate::navigator::{NavLink, NavLinks};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Destinations of the links shown in the bar, in display order.
///
/// `#skills` has no entry in the link map, so it stays inert.
pub const LINKS: [&str; 4] = ["#about", "#projects", "#skills", "#contact"];

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub links: &'a NavLinks,
    pub scheme: &'a ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Carries the `#name` destination of the pressed link.
    LinkPressed(String),
}

/// Label key for a link (`"#about"` → `"nav-about"`).
fn label_key(link: &NavLink) -> String {
    format!("nav-{}", link.name())
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::BODY_LG)
        .color(palette::WHITE);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    for link in ctx.links.iter() {
        let label = Text::new(ctx.i18n.tr(&label_key(link))).size(typography::BODY);
        row = row.push(
            button(label)
                .on_press(Message::LinkPressed(link.href().to_string()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::nav_link(Color::from(link.color()))),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_link_has_a_translated_label() {
        let i18n = I18n::default();
        let links = NavLinks::new(LINKS);
        for link in links.iter() {
            let label = i18n.tr(&label_key(link));
            assert!(!label.starts_with("MISSING"), "no label for {}", link.href());
        }
    }

    #[test]
    fn label_key_uses_link_name() {
        assert_eq!(label_key(&NavLink::new("#contact")), "nav-contact");
    }
}
