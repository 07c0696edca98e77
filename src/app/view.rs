// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of three layers: the section canvas at the bottom,
//! the navigation bar along the top, and the indicator dots on the right.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::navigator::SectionNavigator;
use crate::ui::indicator_panel::{self, DotAnimations};
use crate::ui::navbar;
use crate::ui::section_stage::{SectionStage, SectionText};
use crate::ui::section_surface::SectionSurface;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a SectionNavigator<SectionSurface>,
    pub dots: &'a DotAnimations,
    pub texts: &'a [SectionText],
    pub titles: &'a [String],
    pub scheme: &'a ColorScheme,
    pub now_ms: u64,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let stage =
        SectionStage::new(ctx.navigator.panels(), ctx.texts, ctx.scheme, ctx.now_ms).into_element();

    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        links: ctx.navigator.nav_links(),
        scheme: ctx.scheme,
    })
    .map(Message::Navbar);

    let indicators = indicator_panel::view(indicator_panel::ViewContext {
        dots: ctx.dots,
        titles: ctx.titles,
        now_ms: ctx.now_ms,
    })
    .map(Message::Indicator);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage)
        .push(Column::new().width(Length::Fill).push(navbar))
        .push(indicators)
        .into()
}
