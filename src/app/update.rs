// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Every message first stamps the shared frame clock, then runs the timers
//! that fell due since the previous message, then applies the message itself.

use super::Message;
use crate::navigator::{InputEvent, Navigation, SectionNavigator};
use crate::ui::indicator_panel::{self, DotAnimations};
use crate::ui::navbar;
use crate::ui::section_surface::{FrameClock, SectionSurface};
use iced::Task;

/// Mutable application state touched by an update.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut SectionNavigator<SectionSurface>,
    pub dots: &'a mut DotAnimations,
    pub clock: &'a FrameClock,
    pub now_ms: u64,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    ctx.clock.set(ctx.now_ms);

    for outcome in ctx.navigator.advance(ctx.now_ms) {
        log_outcome("wheel", &outcome);
    }

    if let Some(event) = input_for(message) {
        let source = source_name(&event);
        if let Some(outcome) = ctx.navigator.handle_input(event, ctx.now_ms) {
            log_outcome(source, &outcome);
        }
    }

    ctx.dots.sync(ctx.navigator.indicators(), ctx.now_ms);
    Task::none()
}

/// Navigator input carried by a message. Ticks carry none.
fn input_for(message: Message) -> Option<InputEvent> {
    match message {
        Message::Input(event) => Some(event),
        Message::Navbar(navbar::Message::LinkPressed(href)) => {
            Some(InputEvent::NavLinkClicked(href))
        }
        Message::Indicator(indicator_panel::Message::Clicked(index)) => {
            Some(InputEvent::IndicatorClicked(index))
        }
        Message::Indicator(indicator_panel::Message::Entered(index)) => {
            Some(InputEvent::IndicatorEntered(index))
        }
        Message::Indicator(indicator_panel::Message::Left(index)) => {
            Some(InputEvent::IndicatorLeft(index))
        }
        Message::Tick(_) => None,
    }
}

fn source_name(event: &InputEvent) -> &'static str {
    match event {
        InputEvent::Wheel { .. } => "wheel",
        InputEvent::TouchStart { .. }
        | InputEvent::TouchEnd { .. }
        | InputEvent::TouchCancel { .. } => "touch",
        InputEvent::Key(_) => "keyboard",
        InputEvent::NavLinkClicked(_) => "nav link",
        InputEvent::IndicatorClicked(_)
        | InputEvent::IndicatorEntered(_)
        | InputEvent::IndicatorLeft(_) => "indicator",
    }
}

fn log_outcome(source: &str, outcome: &Navigation) {
    match outcome {
        Navigation::Started { from, to, .. } => {
            tracing::info!(source, from, to, "navigating to section");
        }
        Navigation::Ignored(reason) => {
            tracing::debug!(source, ?reason, "navigation request dropped");
        }
    }
}
