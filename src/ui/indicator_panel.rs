// SPDX-License-Identifier: MPL-2.0
//! Vertical column of indicator dots on the right edge of the window.
//!
//! The navigator decides which state each dot is in; this module eases the
//! fill colour, size and border of every dot towards that state, the way a
//! CSS transition on the dot would.

use crate::app::config::INDICATOR_TRANSITION_MS;
use crate::navigator::indicator::ACTIVE_SCALE;
use crate::navigator::{CubicBezier, DotState, DotStyle, Indicators, Rgb, Tween};
use crate::ui::design_tokens::{border, sizing};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, tooltip, Column, Container, Space};
use iced::{mouse, Color, Element, Length, Padding};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Clicked(usize),
    Entered(usize),
    Left(usize),
}

/// Outer size of a dot at rest, border included.
const DOT_BOX: f32 = sizing::INDICATOR_DOT + 2.0 * border::WIDTH_MD;

/// Every dot sits in a cell large enough for its biggest state, so growing
/// dots do not push their neighbours around.
const DOT_CELL: f32 = DOT_BOX * ACTIVE_SCALE;

/// Column spacing that keeps the rest-state pitch of box plus gap.
const CELL_SPACING: f32 = sizing::INDICATOR_GAP - (DOT_CELL - DOT_BOX);

/// Eased visual state of one dot.
#[derive(Debug, Clone)]
pub struct DotAnimation {
    state: DotState,
    fill_from: Rgb,
    fill_to: Rgb,
    fill_progress: Tween,
    scale: Tween,
    border_alpha: Tween,
    border_color: Option<Rgb>,
}

impl DotAnimation {
    fn at_rest(state: DotState) -> Self {
        let style = state.style();
        Self {
            state,
            fill_from: style.fill,
            fill_to: style.fill,
            fill_progress: Tween::at_rest(1.0, INDICATOR_TRANSITION_MS, CubicBezier::EASE),
            scale: Tween::at_rest(style.scale, INDICATOR_TRANSITION_MS, CubicBezier::EASE),
            border_alpha: Tween::at_rest(
                border_alpha_for(style),
                INDICATOR_TRANSITION_MS,
                CubicBezier::EASE,
            ),
            border_color: style.border,
        }
    }

    fn retarget(&mut self, state: DotState, now_ms: u64) {
        if state == self.state {
            return;
        }
        let style = state.style();
        self.fill_from = self.fill_at(now_ms);
        self.fill_to = style.fill;
        self.fill_progress = Tween::at_rest(0.0, INDICATOR_TRANSITION_MS, CubicBezier::EASE);
        self.fill_progress.retarget(1.0, now_ms);
        self.scale.retarget(style.scale, now_ms);
        self.border_alpha.retarget(border_alpha_for(style), now_ms);
        // A fading border keeps its last colour
        if style.border.is_some() {
            self.border_color = style.border;
        }
        self.state = state;
    }

    #[must_use]
    pub fn state(&self) -> DotState {
        self.state
    }

    #[must_use]
    pub fn fill_at(&self, now_ms: u64) -> Rgb {
        self.fill_from
            .mix(self.fill_to, self.fill_progress.value_at(now_ms))
    }

    #[must_use]
    pub fn scale_at(&self, now_ms: u64) -> f32 {
        self.scale.value_at(now_ms)
    }

    #[must_use]
    pub fn border_alpha_at(&self, now_ms: u64) -> f32 {
        self.border_alpha.value_at(now_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.fill_progress.is_running(now_ms)
            || self.scale.is_running(now_ms)
            || self.border_alpha.is_running(now_ms)
    }

    /// Style handed to the container for the border colour.
    fn border_style(&self) -> DotStyle {
        DotStyle {
            border: self.border_color,
            ..self.state.style()
        }
    }
}

fn border_alpha_for(style: DotStyle) -> f32 {
    if style.border.is_some() {
        1.0
    } else {
        0.0
    }
}

/// Animations for every dot, kept in step with the navigator's indicators.
#[derive(Debug, Clone, Default)]
pub struct DotAnimations {
    dots: Vec<DotAnimation>,
}

impl DotAnimations {
    #[must_use]
    pub fn new(indicators: &Indicators) -> Self {
        Self {
            dots: indicators.iter().map(DotAnimation::at_rest).collect(),
        }
    }

    /// Starts a transition on every dot whose state changed since the last sync.
    pub fn sync(&mut self, indicators: &Indicators, now_ms: u64) {
        if self.dots.len() != indicators.len() {
            *self = Self::new(indicators);
            return;
        }
        for (dot, state) in self.dots.iter_mut().zip(indicators.iter()) {
            dot.retarget(state, now_ms);
        }
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.dots.iter().any(|dot| dot.is_animating(now_ms))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DotAnimation> {
        self.dots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DotAnimation> {
        self.dots.iter()
    }
}

/// Contextual data needed to render the indicator panel.
pub struct ViewContext<'a> {
    pub dots: &'a DotAnimations,
    /// Localized section titles, shown as tooltips.
    pub titles: &'a [String],
    pub now_ms: u64,
}

/// Renders the dots, vertically centred against the right edge.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(CELL_SPACING)
        .align_x(Horizontal::Center);

    for (index, dot) in ctx.dots.iter().enumerate() {
        let size = DOT_BOX * dot.scale_at(ctx.now_ms);
        let face = Container::new(Space::new())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(styles::container::indicator_dot(
                Color::from(dot.fill_at(ctx.now_ms)),
                dot.border_style(),
                dot.border_alpha_at(ctx.now_ms),
            ));

        let cell = Container::new(face)
            .width(Length::Fixed(DOT_CELL))
            .height(Length::Fixed(DOT_CELL))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let interactive = mouse_area(cell)
            .on_press(Message::Clicked(index))
            .on_enter(Message::Entered(index))
            .on_exit(Message::Left(index))
            .interaction(mouse::Interaction::Pointer);

        let title = ctx.titles.get(index).cloned().unwrap_or_default();
        column = column.push(styles::tooltip::styled(
            interactive,
            title,
            tooltip::Position::Left,
        ));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(Padding {
            top: 0.0,
            right: sizing::INDICATOR_EDGE_OFFSET,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}
