// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing every section surface at its interpolated position.
//!
//! Panels are painted in z-order, lowest first; panels with equal z-order keep
//! page order, so a later section covers an earlier one. Opacity applies to
//! the whole panel, background included.
//!
//! Uses f32 for canvas coordinates; text metrics are estimates.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section_surface::SectionSurface;
use crate::ui::theming::{faded, ColorScheme};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme};

/// Average glyph width relative to the font size, used to wrap body text.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

/// Fraction of the viewport height where the section heading starts.
const HEADING_TOP_RATIO: f32 = 0.35;

/// Localized copy shown on a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionText {
    pub title: String,
    pub body: String,
}

/// Canvas program painting the section stack.
pub struct SectionStage<'a> {
    surfaces: &'a [SectionSurface],
    texts: &'a [SectionText],
    scheme: &'a ColorScheme,
    now_ms: u64,
}

impl<'a> SectionStage<'a> {
    #[must_use]
    pub fn new(
        surfaces: &'a [SectionSurface],
        texts: &'a [SectionText],
        scheme: &'a ColorScheme,
        now_ms: u64,
    ) -> Self {
        Self {
            surfaces,
            texts,
            scheme,
            now_ms,
        }
    }

    /// Full-window canvas element.
    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Visible surfaces in paint order.
    fn paint_order(&self) -> Vec<&'a SectionSurface> {
        let mut order: Vec<&SectionSurface> = self
            .surfaces
            .iter()
            .filter(|surface| surface.is_visible(self.now_ms))
            .collect();
        order.sort_by_key(|surface| surface.z_order());
        order
    }

    fn draw_surface(&self, frame: &mut Frame, bounds: Rectangle, surface: &SectionSurface) {
        let alpha = surface.opacity_at(self.now_ms);
        let top = surface.translate_at(self.now_ms) * bounds.height;
        let index = surface.role().index();

        frame.fill_rectangle(
            Point::new(0.0, top),
            bounds.size(),
            faded(self.scheme.section_background(index), alpha),
        );

        let Some(text) = self.texts.get(index) else {
            return;
        };

        let left = spacing::XXL;
        let heading_top = top + bounds.height * HEADING_TOP_RATIO;
        frame.fill_text(Text {
            content: text.title.clone(),
            position: Point::new(left, heading_top),
            color: faded(self.scheme.text_primary, alpha),
            size: typography::DISPLAY.into(),
            ..Text::default()
        });

        let text_width = (bounds.width - 2.0 * left).min(sizing::SECTION_TEXT_MAX_WIDTH);
        let line_height = typography::BODY_LG * typography::LINE_HEIGHT;
        let body_top = heading_top + typography::DISPLAY * typography::LINE_HEIGHT + spacing::MD;
        for (line_index, line) in wrap_lines(&text.body, chars_per_line(text_width))
            .into_iter()
            .enumerate()
        {
            frame.fill_text(Text {
                content: line,
                position: Point::new(left, body_top + line_index as f32 * line_height),
                color: faded(self.scheme.text_secondary, alpha),
                size: typography::BODY_LG.into(),
                ..Text::default()
            });
        }
    }
}

impl<Message> canvas::Program<Message> for SectionStage<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for surface in self.paint_order() {
            self.draw_surface(&mut frame, bounds, surface);
        }
        vec![frame.into_geometry()]
    }
}

/// Characters that fit on a body line `width` pixels wide (at least 10).
fn chars_per_line(width: f32) -> usize {
    let estimate = width / (typography::BODY_LG * GLYPH_WIDTH_RATIO);
    if estimate.is_finite() && estimate > 10.0 {
        estimate.floor() as usize
    } else {
        10
    }
}

/// Greedy word wrap on whitespace. Words longer than `max_chars` get a line of their own.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
