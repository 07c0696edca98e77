// SPDX-License-Identifier: MPL-2.0
//! Indicator dots, one per section.
//!
//! Dots are owned by the navigator. Their visual state is a pure function of
//! the current section plus a transient hover preview.

use super::style::{Rgb, ACCENT, HOVER, NEUTRAL};

/// Scale of the dot marking the current section.
pub const ACTIVE_SCALE: f32 = 1.3;

/// Scale previewed while hovering an inactive dot.
pub const HOVER_SCALE: f32 = 1.2;

/// Scale of every other dot.
pub const REST_SCALE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Active,
    Inactive,
    /// Inactive dot under the pointer.
    Preview,
}

/// Visual properties a dot is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub fill: Rgb,
    pub scale: f32,
    /// Border colour; `None` draws a transparent border of the same width.
    pub border: Option<Rgb>,
}

impl DotState {
    #[must_use]
    pub fn style(self) -> DotStyle {
        match self {
            DotState::Active => DotStyle {
                fill: ACCENT,
                scale: ACTIVE_SCALE,
                border: Some(ACCENT),
            },
            DotState::Inactive => DotStyle {
                fill: NEUTRAL,
                scale: REST_SCALE,
                border: None,
            },
            DotState::Preview => DotStyle {
                fill: HOVER,
                scale: HOVER_SCALE,
                border: None,
            },
        }
    }
}

/// The indicator panel's dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    dots: Vec<DotState>,
}

impl Indicators {
    /// Creates `count` dots with `current` already highlighted.
    #[must_use]
    pub fn new(count: usize, current: usize) -> Self {
        let mut indicators = Self {
            dots: vec![DotState::Inactive; count],
        };
        indicators.refresh(current);
        indicators
    }

    /// Marks `current` active and resets every other dot, dropping any hover preview.
    pub fn refresh(&mut self, current: usize) {
        for (index, dot) in self.dots.iter_mut().enumerate() {
            *dot = if index == current {
                DotState::Active
            } else {
                DotState::Inactive
            };
        }
    }

    /// Pointer entered dot `index`. The active dot is left alone.
    pub fn hover_enter(&mut self, index: usize, current: usize) {
        if index == current {
            return;
        }
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = DotState::Preview;
        }
    }

    /// Pointer left dot `index`. Reverts the preview unless the dot became active.
    pub fn hover_leave(&mut self, index: usize, current: usize) {
        if index == current {
            return;
        }
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = DotState::Inactive;
        }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<DotState> {
        self.dots.get(index).copied()
    }

    /// Index of the active dot, if exactly one is active.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let mut active = self
            .dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| **dot == DotState::Active)
            .map(|(index, _)| index);
        match (active.next(), active.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = DotState> + '_ {
        self.dots.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}
