// SPDX-License-Identifier: MPL-2.0
//! Capability interface between the navigator and whatever draws the sections.
//!
//! The transition algorithm only ever sets three properties on a panel. Hosts
//! implement [`VisualPanel`] to turn those calls into pixels; tests use
//! [`RecordingPanel`], which keeps the calls instead.

use super::section::DisplayState;

/// Stacking order of the panel on top of the stack.
pub const Z_ACTIVE: i32 = 10;

/// Stacking order of every other panel.
pub const Z_RESTING: i32 = 1;

/// Operations the navigator performs on a section panel.
pub trait VisualPanel {
    /// Vertical translation as a fraction of the viewport height.
    ///
    /// `0.0` is centred, `-1.0` fully above the viewport, `1.0` fully below.
    fn set_transform(&mut self, translate_y: f32);

    /// Opacity in `0.0..=1.0`.
    fn set_opacity(&mut self, opacity: f32);

    /// Stacking order; higher values draw on top.
    fn set_z_order(&mut self, z_order: i32);
}

/// Resting visual properties of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub translate_y: f32,
    pub opacity: f32,
    pub z_order: i32,
}

impl PanelStyle {
    /// Centred, opaque, on top.
    pub const ACTIVE: PanelStyle = PanelStyle {
        translate_y: 0.0,
        opacity: 1.0,
        z_order: Z_ACTIVE,
    };

    /// Parked below the viewport, transparent.
    pub const BELOW: PanelStyle = PanelStyle {
        translate_y: 1.0,
        opacity: 0.0,
        z_order: Z_RESTING,
    };

    /// Style a panel gets when the page first loads: the first section is
    /// shown, all others wait below the viewport.
    #[must_use]
    pub fn initial(index: usize) -> Self {
        if index == 0 {
            Self::ACTIVE
        } else {
            Self::BELOW
        }
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        if self.translate_y < 0.0 {
            DisplayState::HiddenAbove
        } else if self.translate_y > 0.0 {
            DisplayState::HiddenBelow
        } else {
            DisplayState::Visible
        }
    }
}

/// A single call received by a [`RecordingPanel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCall {
    Transform(f32),
    Opacity(f32),
    ZOrder(i32),
}

/// Panel that records every call and tracks the resulting style.
///
/// Used in tests and benchmarks where no rendering surface exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingPanel {
    style: PanelStyle,
    calls: Vec<PanelCall>,
}

impl RecordingPanel {
    #[must_use]
    pub fn new(style: PanelStyle) -> Self {
        Self {
            style,
            calls: Vec::new(),
        }
    }

    /// Builds `count` panels with their page-load styles.
    #[must_use]
    pub fn stack(count: usize) -> Vec<Self> {
        (0..count)
            .map(|index| Self::new(PanelStyle::initial(index)))
            .collect()
    }

    #[must_use]
    pub fn style(&self) -> PanelStyle {
        self.style
    }

    #[must_use]
    pub fn calls(&self) -> &[PanelCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl VisualPanel for RecordingPanel {
    fn set_transform(&mut self, translate_y: f32) {
        self.style.translate_y = translate_y;
        self.calls.push(PanelCall::Transform(translate_y));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.style.opacity = opacity;
        self.calls.push(PanelCall::Opacity(opacity));
    }

    fn set_z_order(&mut self, z_order: i32) {
        self.style.z_order = z_order;
        self.calls.push(PanelCall::ZOrder(z_order));
    }
}
