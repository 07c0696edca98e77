// SPDX-License-Identifier: MPL-2.0
//! Animated section panel backing the navigator in the iced window.
//!
//! Each property the navigator sets becomes the target of a tween that starts
//! from the value currently on screen, so a panel retargeted mid-flight keeps
//! moving smoothly. Z-order changes apply at once.

use crate::navigator::{CubicBezier, PanelStyle, SectionRole, Tween, VisualPanel};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared millisecond clock read by every surface when a property changes.
///
/// The application sets it once per update, before handing control to the
/// navigator, so all tweens started during that update share a start time.
#[derive(Debug, Clone, Default)]
pub struct FrameClock(Arc<AtomicU64>);

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now_ms: u64) {
        self.0.store(now_ms, Ordering::Relaxed);
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// One full-viewport section as drawn by [`super::section_stage`].
#[derive(Debug, Clone)]
pub struct SectionSurface {
    role: SectionRole,
    clock: FrameClock,
    translate: Tween,
    opacity: Tween,
    z_order: i32,
}

impl SectionSurface {
    /// Creates a surface already resting in its page-load style.
    #[must_use]
    pub fn new(role: SectionRole, clock: FrameClock, transition_ms: u64) -> Self {
        let style = PanelStyle::initial(role.index());
        Self {
            role,
            clock,
            translate: Tween::at_rest(style.translate_y, transition_ms, CubicBezier::SECTION),
            opacity: Tween::at_rest(style.opacity, transition_ms, CubicBezier::SECTION),
            z_order: style.z_order,
        }
    }

    /// One surface per section role, in page order.
    #[must_use]
    pub fn stack(clock: &FrameClock, transition_ms: u64) -> Vec<Self> {
        SectionRole::ALL
            .iter()
            .map(|role| Self::new(*role, clock.clone(), transition_ms))
            .collect()
    }

    #[must_use]
    pub fn role(&self) -> SectionRole {
        self.role
    }

    #[must_use]
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    /// Interpolated vertical offset, as a fraction of the viewport height.
    #[must_use]
    pub fn translate_at(&self, now_ms: u64) -> f32 {
        self.translate.value_at(now_ms)
    }

    #[must_use]
    pub fn opacity_at(&self, now_ms: u64) -> f32 {
        self.opacity.value_at(now_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.translate.is_running(now_ms) || self.opacity.is_running(now_ms)
    }

    /// Whether any part of the panel can be seen at `now_ms`.
    #[must_use]
    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.opacity_at(now_ms) > 0.0 && self.translate_at(now_ms).abs() < 1.0
    }
}

impl VisualPanel for SectionSurface {
    fn set_transform(&mut self, translate_y: f32) {
        self.translate.retarget(translate_y, self.clock.now());
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity.retarget(opacity, self.clock.now());
    }

    fn set_z_order(&mut self, z_order: i32) {
        self.z_order = z_order;
    }
}
