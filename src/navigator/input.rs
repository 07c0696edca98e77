// SPDX-License-Identifier: MPL-2.0
//! Raw input events and the policies that turn them into section requests.
//!
//! Wheel input is debounced on the scheduler; touch input becomes a swipe
//! only past a distance threshold. Keys, link clicks and dot clicks are
//! forwarded unchanged.

use super::scheduler::{Scheduler, Task, TimerHandle};
use super::section::Direction;

/// Keys the navigator reacts to. All other keys pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
    Home,
    End,
}

impl NavKey {
    /// Target index for this key, before range checks.
    #[must_use]
    pub fn target(self, current: usize, count: usize) -> isize {
        let current = to_signed(current);
        match self {
            NavKey::ArrowDown | NavKey::PageDown => current + 1,
            NavKey::ArrowUp | NavKey::PageUp => current - 1,
            NavKey::Home => 0,
            NavKey::End => to_signed(count) - 1,
        }
    }
}

/// Input delivered to [`super::SectionNavigator::handle_input`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Wheel movement; positive `delta_y` scrolls down.
    Wheel { delta_y: f32 },
    /// Finger `finger` touched the surface at vertical position `y`.
    TouchStart { finger: u64, y: f32 },
    /// Finger `finger` lifted at vertical position `y`.
    TouchEnd { finger: u64, y: f32 },
    /// Finger `finger` was lost without lifting; its gesture is abandoned.
    TouchCancel { finger: u64 },
    Key(NavKey),
    /// A nav link was clicked; carries its `#name` destination.
    NavLinkClicked(String),
    IndicatorClicked(usize),
    IndicatorEntered(usize),
    IndicatorLeft(usize),
}

/// Collapses a burst of wheel events into a single delayed request.
#[derive(Debug, Clone, Default)]
pub struct WheelDebounce {
    pending: Option<TimerHandle>,
}

impl WheelDebounce {
    /// Restarts the idle timer with the latest event's delta.
    pub fn push(&mut self, scheduler: &mut Scheduler, now_ms: u64, delay_ms: u64, delta_y: f32) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule(now_ms + delay_ms, Task::WheelFire { delta_y }));
    }

    /// Forgets the pending handle once its task has fired.
    pub fn fired(&mut self, handle: TimerHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Tracks a single vertical touch gesture.
///
/// Only the first finger down is followed; other fingers are ignored until
/// it lifts or is lost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    active: Option<(u64, f32)>,
}

impl SwipeTracker {
    pub fn start(&mut self, finger: u64, y: f32) {
        if self.active.is_none() {
            self.active = Some((finger, y));
        }
    }

    /// Ends the gesture; returns a direction if it travelled more than `threshold_px`.
    ///
    /// An upward swipe (finger ends above where it started) moves down the page.
    /// A touch end without a recorded start, or from another finger, is ignored.
    pub fn finish(&mut self, finger: u64, end_y: f32, threshold_px: f32) -> Option<Direction> {
        let (tracked, start_y) = self.active?;
        if tracked != finger {
            return None;
        }
        self.active = None;
        let travelled = start_y - end_y;
        if travelled.abs() > threshold_px {
            Some(if travelled > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            })
        } else {
            None
        }
    }

    /// Drops the gesture if `finger` is the one being tracked.
    pub fn cancel(&mut self, finger: u64) {
        if self.active.is_some_and(|(tracked, _)| tracked == finger) {
            self.active = None;
        }
    }
}

fn to_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
