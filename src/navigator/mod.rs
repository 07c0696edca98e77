// SPDX-License-Identifier: MPL-2.0
//! Full-screen section navigation.
//!
//! [`SectionNavigator`] owns an ordered, fixed set of full-viewport panels and
//! moves between them one animated transition at a time. Every input source
//! (wheel, touch, keyboard, nav links, indicator dots) ends up in
//! [`SectionNavigator::go_to_section`], which drops the request while a
//! transition is still running instead of queueing it.
//!
//! The navigator never reads a clock. Callers pass the current time in
//! milliseconds, and delayed work (settling the incoming panel, releasing the
//! lock, debounced wheel events) lives in a [`Scheduler`] that
//! [`SectionNavigator::advance`] drains.
//!
//! # Example
//!
//! ```
//! use iced_folio::navigator::{InputEvent, NavKey, RecordingPanel, SectionNavigator, Timings};
//!
//! let panels = RecordingPanel::stack(5);
//! let mut navigator = SectionNavigator::new(panels, ["#about"], Timings::default());
//!
//! navigator.handle_input(InputEvent::Key(NavKey::End), 0);
//! assert_eq!(navigator.current_section(), 4);
//! assert!(navigator.is_animating());
//!
//! navigator.advance(800);
//! assert!(!navigator.is_animating());
//! ```

pub mod easing;
pub mod indicator;
pub mod input;
pub mod nav_links;
pub mod panel;
pub mod scheduler;
pub mod section;
pub mod style;

pub use easing::{CubicBezier, Tween};
pub use indicator::{DotState, DotStyle, Indicators};
pub use input::{InputEvent, NavKey, SwipeTracker, WheelDebounce};
pub use nav_links::{NavLink, NavLinks};
pub use panel::{PanelCall, PanelStyle, RecordingPanel, VisualPanel, Z_ACTIVE, Z_RESTING};
pub use scheduler::{Scheduled, Scheduler, Task, TimerHandle};
pub use section::{Direction, DisplayState, SectionRole};
pub use style::Rgb;

use crate::app::config::{
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TRANSITION_MS,
    DEFAULT_WHEEL_DEBOUNCE_MS, MAX_SETTLE_DELAY_MS, MAX_SWIPE_THRESHOLD_PX, MAX_TRANSITION_MS,
    MAX_WHEEL_DEBOUNCE_MS, MIN_SETTLE_DELAY_MS, MIN_SWIPE_THRESHOLD_PX, MIN_TRANSITION_MS,
    MIN_WHEEL_DEBOUNCE_MS,
};

/// Delays and thresholds used by the navigator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    wheel_debounce_ms: u64,
    swipe_threshold_px: f32,
    transition_ms: u64,
    settle_delay_ms: u64,
}

impl Timings {
    /// Clamps every value into its supported range.
    ///
    /// The settle delay never exceeds the transition time, so the incoming
    /// panel always settles before the lock is released.
    #[must_use]
    pub fn new(
        wheel_debounce_ms: u64,
        swipe_threshold_px: f32,
        transition_ms: u64,
        settle_delay_ms: u64,
    ) -> Self {
        let transition_ms = transition_ms.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS);
        let settle_delay_ms = settle_delay_ms
            .clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS)
            .min(transition_ms);
        let swipe_threshold_px = if swipe_threshold_px.is_finite() {
            swipe_threshold_px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX
        };
        Self {
            wheel_debounce_ms: wheel_debounce_ms
                .clamp(MIN_WHEEL_DEBOUNCE_MS, MAX_WHEEL_DEBOUNCE_MS),
            swipe_threshold_px,
            transition_ms,
            settle_delay_ms,
        }
    }

    /// Idle time after the last wheel event before it is acted on.
    #[must_use]
    pub fn wheel_debounce_ms(&self) -> u64 {
        self.wheel_debounce_ms
    }

    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        self.swipe_threshold_px
    }

    /// Length of a panel transition; also the lock cool-down.
    #[must_use]
    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    #[must_use]
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::new(
            DEFAULT_WHEEL_DEBOUNCE_MS,
            DEFAULT_SWIPE_THRESHOLD_PX,
            DEFAULT_TRANSITION_MS,
            DEFAULT_SETTLE_DELAY_MS,
        )
    }
}

/// Why a section request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A transition is still running.
    Animating,
    OutOfRange,
    AlreadyActive,
}

/// Outcome of a section request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Started {
        from: usize,
        to: usize,
        direction: Direction,
    },
    Ignored(IgnoreReason),
}

impl Navigation {
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Navigation::Started { .. })
    }
}

/// Snapshot of the navigator's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub current_section: usize,
    pub is_animating: bool,
}

/// Drives panels, indicator dots and nav links from the active section index.
#[derive(Debug)]
pub struct SectionNavigator<P: VisualPanel> {
    panels: Vec<P>,
    current: usize,
    animating: bool,
    indicators: Indicators,
    nav_links: NavLinks,
    scheduler: Scheduler,
    wheel: WheelDebounce,
    swipe: SwipeTracker,
    timings: Timings,
}

impl<P: VisualPanel> SectionNavigator<P> {
    /// Takes ownership of `panels` and puts them in their page-load state:
    /// the first is shown, all others wait below the viewport.
    pub fn new<I, S>(mut panels: Vec<P>, hrefs: I, timings: Timings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (index, panel) in panels.iter_mut().enumerate() {
            let style = PanelStyle::initial(index);
            panel.set_transform(style.translate_y);
            panel.set_opacity(style.opacity);
            panel.set_z_order(style.z_order);
        }

        let mut nav_links = NavLinks::new(hrefs);
        nav_links.refresh(0);

        Self {
            indicators: Indicators::new(panels.len(), 0),
            panels,
            current: 0,
            animating: false,
            nav_links,
            scheduler: Scheduler::new(),
            wheel: WheelDebounce::default(),
            swipe: SwipeTracker::default(),
            timings,
        }
    }

    /// Starts a transition to `target`.
    ///
    /// The outgoing panel leaves in the direction of travel while the incoming
    /// one is parked on the opposite side; it settles into view after the
    /// settle delay. `current_section` and the indicators change immediately,
    /// the lock is released once the transition time has passed.
    ///
    /// Timers due at or before `now_ms` run first, so a request made after
    /// the cool-down is honoured even if [`advance`](Self::advance) was not
    /// called in between.
    pub fn go_to_section(&mut self, target: isize, now_ms: u64) -> Navigation {
        self.advance(now_ms);
        self.request(target, now_ms)
    }

    fn request(&mut self, target: isize, now_ms: u64) -> Navigation {
        let requested = target;
        if self.animating {
            return self.ignore(requested, IgnoreReason::Animating);
        }
        let Some(target) = usize::try_from(target)
            .ok()
            .filter(|index| *index < self.panels.len())
        else {
            return self.ignore(requested, IgnoreReason::OutOfRange);
        };
        if target == self.current {
            return self.ignore(requested, IgnoreReason::AlreadyActive);
        }

        self.animating = true;
        let from = self.current;
        let direction = Direction::between(from, target);
        let offset = direction.offset();

        if let Some(outgoing) = self.panels.get_mut(from) {
            outgoing.set_transform(-offset);
            outgoing.set_opacity(0.0);
            outgoing.set_z_order(Z_RESTING);
        }
        if let Some(incoming) = self.panels.get_mut(target) {
            incoming.set_z_order(Z_ACTIVE);
            incoming.set_transform(offset);
            incoming.set_opacity(0.0);
        }
        self.scheduler.schedule(
            now_ms + self.timings.settle_delay_ms,
            Task::SettleIncoming { section: target },
        );

        self.current = target;
        self.indicators.refresh(target);
        self.nav_links.refresh(target);

        self.scheduler
            .schedule(now_ms + self.timings.transition_ms, Task::ReleaseLock);

        tracing::debug!(from, to = target, ?direction, "section transition started");
        Navigation::Started {
            from,
            to: target,
            direction,
        }
    }

    /// Routes one input event.
    ///
    /// Returns the outcome when the event asked for a section right away.
    /// Wheel events only arm the debounce timer and hover events only touch
    /// the indicators, so both return `None`. Due timers run before the
    /// event is applied.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Option<Navigation> {
        self.advance(now_ms);
        match event {
            InputEvent::Wheel { delta_y } => {
                self.wheel.push(
                    &mut self.scheduler,
                    now_ms,
                    self.timings.wheel_debounce_ms,
                    delta_y,
                );
                None
            }
            InputEvent::TouchStart { finger, y } => {
                self.swipe.start(finger, y);
                None
            }
            InputEvent::TouchEnd { finger, y } => {
                let direction =
                    self.swipe
                        .finish(finger, y, self.timings.swipe_threshold_px)?;
                Some(self.step(direction, now_ms))
            }
            InputEvent::TouchCancel { finger } => {
                self.swipe.cancel(finger);
                None
            }
            InputEvent::Key(key) => {
                let target = key.target(self.current, self.panels.len());
                Some(self.request(target, now_ms))
            }
            InputEvent::NavLinkClicked(href) => {
                let Some(index) = nav_links::section_for(&nav_links::link_name(&href)) else {
                    tracing::trace!(%href, "nav link has no section");
                    return None;
                };
                let target = isize::try_from(index).unwrap_or(isize::MAX);
                Some(self.request(target, now_ms))
            }
            InputEvent::IndicatorClicked(index) => {
                let target = isize::try_from(index).unwrap_or(isize::MAX);
                Some(self.request(target, now_ms))
            }
            InputEvent::IndicatorEntered(index) => {
                self.indicators.hover_enter(index, self.current);
                None
            }
            InputEvent::IndicatorLeft(index) => {
                self.indicators.hover_leave(index, self.current);
                None
            }
        }
    }

    /// Runs every scheduled task due at or before `now_ms`, oldest first.
    ///
    /// Each task runs at its own due time, so a debounced wheel event that
    /// starts a transition schedules its follow-ups from when it fired.
    /// Returns the outcome of every wheel event that fired.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Navigation> {
        let mut outcomes = Vec::new();
        while let Some(entry) = self.scheduler.pop_due(now_ms) {
            match entry.task {
                Task::SettleIncoming { section } => {
                    if let Some(panel) = self.panels.get_mut(section) {
                        panel.set_transform(0.0);
                        panel.set_opacity(1.0);
                    }
                }
                Task::ReleaseLock => {
                    self.animating = false;
                    tracing::trace!(section = self.current, "transition lock released");
                }
                Task::WheelFire { delta_y } => {
                    self.wheel.fired(entry.handle);
                    outcomes.push(self.step(Direction::from_wheel(delta_y), entry.due_ms));
                }
            }
        }
        outcomes
    }

    fn step(&mut self, direction: Direction, now_ms: u64) -> Navigation {
        let current = isize::try_from(self.current).unwrap_or(isize::MAX);
        self.request(current + direction.step(), now_ms)
    }

    fn ignore(&self, target: isize, reason: IgnoreReason) -> Navigation {
        tracing::trace!(
            requested = target,
            current = self.current,
            ?reason,
            "section request ignored"
        );
        Navigation::Ignored(reason)
    }

    #[must_use]
    pub fn current_section(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            current_section: self.current,
            is_animating: self.animating,
        }
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    #[must_use]
    pub fn nav_links(&self) -> &NavLinks {
        &self.nav_links
    }

    #[must_use]
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    #[must_use]
    pub fn panel(&self, index: usize) -> Option<&P> {
        self.panels.get(index)
    }

    /// Earliest time at which [`Self::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: [&str; 4] = ["#about", "#projects", "#skills", "#contact"];

    fn navigator() -> SectionNavigator<RecordingPanel> {
        SectionNavigator::new(RecordingPanel::stack(5), LINKS, Timings::default())
    }

    fn styles(navigator: &SectionNavigator<RecordingPanel>) -> Vec<PanelStyle> {
        navigator.panels().iter().map(RecordingPanel::style).collect()
    }

    #[test]
    fn new_shows_first_section_only() {
        let navigator = navigator();
        let styles = styles(&navigator);

        assert_eq!(styles[0], PanelStyle::ACTIVE);
        assert!(styles[1..].iter().all(|style| *style == PanelStyle::BELOW));
        assert_eq!(navigator.indicators().active_index(), Some(0));
        assert!(navigator.nav_links().iter().all(|link| !link.is_highlighted()));
        assert_eq!(navigator.next_deadline(), None);
    }

    #[test]
    fn valid_target_changes_section_immediately() {
        let mut navigator = navigator();
        let outcome = navigator.go_to_section(2, 0);

        assert_eq!(
            outcome,
            Navigation::Started {
                from: 0,
                to: 2,
                direction: Direction::Down
            }
        );
        assert_eq!(
            navigator.state(),
            NavigatorState {
                current_section: 2,
                is_animating: true
            }
        );
        assert_eq!(navigator.indicators().active_index(), Some(2));
        let highlighted: Vec<&str> = navigator
            .nav_links()
            .iter()
            .filter(|link| link.is_highlighted())
            .map(NavLink::href)
            .collect();
        assert_eq!(highlighted, vec!["#projects"]);
    }

    #[test]
    fn invalid_targets_are_ignored() {
        let mut navigator = navigator();

        assert_eq!(
            navigator.go_to_section(0, 0),
            Navigation::Ignored(IgnoreReason::AlreadyActive)
        );
        assert_eq!(
            navigator.go_to_section(-1, 0),
            Navigation::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(
            navigator.go_to_section(5, 0),
            Navigation::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(navigator.current_section(), 0);
        assert!(!navigator.is_animating());
        assert!(navigator.panels().iter().all(|panel| panel.calls().len() == 3));
    }

    #[test]
    fn second_request_during_cooldown_is_dropped() {
        let mut navigator = navigator();
        assert!(navigator.go_to_section(1, 0).is_started());
        assert_eq!(
            navigator.go_to_section(3, 400),
            Navigation::Ignored(IgnoreReason::Animating)
        );

        navigator.advance(799);
        assert!(navigator.is_animating());
        navigator.advance(800);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.current_section(), 1);

        assert!(navigator.go_to_section(3, 800).is_started());
        assert_eq!(navigator.current_section(), 3);
    }

    #[test]
    fn incoming_panel_is_parked_then_settles() {
        let mut navigator = navigator();
        for panel in &mut navigator.panels {
            panel.clear_calls();
        }

        navigator.go_to_section(1, 1_000);

        let outgoing = navigator.panel(0).map(RecordingPanel::style);
        assert_eq!(
            outgoing,
            Some(PanelStyle {
                translate_y: -1.0,
                opacity: 0.0,
                z_order: Z_RESTING
            })
        );
        assert_eq!(
            navigator.panel(1).map(RecordingPanel::calls),
            Some(
                &[
                    PanelCall::ZOrder(Z_ACTIVE),
                    PanelCall::Transform(1.0),
                    PanelCall::Opacity(0.0)
                ][..]
            )
        );

        navigator.advance(1_049);
        assert_eq!(
            navigator.panel(1).map(|panel| panel.style().translate_y),
            Some(1.0)
        );

        navigator.advance(1_050);
        assert_eq!(
            navigator.panel(1).map(RecordingPanel::style),
            Some(PanelStyle::ACTIVE)
        );
        assert!(navigator.is_animating());
    }

    #[test]
    fn moving_up_parks_incoming_panel_above() {
        let mut navigator = navigator();
        navigator.go_to_section(3, 0);
        navigator.advance(800);

        navigator.go_to_section(1, 800);
        assert_eq!(
            navigator.panel(3).map(|panel| panel.style().translate_y),
            Some(1.0)
        );
        assert_eq!(
            navigator.panel(1).map(|panel| panel.style().display_state()),
            Some(DisplayState::HiddenAbove)
        );
    }

    #[test]
    fn wheel_burst_fires_once_after_idle() {
        let mut navigator = navigator();
        for at in [0, 10, 20] {
            assert_eq!(navigator.handle_input(InputEvent::Wheel { delta_y: 120.0 }, at), None);
        }

        assert!(navigator.advance(69).is_empty());
        assert_eq!(navigator.current_section(), 0);

        let outcomes = navigator.advance(70);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(navigator.current_section(), 1);
    }

    #[test]
    fn wheel_uses_section_at_fire_time() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::Key(NavKey::End), 0);
        navigator.advance(800);

        navigator.handle_input(InputEvent::Wheel { delta_y: -3.0 }, 800);
        navigator.advance(850);
        assert_eq!(navigator.current_section(), 3);
    }

    #[test]
    fn wheel_fire_schedules_from_its_due_time() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::Wheel { delta_y: 1.0 }, 0);

        // Clock jumps well past the debounce in one tick.
        navigator.advance(2_000);
        assert_eq!(navigator.current_section(), 1);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn keys_navigate() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::Key(NavKey::PageDown), 0);
        assert_eq!(navigator.current_section(), 1);
        navigator.advance(800);

        assert_eq!(
            navigator.handle_input(InputEvent::Key(NavKey::Home), 800),
            Some(Navigation::Started {
                from: 1,
                to: 0,
                direction: Direction::Up
            })
        );
        navigator.advance(1_600);

        assert_eq!(
            navigator.handle_input(InputEvent::Key(NavKey::ArrowUp), 1_600),
            Some(Navigation::Ignored(IgnoreReason::OutOfRange))
        );
    }

    #[test]
    fn swipe_moves_one_section() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::TouchStart { finger: 0, y: 500.0 }, 0);
        navigator.handle_input(InputEvent::TouchEnd { finger: 0, y: 400.0 }, 10);
        assert_eq!(navigator.current_section(), 1);
    }

    #[test]
    fn second_finger_does_not_restart_swipe() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::TouchStart { finger: 0, y: 500.0 }, 0);
        navigator.handle_input(InputEvent::TouchStart { finger: 1, y: 380.0 }, 5);

        assert_eq!(
            navigator.handle_input(InputEvent::TouchEnd { finger: 1, y: 400.0 }, 10),
            None
        );
        assert_eq!(navigator.current_section(), 0);

        assert!(navigator
            .handle_input(InputEvent::TouchEnd { finger: 0, y: 400.0 }, 20)
            .is_some_and(|outcome| outcome.is_started()));
        assert_eq!(navigator.current_section(), 1);
    }

    #[test]
    fn lost_finger_abandons_swipe() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::TouchStart { finger: 0, y: 500.0 }, 0);
        navigator.handle_input(InputEvent::TouchCancel { finger: 0 }, 5);

        assert_eq!(
            navigator.handle_input(InputEvent::TouchEnd { finger: 0, y: 100.0 }, 10),
            None
        );
        assert_eq!(navigator.current_section(), 0);
    }

    #[test]
    fn request_after_cooldown_runs_due_timers_first() {
        let mut navigator = navigator();
        assert!(navigator.go_to_section(1, 0).is_started());

        // No advance in between: the lock release is already due.
        assert_eq!(
            navigator.go_to_section(3, 5_000),
            Navigation::Started {
                from: 1,
                to: 3,
                direction: Direction::Down
            }
        );
        assert_eq!(navigator.current_section(), 3);
        assert_eq!(
            navigator.panel(1).map(|panel| panel.style().display_state()),
            Some(DisplayState::HiddenAbove)
        );
    }

    #[test]
    fn key_after_cooldown_runs_due_timers_first() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::Key(NavKey::ArrowDown), 0);

        assert!(navigator
            .handle_input(InputEvent::Key(NavKey::ArrowDown), 5_000)
            .is_some_and(|outcome| outcome.is_started()));
        assert_eq!(navigator.current_section(), 2);
    }

    #[test]
    fn overdue_wheel_fires_before_next_burst() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::Wheel { delta_y: 120.0 }, 0);
        // The first burst went idle at 50 ms; this is a new gesture.
        navigator.handle_input(InputEvent::Wheel { delta_y: 120.0 }, 1_000);
        assert_eq!(navigator.current_section(), 1);

        navigator.advance(5_000);
        assert_eq!(navigator.current_section(), 2);
    }

    #[test]
    fn unmapped_nav_link_does_nothing() {
        let mut navigator = navigator();
        assert_eq!(
            navigator.handle_input(InputEvent::NavLinkClicked("#skills".into()), 0),
            None
        );
        assert_eq!(navigator.current_section(), 0);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn indicator_hover_is_forwarded() {
        let mut navigator = navigator();
        navigator.handle_input(InputEvent::IndicatorEntered(2), 0);
        assert_eq!(navigator.indicators().state(2), Some(DotState::Preview));
        navigator.handle_input(InputEvent::IndicatorLeft(2), 0);
        assert_eq!(navigator.indicators().state(2), Some(DotState::Inactive));
    }

    #[test]
    fn timings_are_clamped() {
        let timings = Timings::new(0, f32::NAN, 10_000, 9_000);
        assert_eq!(timings.wheel_debounce_ms(), MIN_WHEEL_DEBOUNCE_MS);
        assert_eq!(timings.swipe_threshold_px(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(timings.transition_ms(), MAX_TRANSITION_MS);
        assert_eq!(timings.settle_delay_ms(), MAX_SETTLE_DELAY_MS);

        let short = Timings::new(50, 50.0, 100, 500);
        assert_eq!(short.settle_delay_ms(), 100);
    }
}
