// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Wheel**: Debounce window for mouse wheel bursts
//! - **Touch**: Minimum swipe distance
//! - **Transition**: Section slide duration and settle delay
//! - **Animation**: Indicator dot transition and redraw cadence

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Idle time after the last wheel event before a section change fires.
pub const DEFAULT_WHEEL_DEBOUNCE_MS: u64 = 50;

/// Minimum wheel debounce window.
pub const MIN_WHEEL_DEBOUNCE_MS: u64 = 10;

/// Maximum wheel debounce window.
pub const MAX_WHEEL_DEBOUNCE_MS: u64 = 500;

// ==========================================================================
// Touch Defaults
// ==========================================================================

/// Vertical distance a swipe must exceed to change section (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of a section slide; the navigation lock is held for this long.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Minimum transition duration.
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum transition duration.
pub const MAX_TRANSITION_MS: u64 = 5000;

/// Delay between parking the incoming section off-screen and sliding it in.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// Minimum settle delay.
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 500;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of indicator dot colour and scale changes.
pub const INDICATOR_TRANSITION_MS: u64 = 300;

/// Redraw cadence while anything is animating or scheduled (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Wheel validation
    assert!(MIN_WHEEL_DEBOUNCE_MS > 0);
    assert!(MAX_WHEEL_DEBOUNCE_MS >= MIN_WHEEL_DEBOUNCE_MS);
    assert!(DEFAULT_WHEEL_DEBOUNCE_MS >= MIN_WHEEL_DEBOUNCE_MS);
    assert!(DEFAULT_WHEEL_DEBOUNCE_MS <= MAX_WHEEL_DEBOUNCE_MS);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    // The incoming section must settle before the lock is released
    assert!(MAX_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS < DEFAULT_TRANSITION_MS);

    // Animation validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(INDICATOR_TRANSITION_MS > TICK_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_defaults_are_valid() {
        assert_eq!(DEFAULT_WHEEL_DEBOUNCE_MS, 50);
        assert!(DEFAULT_WHEEL_DEBOUNCE_MS >= MIN_WHEEL_DEBOUNCE_MS);
        assert!(DEFAULT_WHEEL_DEBOUNCE_MS <= MAX_WHEEL_DEBOUNCE_MS);
    }

    #[test]
    fn swipe_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn transition_defaults_are_valid() {
        assert_eq!(DEFAULT_TRANSITION_MS, 800);
        assert_eq!(DEFAULT_SETTLE_DELAY_MS, 50);
        assert!(DEFAULT_SETTLE_DELAY_MS < DEFAULT_TRANSITION_MS);
    }

    #[test]
    fn animation_defaults_are_valid() {
        assert_eq!(INDICATOR_TRANSITION_MS, 300);
        assert_eq!(TICK_INTERVAL_MS, 16);
    }
}
