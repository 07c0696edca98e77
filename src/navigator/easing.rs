// SPDX-License-Identifier: MPL-2.0
//! Timing curves and tweens for panel and indicator transitions.
//!
//! Curves are CSS-style cubic Béziers anchored at `(0, 0)` and `(1, 1)`.
//! [`CubicBezier::sample`] maps linear progress to eased progress by solving
//! the curve's x polynomial for the requested time.

/// Cubic Bézier timing curve with control points `(x1, y1)` and `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Curve used for section slides (ease-in-out-cubic).
    pub const SECTION: CubicBezier = CubicBezier::new(0.645, 0.045, 0.355, 1.0);

    /// CSS `ease`, used by indicator dots.
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    /// Straight line.
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    /// `x1` and `x2` must lie in `0.0..=1.0` for the curve to be a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        bezier_coord(self.y1, self.y2, s)
    }

    fn solve_x(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-5;

        // Newton-Raphson converges in a handful of steps for sane curves
        let mut s = x;
        for _ in 0..8 {
            let error = bezier_coord(self.x1, self.x2, s) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = bezier_slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= error / slope;
        }

        // Flat regions: fall back to bisection
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        s = x;
        while high - low > EPSILON {
            let value = bezier_coord(self.x1, self.x2, s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }
}

/// One coordinate of the curve at parameter `s`, with end points 0 and 1.
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// A value moving from `from` to `to` over a fixed duration.
///
/// Retargeting mid-flight starts the new tween from the value currently shown,
/// the way a CSS transition does when a property changes again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at_ms: u64,
    duration_ms: u64,
    curve: CubicBezier,
}

impl Tween {
    /// A tween already at rest on `value`.
    #[must_use]
    pub fn at_rest(value: f32, duration_ms: u64, curve: CubicBezier) -> Self {
        Self {
            from: value,
            to: value,
            started_at_ms: 0,
            duration_ms,
            curve,
        }
    }

    /// Starts moving towards `to` from wherever the value is at `now_ms`.
    ///
    /// Setting the current target again is a no-op and does not restart the clock.
    pub fn retarget(&mut self, to: f32, now_ms: u64) {
        if (self.to - to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value_at(now_ms);
        self.to = to;
        self.started_at_ms = now_ms;
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        #[allow(clippy::cast_precision_loss)]
        // durations are bounded to a few seconds
        let progress = elapsed as f32 / self.duration_ms as f32;
        progress.min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now_ms: u64) -> f32 {
        let eased = self.curve.sample(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_running(&self, now_ms: u64) -> bool {
        (self.from - self.to).abs() > f32::EPSILON && self.progress(now_ms) < 1.0
    }
}
