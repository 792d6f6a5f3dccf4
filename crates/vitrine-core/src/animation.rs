#![forbid(unsafe_code)]

//! Composable tween primitives.
//!
//! Time-based animations advanced by an explicit `tick(dt)` — there is no
//! hidden clock, so choreography is deterministic under test. Values are
//! interpolated with configurable easing; a built-in start delay supports
//! staggered group choreography (see [`stagger`]).

use std::time::Duration;

use crate::geometry::{Vec2, Vec3};

pub mod bank;
pub mod stagger;

pub use bank::{PropertyTween, TweenBank, TweenValue};
pub use stagger::stagger_offsets;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in-out: accelerate, then decelerate, more pronounced than
/// the quadratic variant. Used by fan-out choreography.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out (slower end than quadratic).
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing normalized progress in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion. Returns [`Duration::ZERO`] for
    /// animations that never complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

/// Fixed-duration clock yielding eased progress in [0.0, 1.0].
///
/// Elapsed time accumulates as whole [`Duration`]s rather than a float,
/// so long tick sequences cannot drift. [`Tween`] uses one internally;
/// the transition pause phase uses one bare, consulting only
/// `is_complete`.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Timer {
    /// A timer over `duration` with linear easing. Zero durations are
    /// bumped to one nanosecond so progress math stays well-defined.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: duration.max(Duration::from_nanos(1)),
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Un-eased progress fraction, clamped to [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Timer {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Lerp
// ---------------------------------------------------------------------------

/// Values that can be linearly interpolated by a [`Tween`].
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `other` by `t` in [0, 1].
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec2::lerp(self, other, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec3::lerp(self, other, t)
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates a [`Lerp`] value between `from` and `to` over a duration,
/// after an optional start delay.
///
/// During the delay [`Tween::current`] holds `from` and the tween is not
/// complete; overshoot past the delay is forwarded into the interpolation
/// so stagger timing stays exact across coarse ticks.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    timer: Timer,
    delay: Duration,
    waited: Duration,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween from `from` to `to` over `duration`, no delay,
    /// quadratic ease-out.
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: Timer::new(duration).easing(ease_out),
            delay: Duration::ZERO,
            waited: Duration::ZERO,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.timer = self.timer.easing(easing);
        self
    }

    /// Set a start delay (builder). Used for per-index stagger.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether the delay period has elapsed.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.waited >= self.delay
    }

    /// The tween's start value.
    #[must_use]
    pub fn start_value(&self) -> T {
        self.from
    }

    /// The tween's end value.
    #[must_use]
    pub fn end_value(&self) -> T {
        self.to
    }

    /// Current interpolated value.
    #[must_use]
    pub fn current(&self) -> T {
        if !self.has_started() {
            return self.from;
        }
        self.from.lerp(self.to, self.timer.value())
    }
}

impl<T: Lerp> Animation for Tween<T> {
    fn tick(&mut self, dt: Duration) {
        if self.waited < self.delay {
            self.waited = self.waited.saturating_add(dt);
            if self.waited > self.delay {
                // Forward overshoot into the interpolation.
                self.timer.tick(self.waited - self.delay);
            }
        } else {
            self.timer.tick(dt);
        }
    }

    fn is_complete(&self) -> bool {
        self.has_started() && self.timer.is_complete()
    }

    fn value(&self) -> f32 {
        if self.has_started() {
            self.timer.value()
        } else {
            0.0
        }
    }

    fn reset(&mut self) {
        self.waited = Duration::ZERO;
        self.timer.reset();
    }

    fn overshoot(&self) -> Duration {
        if self.has_started() {
            self.timer.overshoot()
        } else {
            Duration::ZERO
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
