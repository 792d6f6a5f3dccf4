#![forbid(unsafe_code)]

//! Per-index start delays, so a collection of tweens runs as a cascade
//! instead of moving in lockstep.
//!
//! Feed each offset into [`Tween::delay`](super::Tween::delay) when
//! building a group; the gather and fan-out phases of a mode transition
//! are built exactly this way.
//!
//! # Invariants
//!
//! 1. The offset vec has one entry per item; zero items, zero entries.
//! 2. Index 0 always gets `Duration::ZERO`.
//! 3. Later indices never get a smaller offset than earlier ones.
//! 4. The full span is `(count - 1) * step` in every mode; eased modes
//!    only redistribute positions inside that span.

use std::time::Duration;

use super::{ease_in, ease_in_out, ease_out, EasingFn};

/// Shape of the delay cascade.
#[derive(Debug, Clone, Copy)]
pub enum StaggerMode {
    /// Constant gap of `step` between consecutive indices.
    Linear,
    /// Gaps widen toward the end (quadratic).
    EaseIn,
    /// Gaps widen toward the start (quadratic).
    EaseOut,
    /// Narrow gaps at both ends, wide in the middle (quadratic).
    EaseInOut,
    /// Arbitrary curve over the normalized index.
    Custom(EasingFn),
}

/// Start delays for `count` items spaced `step` apart, shaped by `mode`.
#[must_use]
pub fn stagger_offsets(count: usize, step: Duration, mode: StaggerMode) -> Vec<Duration> {
    match count {
        0 => return Vec::new(),
        1 => return vec![Duration::ZERO],
        _ => {}
    }

    let curve: Option<EasingFn> = match mode {
        StaggerMode::Linear => None,
        StaggerMode::EaseIn => Some(ease_in),
        StaggerMode::EaseOut => Some(ease_out),
        StaggerMode::EaseInOut => Some(ease_in_out),
        StaggerMode::Custom(f) => Some(f),
    };

    let Some(curve) = curve else {
        // Integer math keeps the constant gap exact.
        return (0..count).map(|i| step.saturating_mul(i as u32)).collect();
    };

    let span_nanos = step.as_nanos() as f64 * (count - 1) as f64;
    let denom = (count - 1) as f32;
    (0..count)
        .map(|i| {
            let eased = f64::from(curve(i as f32 / denom));
            Duration::from_nanos((span_nanos * eased) as u64)
        })
        .collect()
}
