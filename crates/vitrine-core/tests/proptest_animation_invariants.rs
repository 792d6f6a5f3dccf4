//! Property-based invariant tests for tweens, timers, stagger offsets, and
//! the keyed tween bank.
//!
//! These verify invariants that must hold for any valid inputs:
//!
//! 1. The bank never holds more than one tween per key, no matter the
//!    interleaving of starts, kills, and ticks.
//! 2. Bank counters are consistent: kills never exceed starts, and live
//!    slots account for the difference net of completions.
//! 3. A long-enough tick followed by a sweep always empties the bank.
//! 4. A linear tween's value never leaves the interval spanned by its
//!    endpoints.
//! 5. A timer's progress is always in [0, 1] and overshoot stays zero
//!    until completion.
//! 6. Stagger offsets start at zero, never decrease, and span exactly
//!    `(count - 1) * step` in every mode.

use std::time::Duration;

use proptest::prelude::*;
use vitrine_core::animation::stagger::StaggerMode;
use vitrine_core::animation::{linear, stagger_offsets, Animation, Timer, Tween, TweenBank};

// ── Helpers ─────────────────────────────────────────────────────────────

const KEYS: u8 = 4;

#[derive(Debug, Clone)]
enum BankOp {
    Start(u8, u64),
    Kill(u8),
    Tick(u64),
}

fn bank_op_strategy() -> impl Strategy<Value = BankOp> {
    prop_oneof![
        (0..KEYS, 1u64..500).prop_map(|(k, ms)| BankOp::Start(k, ms)),
        (0..KEYS).prop_map(BankOp::Kill),
        (0u64..200).prop_map(BankOp::Tick),
    ]
}

fn duration_strategy() -> impl Strategy<Value = Duration> {
    (1u64..2000).prop_map(Duration::from_millis)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Bank exclusivity and counter consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bank_holds_at_most_one_tween_per_key(
        ops in proptest::collection::vec(bank_op_strategy(), 1..64),
    ) {
        let mut bank: TweenBank<u8> = TweenBank::new();
        for op in ops {
            match op {
                BankOp::Start(key, ms) => {
                    bank.start(key, Tween::new(0.0f32, 1.0, Duration::from_millis(ms)));
                }
                BankOp::Kill(key) => {
                    bank.kill(key);
                }
                BankOp::Tick(ms) => {
                    bank.tick(Duration::from_millis(ms));
                    bank.sweep();
                }
            }
            // With 4 possible keys, more than 4 live slots would mean a
            // duplicate key slipped through a replace.
            prop_assert!(bank.len() <= KEYS as usize);
            prop_assert!(bank.killed_count() <= bank.started_count());
            prop_assert!(bank.len() as u64 <= bank.started_count() - bank.killed_count());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Draining
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bank_drains_after_everything_completes(
        durations in proptest::collection::vec(duration_strategy(), 1..16),
    ) {
        let mut bank: TweenBank<u8> = TweenBank::new();
        let mut longest = Duration::ZERO;
        for (i, duration) in durations.iter().enumerate() {
            longest = longest.max(*duration);
            bank.start((i % KEYS as usize) as u8, Tween::new(0.0f32, 1.0, *duration));
        }
        bank.tick(longest + Duration::from_millis(1));
        bank.sweep();
        prop_assert!(bank.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Tween values stay within their endpoint interval
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_tween_never_leaves_endpoint_interval(
        from in -1000.0f32..1000.0,
        to in -1000.0f32..1000.0,
        duration in duration_strategy(),
        steps in proptest::collection::vec(0u64..100, 1..32),
    ) {
        let mut tween = Tween::new(from, to, duration).easing(linear);
        let lo = from.min(to);
        let hi = from.max(to);
        for ms in steps {
            tween.tick(Duration::from_millis(ms));
            let v = tween.current();
            prop_assert!(
                (lo - 1e-3..=hi + 1e-3).contains(&v),
                "value {v} escaped [{lo}, {hi}]"
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Timer progress and overshoot
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn timer_progress_bounded_and_overshoot_gated(
        duration in duration_strategy(),
        steps in proptest::collection::vec(0u64..500, 1..16),
    ) {
        let mut timer = Timer::new(duration);
        for ms in steps {
            timer.tick(Duration::from_millis(ms));
            let p = timer.raw_progress();
            prop_assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
            if timer.is_complete() {
                prop_assert!(p >= 1.0 - 1e-6);
            } else {
                prop_assert_eq!(timer.overshoot(), Duration::ZERO);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Stagger offsets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stagger_offsets_zero_start_monotone_exact_span(
        count in 0usize..100,
        step_ms in 0u64..100,
        mode_index in 0usize..4,
    ) {
        let step = Duration::from_millis(step_ms);
        let mode = [
            StaggerMode::Linear,
            StaggerMode::EaseIn,
            StaggerMode::EaseOut,
            StaggerMode::EaseInOut,
        ][mode_index];

        let offsets = stagger_offsets(count, step, mode);
        prop_assert_eq!(offsets.len(), count);
        if count == 0 {
            return Ok(());
        }

        prop_assert_eq!(offsets[0], Duration::ZERO);
        for pair in offsets.windows(2) {
            prop_assert!(pair[1] >= pair[0], "offsets decreased: {offsets:?}");
        }

        let span = step.saturating_mul((count - 1) as u32);
        let last = *offsets.last().unwrap();
        prop_assert!(
            last.abs_diff(span) <= Duration::from_micros(1),
            "span {last:?} vs expected {span:?}"
        );
    }
}
