#![forbid(unsafe_code)]

//! Tween bank: keyed ownership of in-flight tweens.
//!
//! A [`TweenBank`] holds at most one tween per key. Starting a tween under a
//! key that already has one kills the prior tween first, so two tweens can
//! never fight over the same target. Callers key by
//! `(item, property group)`, which makes the one-active-tween-per-property
//! rule structural rather than a convention.
//!
//! # Usage
//!
//! Each frame: [`tick`](TweenBank::tick), apply [`samples`](TweenBank::samples)
//! to the owning state, then [`sweep`](TweenBank::sweep) completed slots.
//! Sampling before sweeping guarantees the final value of a completed tween
//! is observed exactly once.
//!
//! # Invariants
//!
//! 1. At most one tween per key at any time.
//! 2. `start` on an occupied key kills the prior tween (counted).
//! 3. A completed tween's end value is still sampled until swept.
//! 4. Diagnostic counters (`started_count`, `killed_count`) only increase.

use std::time::Duration;

use crate::geometry::{Vec2, Vec3};

use super::{Animation, Tween};

// ---------------------------------------------------------------------------
// Value-shape wrappers
// ---------------------------------------------------------------------------

/// A sampled tween value, shaped by what the tween interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// A scalar target (highlight level, spin angle).
    Scalar(f32),
    /// A planar target (scale).
    Planar(Vec2),
    /// A spatial target (position, rotation).
    Spatial(Vec3),
}

/// A tween of any supported value shape, stored uniformly in the bank.
#[derive(Debug, Clone, Copy)]
pub enum PropertyTween {
    /// Scalar interpolation.
    Scalar(Tween<f32>),
    /// Planar interpolation.
    Planar(Tween<Vec2>),
    /// Spatial interpolation.
    Spatial(Tween<Vec3>),
}

impl PropertyTween {
    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        match self {
            Self::Scalar(t) => t.tick(dt),
            Self::Planar(t) => t.tick(dt),
            Self::Spatial(t) => t.tick(dt),
        }
    }

    /// Whether the tween has finished (delay included).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Scalar(t) => t.is_complete(),
            Self::Planar(t) => t.is_complete(),
            Self::Spatial(t) => t.is_complete(),
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn current(&self) -> TweenValue {
        match self {
            Self::Scalar(t) => TweenValue::Scalar(t.current()),
            Self::Planar(t) => TweenValue::Planar(t.current()),
            Self::Spatial(t) => TweenValue::Spatial(t.current()),
        }
    }
}

impl From<Tween<f32>> for PropertyTween {
    fn from(t: Tween<f32>) -> Self {
        Self::Scalar(t)
    }
}

impl From<Tween<Vec2>> for PropertyTween {
    fn from(t: Tween<Vec2>) -> Self {
        Self::Planar(t)
    }
}

impl From<Tween<Vec3>> for PropertyTween {
    fn from(t: Tween<Vec3>) -> Self {
        Self::Spatial(t)
    }
}

// ---------------------------------------------------------------------------
// TweenBank
// ---------------------------------------------------------------------------

struct Slot<K> {
    key: K,
    tween: PropertyTween,
}

/// Keyed tween storage enforcing one active tween per key.
pub struct TweenBank<K: Copy + Eq> {
    slots: Vec<Slot<K>>,
    started: u64,
    killed: u64,
}

impl<K: Copy + Eq + std::fmt::Debug> std::fmt::Debug for TweenBank<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenBank")
            .field("active", &self.slots.len())
            .field("started", &self.started)
            .field("killed", &self.killed)
            .finish()
    }
}

impl<K: Copy + Eq> TweenBank<K> {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            started: 0,
            killed: 0,
        }
    }

    /// Start a tween under `key`, killing any prior tween with the same key.
    pub fn start(&mut self, key: K, tween: impl Into<PropertyTween>) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.key == key) {
            slot.tween = tween.into();
            self.killed += 1;
        } else {
            self.slots.push(Slot {
                key,
                tween: tween.into(),
            });
        }
        self.started += 1;
    }

    /// Kill the tween under `key`. Returns `true` if one was active.
    pub fn kill(&mut self, key: K) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.key != key);
        let removed = self.slots.len() < before;
        if removed {
            self.killed += 1;
        }
        removed
    }

    /// Kill every tween whose key matches `pred`. Returns how many died.
    pub fn kill_matching(&mut self, pred: impl Fn(K) -> bool) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !pred(s.key));
        let removed = before - self.slots.len();
        self.killed += removed as u64;
        removed
    }

    /// Advance every active tween by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for slot in &mut self.slots {
            slot.tween.tick(dt);
        }
    }

    /// Iterate `(key, current value)` for every slot, completed ones included.
    pub fn samples(&self) -> impl Iterator<Item = (K, TweenValue)> + '_ {
        self.slots.iter().map(|s| (s.key, s.tween.current()))
    }

    /// Remove completed tweens. Returns how many were swept.
    ///
    /// Call after applying [`samples`](Self::samples) so end values land.
    pub fn sweep(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !s.tween.is_complete());
        before - self.slots.len()
    }

    /// Whether any slot (active or not-yet-swept) matches `pred`.
    #[must_use]
    pub fn has_matching(&self, pred: impl Fn(K) -> bool) -> bool {
        self.slots.iter().any(|s| pred(s.key))
    }

    /// Whether every slot matching `pred` has completed.
    ///
    /// Vacuously true when no slot matches.
    #[must_use]
    pub fn all_complete_matching(&self, pred: impl Fn(K) -> bool) -> bool {
        self.slots
            .iter()
            .filter(|s| pred(s.key))
            .all(|s| s.tween.is_complete())
    }

    /// Whether a tween is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.slots.iter().any(|s| s.key == key)
    }

    /// Number of stored tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the bank holds no tweens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total tweens ever started (diagnostic).
    #[must_use]
    pub fn started_count(&self) -> u64 {
        self.started
    }

    /// Total tweens ever killed by replacement or explicit kill (diagnostic).
    #[must_use]
    pub fn killed_count(&self) -> u64 {
        self.killed
    }

    /// Drop every tween without counting kills. For teardown only.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<K: Copy + Eq> Default for TweenBank<K> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
