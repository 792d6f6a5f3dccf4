#![forbid(unsafe_code)]

//! Circle layout: items evenly distributed on a ring in the XZ plane.
//!
//! The ring radius grows with the square root of the item count so density
//! stays roughly constant, clamped to viewport-relative bounds so the ring
//! remains legible across screen sizes. Each item yaws to face the ring
//! center. A container-level y-rotation (drag/inertia/auto-rotate) applies
//! uniformly on top of these transforms and is owned by the view crate, not
//! stored per item.

use std::f32::consts::TAU;

use vitrine_core::geometry::{Transform, Vec3, ViewportMetrics};

use crate::ItemExtent;

/// Base radius as a fraction of viewport width, at the reference count.
pub const BASE_RADIUS_FRACTION: f32 = 0.30;

/// Lower radius bound as a fraction of viewport width.
pub const MIN_RADIUS_FRACTION: f32 = 0.12;

/// Upper radius bound as a fraction of viewport width.
pub const MAX_RADIUS_FRACTION: f32 = 0.42;

/// Item count at which the ring uses exactly the base radius.
const REFERENCE_COUNT: f32 = 10.0;

/// Ring radius for `count` items. Zero items yield the minimum radius.
#[must_use]
pub fn radius(count: usize, metrics: ViewportMetrics) -> f32 {
    let base = BASE_RADIUS_FRACTION * metrics.width;
    let min = MIN_RADIUS_FRACTION * metrics.width;
    let max = MAX_RADIUS_FRACTION * metrics.width;
    let scaled = base * (count as f32 / REFERENCE_COUNT).sqrt();
    scaled.clamp(min, max)
}

/// Ring angle for `index` of `count`. Zero when the ring is empty.
#[inline]
#[must_use]
pub fn angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * (TAU / count as f32)
}

/// Transform for one ring item: position on the ring, yawed to face center.
#[must_use]
pub fn item_transform(
    index: usize,
    count: usize,
    metrics: ViewportMetrics,
    extent: &ItemExtent,
) -> Transform {
    let r = radius(count, metrics);
    let a = angle(index, count);
    let position = Vec3::new(a.sin() * r, 0.0, a.cos() * r);
    let rotation = Vec3::new(0.0, facing_yaw(position), 0.0);
    Transform::new(position, extent.natural_size, rotation)
}

/// Yaw that makes an item at `position` face the ring center.
///
/// Recomputed once on transition settle; gather/fan-out paths do not track
/// facing continuously.
#[inline]
#[must_use]
pub fn facing_yaw(position: Vec3) -> f32 {
    position.x.atan2(position.z)
}
