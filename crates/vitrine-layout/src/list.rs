#![forbid(unsafe_code)]

//! List layout: every item at one anchor, separated in depth.
//!
//! Items stack at a single anchor low in the viewport, differentiated only
//! by z so depth ordering is stable and coplanar faces never fight. Hover
//! raises exactly one row by a fixed amount; all other rows stay at base y.

use vitrine_core::geometry::{Transform, Vec3, ViewportMetrics};

use crate::ItemExtent;

/// Depth gap between consecutive rows. Registration order is the canonical
/// z-order tie-break, so the gap only needs to defeat z-fighting.
pub const Z_SPACING: f32 = 25.0;

/// How far a hovered row rises above the anchor.
pub const POP_UP: f32 = 60.0;

/// Vertical anchor as a fraction of the lower half viewport.
const ANCHOR_FRACTION: f32 = 0.8;

/// Base anchor y for the stack (below center, toward the viewport bottom).
#[inline]
#[must_use]
pub fn anchor_y(metrics: ViewportMetrics) -> f32 {
    -ANCHOR_FRACTION * metrics.half_height()
}

/// Extra y for `index` given the hovered row. Non-zero for at most one index.
#[inline]
#[must_use]
pub fn hover_offset(index: usize, hovered: Option<usize>) -> f32 {
    if hovered == Some(index) { POP_UP } else { 0.0 }
}

/// Transform for one list row.
#[must_use]
pub fn item_transform(
    index: usize,
    metrics: ViewportMetrics,
    extent: &ItemExtent,
    hovered: Option<usize>,
) -> Transform {
    let y = anchor_y(metrics) + hover_offset(index, hovered);
    let z = -(index as f32) * Z_SPACING;
    Transform::at(Vec3::new(0.0, y, z), extent.natural_size)
}
