#![forbid(unsafe_code)]

//! Pure spatial layout for the three view modes.
//!
//! Given an item's extent, its index, the collection size, and the current
//! viewport metrics, each mode computes a deterministic [`Transform`]:
//!
//! - [`carousel`] - horizontal strip driven by a scroll offset
//! - [`list`] - single stacked anchor, depth-separated, one raised hover row
//! - [`circle`] - ring in the XZ plane, items facing the center
//!
//! No function here has side effects or hidden state; the stateful view
//! machine (`vitrine-view`) owns all mutation. Empty collections yield empty
//! layouts, never errors, and viewport metrics are sanitized upstream via
//! [`ViewportMetrics::sanitized`](vitrine_core::geometry::ViewportMetrics::sanitized).

pub mod carousel;
pub mod circle;
pub mod list;

use vitrine_core::geometry::{Transform, Vec2, ViewportMetrics};

/// The active spatial arrangement of items. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Horizontal scroll-driven strip.
    Carousel,
    /// Vertically anchored stack with hover raise.
    List,
    /// Rotating ring in the XZ plane.
    Circle,
}

impl ViewMode {
    /// All modes, in cache-slot order.
    pub const ALL: [Self; 3] = [Self::Carousel, Self::List, Self::Circle];

    /// Stable slot index for per-mode caches.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Carousel => 0,
            Self::List => 1,
            Self::Circle => 2,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Carousel => "carousel",
            Self::List => "list",
            Self::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// Fixed, load-time geometry of one item.
///
/// `left_edge` and `top_offset` come from the item's slot in the source
/// document; `natural_size` from the backing media dimensions. None of these
/// change after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemExtent {
    /// Media dimensions in layout units.
    pub natural_size: Vec2,
    /// Left edge of the item's carousel slot.
    pub left_edge: f32,
    /// Distance from the viewport top to the item's slot.
    pub top_offset: f32,
}

impl ItemExtent {
    /// Create an extent.
    #[must_use]
    pub const fn new(natural_size: Vec2, left_edge: f32, top_offset: f32) -> Self {
        Self {
            natural_size,
            left_edge,
            top_offset,
        }
    }

    /// Right edge of the item's carousel slot.
    #[inline]
    #[must_use]
    pub fn right_edge(&self) -> f32 {
        self.left_edge + self.natural_size.x
    }
}

/// Everything a single layout call depends on besides the item itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Which mode to lay out for.
    pub mode: ViewMode,
    /// Sanitized viewport metrics.
    pub metrics: ViewportMetrics,
    /// Current horizontal scroll position (carousel only; ignored elsewhere).
    pub scroll_offset: f32,
    /// Hovered item index (list only; at most one row raised).
    pub hovered: Option<usize>,
    /// Total item count (circle angle spacing).
    pub count: usize,
}

/// Compute the target transform for one item under `ctx`.
#[must_use]
pub fn item_transform(ctx: &LayoutContext, index: usize, extent: &ItemExtent) -> Transform {
    match ctx.mode {
        ViewMode::Carousel => carousel::item_transform(extent, ctx.metrics, ctx.scroll_offset),
        ViewMode::List => list::item_transform(index, ctx.metrics, extent, ctx.hovered),
        ViewMode::Circle => circle::item_transform(index, ctx.count, ctx.metrics, extent),
    }
}

/// Compute target transforms for a whole collection.
///
/// An empty slice yields an empty vec; no error.
#[must_use]
pub fn layout_all(ctx: &LayoutContext, extents: &[ItemExtent]) -> Vec<Transform> {
    extents
        .iter()
        .enumerate()
        .map(|(i, extent)| item_transform(ctx, i, extent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ViewportMetrics {
        ViewportMetrics::new(1000.0, 800.0)
    }

    fn extents(n: usize) -> Vec<ItemExtent> {
        (0..n)
            .map(|i| ItemExtent::new(Vec2::new(200.0, 150.0), i as f32 * 220.0, 100.0))
            .collect()
    }

    fn ctx(mode: ViewMode, count: usize) -> LayoutContext {
        LayoutContext {
            mode,
            metrics: metrics(),
            scroll_offset: 0.0,
            hovered: None,
            count,
        }
    }

    #[test]
    fn mode_slots_are_distinct() {
        let slots: Vec<usize> = ViewMode::ALL.iter().map(|m| m.slot()).collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn mode_display_names() {
        assert_eq!(ViewMode::Carousel.to_string(), "carousel");
        assert_eq!(ViewMode::List.to_string(), "list");
        assert_eq!(ViewMode::Circle.to_string(), "circle");
    }

    #[test]
    fn empty_collection_yields_empty_layout() {
        for mode in ViewMode::ALL {
            let out = layout_all(&ctx(mode, 0), &[]);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let items = extents(7);
        for mode in ViewMode::ALL {
            let c = ctx(mode, items.len());
            let a = layout_all(&c, &items);
            let b = layout_all(&c, &items);
            assert_eq!(a, b, "{mode} layout must be pure");
        }
    }

    #[test]
    fn dispatcher_matches_mode_modules() {
        let items = extents(3);
        let c = ctx(ViewMode::Circle, 3);
        let via_dispatch = item_transform(&c, 1, &items[1]);
        let direct = circle::item_transform(1, 3, metrics(), &items[1]);
        assert_eq!(via_dispatch, direct);
    }

    #[test]
    fn extent_right_edge() {
        let e = ItemExtent::new(Vec2::new(200.0, 100.0), 50.0, 0.0);
        assert_eq!(e.right_edge(), 250.0);
    }
}
