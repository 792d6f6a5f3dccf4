#![forbid(unsafe_code)]

//! Carousel layout: a horizontal strip driven by a scroll offset.
//!
//! Items sit left-to-right at their load-time slots. The strip's horizontal
//! extent is unbounded; the widest right edge feeds the scroll coordinator
//! so the scroll provider knows the total scrollable distance.

use vitrine_core::geometry::{Transform, Vec3, ViewportMetrics};

use crate::ItemExtent;

/// Transform for one carousel item at the given scroll position.
///
/// World x centers the strip on the viewport: an item whose slot starts at
/// `scroll_offset` sits with its left edge on the viewport's left edge.
/// World y converts the slot's top offset (screen-down) into world-up
/// coordinates, centering the item vertically within its slot.
#[must_use]
pub fn item_transform(
    extent: &ItemExtent,
    metrics: ViewportMetrics,
    scroll_offset: f32,
) -> Transform {
    let half_w = extent.natural_size.x / 2.0;
    let half_h = extent.natural_size.y / 2.0;

    let x = extent.left_edge - scroll_offset - metrics.half_width() + half_w;
    let y = metrics.half_height() - extent.top_offset - half_h;

    Transform::at(Vec3::new(x, y, 0.0), extent.natural_size)
}

/// The widest right edge across the collection. Zero when empty.
#[must_use]
pub fn max_right_edge(extents: &[ItemExtent]) -> f32 {
    extents
        .iter()
        .map(ItemExtent::right_edge)
        .fold(0.0, f32::max)
}

/// Total distance the strip can scroll before its last item's right edge
/// meets the viewport's right edge. Zero when everything already fits.
#[must_use]
pub fn scrollable_distance(max_right_edge: f32, metrics: ViewportMetrics) -> f32 {
    (max_right_edge - metrics.width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::geometry::Vec2;

    fn metrics() -> ViewportMetrics {
        ViewportMetrics::new(1000.0, 800.0)
    }

    fn extent(left: f32, top: f32) -> ItemExtent {
        ItemExtent::new(Vec2::new(200.0, 100.0), left, top)
    }

    #[test]
    fn first_item_at_zero_scroll() {
        let t = item_transform(&extent(0.0, 0.0), metrics(), 0.0);
        // Left edge flush with viewport left: center is -vw/2 + w/2.
        assert_eq!(t.position.x, -400.0);
        // Top of item flush with viewport top: center is vh/2 - h/2.
        assert_eq!(t.position.y, 350.0);
        assert_eq!(t.position.z, 0.0);
    }

    #[test]
    fn scroll_offset_moves_items_left() {
        let e = extent(500.0, 0.0);
        let at_rest = item_transform(&e, metrics(), 0.0);
        let scrolled = item_transform(&e, metrics(), 120.0);
        assert_eq!(scrolled.position.x, at_rest.position.x - 120.0);
        assert_eq!(scrolled.position.y, at_rest.position.y);
    }

    #[test]
    fn top_offset_lowers_item() {
        let high = item_transform(&extent(0.0, 0.0), metrics(), 0.0);
        let low = item_transform(&extent(0.0, 250.0), metrics(), 0.0);
        assert_eq!(low.position.y, high.position.y - 250.0);
    }

    #[test]
    fn scale_is_natural_size() {
        let t = item_transform(&extent(0.0, 0.0), metrics(), 0.0);
        assert_eq!(t.scale, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn rotation_is_zero() {
        let t = item_transform(&extent(300.0, 40.0), metrics(), 55.0);
        assert_eq!(t.rotation, Vec3::ZERO);
    }

    #[test]
    fn max_right_edge_of_empty_is_zero() {
        assert_eq!(max_right_edge(&[]), 0.0);
    }

    #[test]
    fn max_right_edge_tracks_widest() {
        let items = [extent(0.0, 0.0), extent(900.0, 0.0), extent(400.0, 0.0)];
        assert_eq!(max_right_edge(&items), 1100.0);
    }

    #[test]
    fn scrollable_distance_clamps_to_zero() {
        assert_eq!(scrollable_distance(600.0, metrics()), 0.0);
        assert_eq!(scrollable_distance(1000.0, metrics()), 0.0);
        assert_eq!(scrollable_distance(1450.0, metrics()), 450.0);
    }

    #[test]
    fn strip_extent_may_exceed_viewport() {
        // Items past the right edge still get finite transforms.
        let t = item_transform(&extent(5000.0, 0.0), metrics(), 0.0);
        assert!(t.is_finite());
        assert!(t.position.x > metrics().half_width());
    }
}
