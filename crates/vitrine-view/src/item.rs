#![forbid(unsafe_code)]

//! Items and the item registry.
//!
//! The registry is the single source of truth for the collection. Items are
//! appended in registration order and that order never changes afterward:
//! it is the canonical z-order tie-break, list hover index, and ring angle
//! index throughout the system. Backing media loads asynchronously in any
//! order; callers register slots up front so load completion order cannot
//! perturb indices.

use vitrine_core::geometry::{Transform, Vec2};
use vitrine_layout::{ItemExtent, ViewMode};

/// Stable item identity: the registration index. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    /// The underlying index into the registry.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// One visual element in the collection.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    extent: ItemExtent,
    link: Option<String>,
    /// Live transform, mutated every frame/tween step.
    pub current: Transform,
    /// Per-mode last-known transform, captured the first time the item
    /// leaves that mode; cleared only on resize or count change.
    cached: [Option<Transform>; 3],
    /// Hover/active visual level in [0, 1], independent of layout mode.
    pub highlight: f32,
    /// Corner-reveal micro-animation progress in [0, 1].
    pub corner_reveal: f32,
}

impl Item {
    fn new(id: ItemId, extent: ItemExtent, link: Option<String>) -> Self {
        Self {
            id,
            extent,
            link,
            current: Transform::at(vitrine_core::geometry::Vec3::ZERO, extent.natural_size),
            cached: [None; 3],
            highlight: 0.0,
            corner_reveal: 0.0,
        }
    }

    /// Stable identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Load-time geometry.
    #[inline]
    #[must_use]
    pub fn extent(&self) -> &ItemExtent {
        &self.extent
    }

    /// Media dimensions in layout units.
    #[inline]
    #[must_use]
    pub fn natural_size(&self) -> Vec2 {
        self.extent.natural_size
    }

    /// Navigation target, if the item carries one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Cached transform for `mode`, if that mode was visited.
    #[must_use]
    pub fn cached(&self, mode: ViewMode) -> Option<Transform> {
        self.cached[mode.slot()]
    }

    /// Store the cached transform for `mode` only if none is present.
    pub fn cache_if_empty(&mut self, mode: ViewMode, transform: Transform) {
        let slot = &mut self.cached[mode.slot()];
        if slot.is_none() {
            *slot = Some(transform);
        }
    }

    /// Overwrite the cached transform for `mode`.
    pub fn set_cached(&mut self, mode: ViewMode, transform: Transform) {
        self.cached[mode.slot()] = Some(transform);
    }

    fn invalidate_cache(&mut self, mode: ViewMode) {
        self.cached[mode.slot()] = None;
    }
}

/// Source of truth for the item collection and per-mode transform caches.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item; its id is the current length. O(1).
    ///
    /// A count change invalidates every mode cache: stagger indices, ring
    /// angles, and scroll extent all depend on the collection size.
    pub fn register(&mut self, extent: ItemExtent, link: Option<String>) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(Item::new(id, extent, link));
        for mode in ViewMode::ALL {
            self.invalidate_cache(mode);
        }
        id
    }

    /// Item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Mutable item by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0)
    }

    /// All items in registration order.
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Mutable iteration in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.iter_mut()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Extents in registration order, for the layout engine.
    #[must_use]
    pub fn extents(&self) -> Vec<ItemExtent> {
        self.items.iter().map(|i| i.extent).collect()
    }

    /// Clear every item's cached transform for `mode`.
    pub fn invalidate_cache(&mut self, mode: ViewMode) {
        for item in &mut self.items {
            item.invalidate_cache(mode);
        }
    }

    /// Clear every cached transform for every mode (resize).
    pub fn invalidate_all_caches(&mut self) {
        for mode in ViewMode::ALL {
            self.invalidate_cache(mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::geometry::{Vec2, Vec3};

    fn extent(left: f32) -> ItemExtent {
        ItemExtent::new(Vec2::new(200.0, 100.0), left, 50.0)
    }

    #[test]
    fn ids_are_registration_indices() {
        let mut reg = ItemRegistry::new();
        let a = reg.register(extent(0.0), None);
        let b = reg.register(extent(220.0), Some("/work/alpha".into()));
        assert_eq!(a, ItemId(0));
        assert_eq!(b, ItemId(1));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut reg = ItemRegistry::new();
        for i in 0..5 {
            reg.register(extent(i as f32 * 100.0), None);
        }
        for (i, item) in reg.all().iter().enumerate() {
            assert_eq!(item.id(), ItemId(i));
            assert_eq!(item.extent().left_edge, i as f32 * 100.0);
        }
    }

    #[test]
    fn get_by_id() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), Some("/about".into()));
        assert_eq!(reg.get(id).unwrap().link(), Some("/about"));
        assert!(reg.get(ItemId(99)).is_none());
    }

    #[test]
    fn cache_if_empty_is_first_writer_wins() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), None);
        let item = reg.get_mut(id).unwrap();

        let first = Transform::at(Vec3::new(1.0, 2.0, 3.0), Vec2::splat(1.0));
        let second = Transform::at(Vec3::new(9.0, 9.0, 9.0), Vec2::splat(1.0));
        item.cache_if_empty(ViewMode::List, first);
        item.cache_if_empty(ViewMode::List, second);
        assert_eq!(item.cached(ViewMode::List), Some(first));
    }

    #[test]
    fn set_cached_overwrites() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), None);
        let item = reg.get_mut(id).unwrap();

        let first = Transform::at(Vec3::new(1.0, 0.0, 0.0), Vec2::splat(1.0));
        let second = Transform::at(Vec3::new(2.0, 0.0, 0.0), Vec2::splat(1.0));
        item.cache_if_empty(ViewMode::Circle, first);
        item.set_cached(ViewMode::Circle, second);
        assert_eq!(item.cached(ViewMode::Circle), Some(second));
    }

    #[test]
    fn invalidate_cache_clears_one_mode() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), None);
        let t = Transform::at(Vec3::ZERO, Vec2::splat(1.0));
        {
            let item = reg.get_mut(id).unwrap();
            item.cache_if_empty(ViewMode::Carousel, t);
            item.cache_if_empty(ViewMode::List, t);
        }
        reg.invalidate_cache(ViewMode::Carousel);
        let item = reg.get(id).unwrap();
        assert!(item.cached(ViewMode::Carousel).is_none());
        assert!(item.cached(ViewMode::List).is_some());
    }

    #[test]
    fn registering_invalidates_existing_caches() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), None);
        reg.get_mut(id)
            .unwrap()
            .cache_if_empty(ViewMode::Circle, Transform::IDENTITY);
        reg.register(extent(220.0), None);
        assert!(reg.get(id).unwrap().cached(ViewMode::Circle).is_none());
    }

    #[test]
    fn new_item_starts_unhighlighted() {
        let mut reg = ItemRegistry::new();
        let id = reg.register(extent(0.0), None);
        let item = reg.get(id).unwrap();
        assert_eq!(item.highlight, 0.0);
        assert_eq!(item.corner_reveal, 0.0);
        assert_eq!(item.natural_size(), Vec2::new(200.0, 100.0));
    }
}
