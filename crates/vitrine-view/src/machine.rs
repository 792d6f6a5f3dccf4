#![forbid(unsafe_code)]

//! The view-mode state machine.
//!
//! Tracks the active [`ViewMode`], validates transition requests, and runs
//! the two-phase gather/fan-out choreography over the shared item
//! collection. The phase enum is advanced by a single [`tick`] driver on
//! tween-group completion; there are no nested completion callbacks, and
//! milestones surface through a drainable [`ViewEvent`] queue.
//!
//! # Invariants
//!
//! 1. At most one transition is in flight; new requests are rejected.
//! 2. Self-transitions are rejected with zero side effects.
//! 3. Fan-out never starts before gather has fully converged.
//! 4. `active_mode` flips only after every fan-out tween has completed.
//! 5. The scroll provider is enabled iff the machine is settled in
//!    carousel mode.
//!
//! # Failure Modes
//!
//! - A malformed (non-finite) cached transform skips that item's fan-out:
//!   the item stays at the stack point, a warning is logged, an
//!   [`ViewEvent::ItemSkipped`] is queued, and the transition completes
//!   for every other item. Re-requesting the transition recovers.
//! - A resize mid-flight completes the transition against pre-resize
//!   targets, then runs a corrective relayout pass after settling.
//!
//! [`tick`]: ViewStateMachine::tick

use std::f32::consts::TAU;
use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use vitrine_core::animation::stagger::StaggerMode;
use vitrine_core::animation::{
    ease_in_out, ease_in_out_cubic, ease_out_cubic, stagger_offsets, Animation, Timer, Tween,
    TweenBank, TweenValue,
};
use vitrine_core::geometry::{Vec3, ViewportMetrics};
use vitrine_layout::{carousel, circle, item_transform, layout_all, LayoutContext, ViewMode};

use crate::item::{ItemId, ItemRegistry};
use crate::scroll::{PageContext, ScrollDirectionCoordinator, ScrollProviderFactory};

/// Common stacking point items converge on during the gather phase,
/// slightly in front of the scene origin.
const STACK_POINT: Vec3 = Vec3::new(0.0, 0.0, 60.0);

// ---------------------------------------------------------------------------
// Tween keys
// ---------------------------------------------------------------------------

/// Property groups subject to the one-active-tween rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropertyGroup {
    Position,
    Scale,
    Rotation,
    Highlight,
    Reveal,
}

/// Key space for the machine's tween bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TweenKey {
    /// A per-item property tween.
    Item(ItemId, PropertyGroup),
    /// The circle container's flourish rotation.
    ContainerSpin,
}

/// Whether a key belongs to transition choreography (as opposed to
/// hover/reveal cosmetics, which are suppressed while in flight anyway).
fn is_choreo_key(key: TweenKey) -> bool {
    matches!(
        key,
        TweenKey::Item(
            _,
            PropertyGroup::Position | PropertyGroup::Scale | PropertyGroup::Rotation
        ) | TweenKey::ContainerSpin
    )
}

// ---------------------------------------------------------------------------
// Transition state
// ---------------------------------------------------------------------------

/// Phase of an in-flight mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Items converging on the stack point.
    Gathering,
    /// Fixed gap between gather and fan-out; ring visual swaps here.
    Paused,
    /// Items dispersing to the target mode's layout.
    FanningOut,
}

#[derive(Debug)]
struct Transition {
    from: ViewMode,
    to: ViewMode,
    phase: TransitionPhase,
    pause: Timer,
}

/// Why a transition request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested mode is already active; no-op by contract.
    SameMode(ViewMode),
    /// Another transition is still in flight; requests are rejected, not
    /// queued.
    InFlight {
        /// Target of the in-flight transition.
        in_flight_to: ViewMode,
        /// The refused request.
        requested: ViewMode,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameMode(mode) => write!(f, "already in {mode} mode"),
            Self::InFlight {
                in_flight_to,
                requested,
            } => write!(
                f,
                "transition to {in_flight_to} still in flight; {requested} rejected"
            ),
        }
    }
}

impl std::error::Error for TransitionError {}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Milestones queued by the machine and drained by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A transition began its gather phase.
    TransitionStarted {
        /// Mode being left.
        from: ViewMode,
        /// Mode being entered.
        to: ViewMode,
    },
    /// A request arrived while another transition was in flight.
    TransitionRejected {
        /// The refused target mode.
        requested: ViewMode,
    },
    /// A transition completed; the machine is settled in `mode`.
    TransitionSettled {
        /// The newly active mode.
        mode: ViewMode,
    },
    /// An item's fan-out was skipped due to a malformed cached transform.
    ItemSkipped {
        /// The affected item.
        id: ItemId,
    },
    /// The scroll provider was reconfigured for the settled mode.
    ScrollReconfigured {
        /// Whether an enabled provider now exists.
        enabled: bool,
    },
    /// The post-click navigation delay elapsed on a linked item.
    Navigate {
        /// The clicked item.
        id: ItemId,
        /// Its navigation target.
        href: String,
    },
}

// ---------------------------------------------------------------------------
// Timing configuration
// ---------------------------------------------------------------------------

/// Durations and factors for the transition choreography.
#[derive(Debug, Clone, Copy)]
pub struct TransitionTiming {
    /// Gather phase duration per item.
    pub gather_duration: Duration,
    /// Per-index gather start delay.
    pub gather_stagger: Duration,
    /// Scale factor applied at the stack point.
    pub gather_scale: f32,
    /// Gap between gather completion and fan-out start.
    pub pause: Duration,
    /// Fan-out phase duration per item.
    pub fan_out_duration: Duration,
    /// Per-index fan-out start delay.
    pub fan_out_stagger: Duration,
    /// List hover raise/lower duration.
    pub hover_duration: Duration,
    /// Corner-reveal micro-animation duration.
    pub reveal_duration: Duration,
    /// Delay between a click's reveal start and navigation.
    pub navigate_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            gather_duration: Duration::from_millis(700),
            gather_stagger: Duration::from_millis(30),
            gather_scale: 0.8,
            pause: Duration::from_millis(250),
            fan_out_duration: Duration::from_millis(900),
            fan_out_stagger: Duration::from_millis(40),
            hover_duration: Duration::from_millis(300),
            reveal_duration: Duration::from_millis(350),
            navigate_delay: Duration::from_millis(450),
        }
    }
}

// ---------------------------------------------------------------------------
// Frame output
// ---------------------------------------------------------------------------

/// Per-item draw data handed to the rendering collaborator each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameItem {
    /// Item identity; the renderer maps it to a texture handle.
    pub id: ItemId,
    /// Live transform.
    pub transform: vitrine_core::geometry::Transform,
    /// Hover/active visual level in [0, 1].
    pub highlight: f32,
    /// Corner-reveal progress in [0, 1].
    pub corner_reveal: f32,
}

// ---------------------------------------------------------------------------
// ViewStateMachine
// ---------------------------------------------------------------------------

enum Advance {
    Stay,
    Gathered,
    FanOut,
    Settle,
}

/// Owns the registry, the tween bank, and the scroll coordinator; advances
/// everything from a single `tick(dt)`.
pub struct ViewStateMachine {
    registry: ItemRegistry,
    metrics: ViewportMetrics,
    active: ViewMode,
    transition: Option<Transition>,
    tweens: TweenBank<TweenKey>,
    scroll: ScrollDirectionCoordinator,
    timing: TransitionTiming,
    /// Container-level ring rotation, composed onto circle items by the
    /// renderer; never duplicated into per-item transforms.
    container_spin: f32,
    /// Last scroll position observed while the provider was live; used as
    /// the carousel layout offset while the provider is torn down.
    last_scroll_offset: f32,
    hovered: Option<usize>,
    ring_visual: bool,
    pending_nav: Option<(ItemId, Timer)>,
    pending_relayout: bool,
    events: Vec<ViewEvent>,
}

impl fmt::Debug for ViewStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStateMachine")
            .field("active", &self.active)
            .field("phase", &self.transition_phase())
            .field("items", &self.registry.len())
            .field("tweens", &self.tweens)
            .finish()
    }
}

impl ViewStateMachine {
    /// Create a machine settled in carousel mode with no items.
    #[must_use]
    pub fn new(
        factory: Box<dyn ScrollProviderFactory>,
        page: PageContext,
        metrics: ViewportMetrics,
    ) -> Self {
        let mut scroll = ScrollDirectionCoordinator::new(factory, page);
        scroll.bootstrap();
        Self {
            registry: ItemRegistry::new(),
            metrics,
            active: ViewMode::Carousel,
            transition: None,
            tweens: TweenBank::new(),
            scroll,
            timing: TransitionTiming::default(),
            container_spin: 0.0,
            last_scroll_offset: 0.0,
            hovered: None,
            ring_visual: false,
            pending_nav: None,
            pending_relayout: false,
            events: Vec::new(),
        }
    }

    /// Override the choreography timing (builder).
    #[must_use]
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    // -----------------------------------------------------------------------
    // Registration and read access
    // -----------------------------------------------------------------------

    /// Register an item once its backing media has loaded and place it at
    /// its active-mode layout position.
    pub fn register_item(
        &mut self,
        extent: vitrine_layout::ItemExtent,
        link: Option<String>,
    ) -> ItemId {
        let id = self.registry.register(extent, link);
        if self.transition.is_none() {
            self.apply_active_layout();
            if self.active == ViewMode::Carousel {
                self.reconfigure_carousel_scroll();
            }
        }
        id
    }

    /// The registry, for the rendering collaborator.
    #[must_use]
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Per-item draw data in registration order.
    pub fn frame(&self) -> impl Iterator<Item = FrameItem> + '_ {
        self.registry.all().iter().map(|item| FrameItem {
            id: item.id(),
            transform: item.current,
            highlight: item.highlight,
            corner_reveal: item.corner_reveal,
        })
    }

    /// Currently active mode (the source mode while a transition runs).
    #[must_use]
    pub fn active_mode(&self) -> ViewMode {
        self.active
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.transition.is_some()
    }

    /// Phase of the in-flight transition, if any.
    #[must_use]
    pub fn transition_phase(&self) -> Option<TransitionPhase> {
        self.transition.as_ref().map(|t| t.phase)
    }

    /// Current viewport metrics.
    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    /// Container-level ring rotation in radians, [0, TAU).
    #[must_use]
    pub fn container_rotation(&self) -> f32 {
        self.container_spin
    }

    /// Hovered item index, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Whether the ring grab-handle visual is attached.
    #[must_use]
    pub fn ring_visual_attached(&self) -> bool {
        self.ring_visual
    }

    /// Whether an enabled scroll provider exists.
    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll.is_enabled()
    }

    /// Scroll coordinator diagnostics.
    #[must_use]
    pub fn scroll_activation_count(&self) -> u64 {
        self.scroll.activation_count()
    }

    /// Total tweens ever started (diagnostic).
    #[must_use]
    pub fn tween_started_count(&self) -> u64 {
        self.tweens.started_count()
    }

    /// Total tweens ever killed (diagnostic).
    #[must_use]
    pub fn tween_killed_count(&self) -> u64 {
        self.tweens.killed_count()
    }

    /// Drain all queued events.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    // -----------------------------------------------------------------------
    // Transition requests
    // -----------------------------------------------------------------------

    /// Request a mode change.
    ///
    /// Rejected while another transition is in flight and for
    /// self-transitions; the latter has zero side effects.
    pub fn request_mode(&mut self, to: ViewMode) -> Result<(), TransitionError> {
        if let Some(tr) = &self.transition {
            self.events.push(ViewEvent::TransitionRejected { requested: to });
            return Err(TransitionError::InFlight {
                in_flight_to: tr.to,
                requested: to,
            });
        }
        if to == self.active {
            return Err(TransitionError::SameMode(to));
        }

        let from = self.active;
        debug!(%from, %to, "mode transition starting");
        self.hovered = None;

        // First-time-in-mode capture: the transform an item holds on the way
        // out of a mode is what it resumes with on the way back in.
        for item in self.registry.iter_mut() {
            let current = item.current;
            item.cache_if_empty(from, current);
        }

        // The provider must be inert during choreography; stray update
        // ticks would fight the gather tweens.
        if self.scroll.is_enabled() {
            self.last_scroll_offset = self.scroll.current_pos();
        }
        self.scroll.deactivate();

        let count = self.registry.len();
        let offsets = stagger_offsets(count, self.timing.gather_stagger, StaggerMode::Linear);
        for i in 0..count {
            let id = ItemId(i);
            let (position, scale, rotation) = {
                let item = &self.registry.all()[i];
                (item.current.position, item.current.scale, item.current.rotation)
            };
            let delay = offsets[i];
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Position),
                Tween::new(position, STACK_POINT, self.timing.gather_duration)
                    .easing(ease_in_out)
                    .delay(delay),
            );
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Scale),
                Tween::new(scale, scale.scaled(self.timing.gather_scale), self.timing.gather_duration)
                    .easing(ease_in_out)
                    .delay(delay),
            );
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Rotation),
                Tween::new(rotation, Vec3::ZERO, self.timing.gather_duration)
                    .easing(ease_in_out)
                    .delay(delay),
            );
        }

        self.transition = Some(Transition {
            from,
            to,
            phase: TransitionPhase::Gathering,
            pause: Timer::new(self.timing.pause),
        });
        self.events.push(ViewEvent::TransitionStarted { from, to });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tick driver
    // -----------------------------------------------------------------------

    /// Advance tweens, the transition phase, scroll-driven layout, and the
    /// pending navigation delay by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tweens.tick(dt);

        // Apply samples before sweeping so final values land exactly once.
        let samples: Vec<(TweenKey, TweenValue)> = self.tweens.samples().collect();
        for (key, value) in samples {
            self.apply_sample(key, value);
        }
        self.tweens.sweep();

        self.drive_transition(dt);

        // Settled carousel: the strip follows the live scroll position.
        if self.transition.is_none() && self.active == ViewMode::Carousel {
            if self.scroll.is_enabled() {
                self.last_scroll_offset = self.scroll.current_pos();
            }
            self.apply_active_layout();
        }

        if let Some((id, timer)) = &mut self.pending_nav {
            timer.tick(dt);
            if timer.is_complete() {
                let id = *id;
                self.pending_nav = None;
                if let Some(href) = self.registry.get(id).and_then(|i| i.link()).map(str::to_owned)
                {
                    self.events.push(ViewEvent::Navigate { id, href });
                }
            }
        }
    }

    fn apply_sample(&mut self, key: TweenKey, value: TweenValue) {
        match key {
            TweenKey::Item(id, group) => {
                if let Some(item) = self.registry.get_mut(id) {
                    match (group, value) {
                        (PropertyGroup::Position, TweenValue::Spatial(v)) => {
                            item.current.position = v;
                        }
                        (PropertyGroup::Rotation, TweenValue::Spatial(v)) => {
                            item.current.rotation = v;
                        }
                        (PropertyGroup::Scale, TweenValue::Planar(v)) => item.current.scale = v,
                        (PropertyGroup::Highlight, TweenValue::Scalar(v)) => item.highlight = v,
                        (PropertyGroup::Reveal, TweenValue::Scalar(v)) => item.corner_reveal = v,
                        // Keys are always started with matching shapes.
                        _ => {}
                    }
                }
            }
            TweenKey::ContainerSpin => {
                if let TweenValue::Scalar(v) = value {
                    self.container_spin = v.rem_euclid(TAU);
                }
            }
        }
    }

    fn drive_transition(&mut self, dt: Duration) {
        let advance = {
            let Some(tr) = self.transition.as_mut() else {
                return;
            };
            match tr.phase {
                TransitionPhase::Gathering => {
                    if self.tweens.has_matching(is_choreo_key) {
                        Advance::Stay
                    } else {
                        Advance::Gathered
                    }
                }
                TransitionPhase::Paused => {
                    tr.pause.tick(dt);
                    if tr.pause.is_complete() {
                        Advance::FanOut
                    } else {
                        Advance::Stay
                    }
                }
                TransitionPhase::FanningOut => {
                    if self.tweens.has_matching(is_choreo_key) {
                        Advance::Stay
                    } else {
                        Advance::Settle
                    }
                }
            }
        };

        match advance {
            Advance::Stay => {}
            Advance::Gathered => {
                if let Some(tr) = self.transition.as_mut() {
                    // The ring visual swaps during the pause window; detach
                    // is a guarded no-op when it was never attached.
                    if tr.from == ViewMode::Circle {
                        self.ring_visual = false;
                    }
                    if tr.to == ViewMode::Circle {
                        self.ring_visual = true;
                    }
                    tr.phase = TransitionPhase::Paused;
                }
            }
            Advance::FanOut => {
                if let Some(tr) = self.transition.as_mut() {
                    tr.phase = TransitionPhase::FanningOut;
                }
                self.begin_fan_out();
            }
            Advance::Settle => self.settle(),
        }
    }

    fn begin_fan_out(&mut self) {
        let Some(to) = self.transition.as_ref().map(|t| t.to) else {
            return;
        };
        let count = self.registry.len();
        let offsets = stagger_offsets(count, self.timing.fan_out_stagger, StaggerMode::Linear);
        let ctx = LayoutContext {
            mode: to,
            metrics: self.metrics,
            scroll_offset: self.last_scroll_offset,
            hovered: None,
            count,
        };

        for i in 0..count {
            let id = ItemId(i);
            let (extent, cached, current) = {
                let item = &self.registry.all()[i];
                (*item.extent(), item.cached(to), item.current)
            };
            let target = match cached {
                Some(t) if t.is_finite() => t,
                Some(_) => {
                    warn!(%id, %to, "malformed cached transform; item stays at stack point");
                    self.events.push(ViewEvent::ItemSkipped { id });
                    continue;
                }
                None => {
                    let t = item_transform(&ctx, i, &extent);
                    if let Some(item) = self.registry.get_mut(id) {
                        item.set_cached(to, t);
                    }
                    t
                }
            };
            let delay = offsets[i];
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Position),
                Tween::new(current.position, target.position, self.timing.fan_out_duration)
                    .easing(ease_in_out_cubic)
                    .delay(delay),
            );
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Scale),
                Tween::new(current.scale, target.scale, self.timing.fan_out_duration)
                    .easing(ease_in_out_cubic)
                    .delay(delay),
            );
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Rotation),
                Tween::new(current.rotation, target.rotation, self.timing.fan_out_duration)
                    .easing(ease_in_out_cubic)
                    .delay(delay),
            );
        }

        // Entering the circle adds a full container turn as a flourish,
        // timed to finish with the last item's fan-out.
        if to == ViewMode::Circle {
            let span = self.timing.fan_out_duration + offsets.last().copied().unwrap_or_default();
            self.tweens.start(
                TweenKey::ContainerSpin,
                Tween::new(self.container_spin, self.container_spin + TAU, span)
                    .easing(ease_in_out_cubic),
            );
        }
    }

    fn settle(&mut self) {
        let Some(tr) = self.transition.take() else {
            return;
        };
        self.active = tr.to;
        debug!(mode = %tr.to, "transition settled");

        // The gather/fan-out path does not track facing continuously; fix
        // the yaw once the ring positions are final.
        if tr.to == ViewMode::Circle {
            for item in self.registry.iter_mut() {
                item.current.rotation.y = circle::facing_yaw(item.current.position);
            }
        }

        match tr.to {
            ViewMode::Carousel => self.reconfigure_carousel_scroll(),
            ViewMode::List | ViewMode::Circle => self.scroll.deactivate(),
        }

        self.events.push(ViewEvent::TransitionSettled { mode: tr.to });
        self.events.push(ViewEvent::ScrollReconfigured {
            enabled: self.scroll.is_enabled(),
        });

        // A resize arrived mid-flight: the choreography ran against
        // pre-resize targets, so correct everything now.
        if self.pending_relayout {
            self.pending_relayout = false;
            self.registry.invalidate_all_caches();
            self.apply_active_layout();
        }
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// Handle a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.metrics = ViewportMetrics::sanitized(width, height, self.metrics);
        if self.transition.is_some() {
            // Never recompute targets mid-flight; settle first, then fix.
            self.pending_relayout = true;
            return;
        }
        self.registry.invalidate_all_caches();
        self.apply_active_layout();
        if self.active == ViewMode::Carousel {
            self.reconfigure_carousel_scroll();
        }
    }

    // -----------------------------------------------------------------------
    // Pointer-driven state (called by the gesture adapter)
    // -----------------------------------------------------------------------

    /// Change the hovered item. Suppressed while a transition is in flight.
    ///
    /// In list mode the previously raised row lowers and the new one
    /// raises; because both go through the same `(item, Position)` tween
    /// keys, a direct row-to-row move can never leave two rows raised.
    pub fn hover(&mut self, target: Option<usize>) {
        if self.transition.is_some() {
            return;
        }
        let target = target.filter(|&i| i < self.registry.len());
        if target == self.hovered {
            return;
        }
        let previous = self.hovered;
        self.hovered = target;

        for (index, level) in [(previous, 0.0_f32), (target, 1.0_f32)] {
            let Some(i) = index else { continue };
            let id = ItemId(i);
            let Some(item) = self.registry.get(id) else {
                continue;
            };
            let highlight = item.highlight;
            self.tweens.start(
                TweenKey::Item(id, PropertyGroup::Highlight),
                Tween::new(highlight, level, self.timing.hover_duration).easing(ease_out_cubic),
            );
        }

        if self.active == ViewMode::List {
            let count = self.registry.len();
            let ctx = LayoutContext {
                mode: ViewMode::List,
                metrics: self.metrics,
                scroll_offset: 0.0,
                hovered: self.hovered,
                count,
            };
            for index in [previous, target] {
                let Some(i) = index else { continue };
                let id = ItemId(i);
                let (extent, position) = {
                    let item = &self.registry.all()[i];
                    (*item.extent(), item.current.position)
                };
                let goal = item_transform(&ctx, i, &extent).position;
                self.tweens.start(
                    TweenKey::Item(id, PropertyGroup::Position),
                    Tween::new(position, goal, self.timing.hover_duration).easing(ease_out_cubic),
                );
            }
        }
    }

    /// Rotate the circle container by `delta` radians (drag/wheel/inertia).
    ///
    /// Ignored outside settled circle mode so user input never fights the
    /// fan-out flourish tween.
    pub fn spin_by(&mut self, delta: f32) {
        if self.transition.is_some() || self.active != ViewMode::Circle {
            return;
        }
        self.container_spin = (self.container_spin + delta).rem_euclid(TAU);
    }

    /// A click landed on `id`: play the corner-reveal micro-animation and
    /// schedule navigation after the configured delay.
    pub fn activate_item(&mut self, id: ItemId) {
        let Some(item) = self.registry.get(id) else {
            return;
        };
        let reveal = item.corner_reveal;
        self.tweens.start(
            TweenKey::Item(id, PropertyGroup::Reveal),
            Tween::new(reveal, 1.0, self.timing.reveal_duration).easing(ease_out_cubic),
        );
        self.pending_nav = Some((id, Timer::new(self.timing.navigate_delay)));
    }

    // -----------------------------------------------------------------------
    // Layout helpers
    // -----------------------------------------------------------------------

    fn apply_active_layout(&mut self) {
        let count = self.registry.len();
        let ctx = LayoutContext {
            mode: self.active,
            metrics: self.metrics,
            scroll_offset: self.last_scroll_offset,
            hovered: if self.active == ViewMode::List {
                self.hovered
            } else {
                None
            },
            count,
        };
        let extents = self.registry.extents();
        let transforms = layout_all(&ctx, &extents);
        for (item, transform) in self.registry.iter_mut().zip(transforms) {
            item.current = transform;
        }
    }

    fn reconfigure_carousel_scroll(&mut self) {
        let extents = self.registry.extents();
        let max_right = carousel::max_right_edge(&extents);
        let distance = carousel::scrollable_distance(max_right, self.metrics);
        self.scroll.activate_horizontal(distance);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
