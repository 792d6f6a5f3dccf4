#![forbid(unsafe_code)]

//! Pointer and wheel input, translated into state-machine calls.
//!
//! [`InputGestureAdapter`] owns the raw interaction state (drag tracking,
//! inertia velocity, the last reported hover target) and forwards intent to
//! a [`ViewStateMachine`]. It holds no reference to the machine; the host
//! passes it into [`handle`] and [`tick`] each time, keeping ownership flat.
//!
//! Wheel events are consumed only while settled in circle mode, so page
//! scrolling keeps working everywhere else. Hover reports arriving during a
//! transition are remembered and re-applied once the machine settles.
//!
//! [`handle`]: InputGestureAdapter::handle
//! [`tick`]: InputGestureAdapter::tick

use std::time::Duration;

use vitrine_core::event::InputEvent;
use vitrine_layout::ViewMode;

use crate::item::ItemId;
use crate::machine::ViewStateMachine;

/// Tuning knobs for drag, wheel, and inertia behaviour.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Radians of ring rotation for a drag across the full viewport width.
    pub drag_factor: f32,
    /// Radians of ring rotation per unit of wheel delta.
    pub wheel_sensitivity: f32,
    /// Per-frame multiplier applied to the inertia velocity.
    pub inertia_decay: f32,
    /// Velocity magnitude below which inertia stops.
    pub inertia_epsilon: f32,
    /// Idle ring rotation in radians per second; zero disables it.
    pub auto_rotate_speed: f32,
    /// Max pointer travel (pixels) for a press to still count as a click.
    pub click_slop: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_factor: 3.0,
            wheel_sensitivity: 0.0015,
            inertia_decay: 0.95,
            inertia_epsilon: 0.0005,
            auto_rotate_speed: 0.05,
            click_slop: 4.0,
        }
    }
}

/// Stateful translator from [`InputEvent`]s to machine calls.
#[derive(Debug)]
pub struct InputGestureAdapter {
    config: GestureConfig,
    dragging: bool,
    last_x: f32,
    /// Total pointer travel since press; distinguishes click from drag.
    travel: f32,
    /// Per-frame inertia velocity in radians; decays in [`tick`].
    ///
    /// [`tick`]: Self::tick
    velocity: f32,
    /// The most recent hover report, kept so it can be re-applied after a
    /// transition settles (the machine ignores hover while in flight).
    raw_hover: Option<usize>,
}

impl InputGestureAdapter {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            dragging: false,
            last_x: 0.0,
            travel: 0.0,
            velocity: 0.0,
            raw_hover: None,
        }
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current inertia velocity (per-frame radians).
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Feed one input event. Returns `true` when the event was consumed
    /// and must not reach the surrounding page (only circle-mode wheel).
    pub fn handle(&mut self, event: InputEvent, machine: &mut ViewStateMachine) -> bool {
        match event {
            InputEvent::PointerDown(pointer) => {
                self.dragging = true;
                self.last_x = pointer.x;
                self.travel = 0.0;
                self.velocity = 0.0;
                false
            }
            InputEvent::PointerMove(pointer) => {
                if self.dragging {
                    let dx = pointer.x - self.last_x;
                    self.last_x = pointer.x;
                    self.travel += dx.abs();
                    // Normalized so a full-width drag turns the same amount
                    // at any viewport size.
                    let width = machine.metrics().width.max(1.0);
                    let delta = dx / width * self.config.drag_factor;
                    // spin_by ignores this outside settled circle mode.
                    machine.spin_by(delta);
                    self.velocity = delta;
                }
                false
            }
            InputEvent::PointerUp(_) => {
                let was_click = self.dragging && self.travel <= self.config.click_slop;
                self.dragging = false;
                if was_click {
                    self.velocity = 0.0;
                    if let Some(index) = machine.hovered() {
                        machine.activate_item(ItemId(index));
                    }
                }
                false
            }
            InputEvent::Wheel(wheel) => {
                if machine.active_mode() == ViewMode::Circle && !machine.in_flight() {
                    machine.spin_by(wheel.delta_y * self.config.wheel_sensitivity);
                    true
                } else {
                    false
                }
            }
            InputEvent::HoverTarget(target) => {
                self.raw_hover = target;
                machine.hover(target);
                false
            }
            InputEvent::Resize { width, height } => {
                machine.resize(width, height);
                false
            }
        }
    }

    /// Advance inertia, idle auto-rotation, and deferred hover by `dt`.
    /// Call once per frame after [`ViewStateMachine::tick`].
    pub fn tick(&mut self, dt: Duration, machine: &mut ViewStateMachine) {
        if !machine.in_flight() && machine.hovered() != self.raw_hover {
            machine.hover(self.raw_hover);
        }

        let circle_idle =
            machine.active_mode() == ViewMode::Circle && !machine.in_flight() && !self.dragging;
        if !circle_idle {
            return;
        }

        if self.velocity.abs() > self.config.inertia_epsilon {
            machine.spin_by(self.velocity);
            self.velocity *= self.config.inertia_decay;
        } else {
            self.velocity = 0.0;
            machine.spin_by(self.config.auto_rotate_speed * dt.as_secs_f32());
        }
    }
}

impl Default for InputGestureAdapter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{
        PageContext, ScrollOptions, ScrollProvider, ScrollProviderFactory, ScrollSetupError,
    };
    use vitrine_core::event::{PointerEvent, WheelEvent};
    use vitrine_core::geometry::{Vec2, ViewportMetrics};
    use vitrine_layout::ItemExtent;

    const TICK: Duration = Duration::from_millis(16);

    struct StubProvider {
        enabled: bool,
    }

    impl ScrollProvider for StubProvider {
        fn enable(&mut self, _options: ScrollOptions) {
            self.enabled = true;
        }
        fn disable(&mut self) {
            self.enabled = false;
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn current_pos(&self) -> f32 {
            0.0
        }
    }

    struct StubFactory;

    impl ScrollProviderFactory for StubFactory {
        fn build(
            &mut self,
            _options: ScrollOptions,
        ) -> Result<Box<dyn ScrollProvider>, ScrollSetupError> {
            Ok(Box::new(StubProvider { enabled: false }))
        }
    }

    fn machine_with_items(count: usize) -> ViewStateMachine {
        let mut machine = ViewStateMachine::new(
            Box::new(StubFactory),
            PageContext::default(),
            ViewportMetrics::new(1000.0, 800.0),
        );
        for i in 0..count {
            machine.register_item(
                ItemExtent::new(Vec2::new(200.0, 150.0), i as f32 * 220.0, 100.0),
                Some(format!("/work/{i}")),
            );
        }
        machine
    }

    fn settle_in_circle(machine: &mut ViewStateMachine) {
        machine.request_mode(ViewMode::Circle).unwrap();
        for _ in 0..2000 {
            machine.tick(TICK);
            if !machine.in_flight() {
                return;
            }
        }
        panic!("never settled");
    }

    #[test]
    fn drag_rotates_ring_in_circle_mode() {
        let mut machine = machine_with_items(4);
        settle_in_circle(&mut machine);
        let start = machine.container_rotation();

        let mut adapter = InputGestureAdapter::default();
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(100.0, 50.0)), &mut machine);
        adapter.handle(InputEvent::PointerMove(PointerEvent::new(180.0, 50.0)), &mut machine);
        assert!(adapter.is_dragging());
        assert!((machine.container_rotation() - start).abs() > 1e-4);
    }

    #[test]
    fn drag_outside_circle_does_not_rotate() {
        let mut machine = machine_with_items(4);
        let mut adapter = InputGestureAdapter::default();
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(100.0, 50.0)), &mut machine);
        adapter.handle(InputEvent::PointerMove(PointerEvent::new(300.0, 50.0)), &mut machine);
        assert_eq!(machine.container_rotation(), 0.0);
    }

    #[test]
    fn wheel_consumed_only_in_settled_circle() {
        let mut machine = machine_with_items(4);
        let mut adapter = InputGestureAdapter::default();

        assert!(!adapter.handle(InputEvent::Wheel(WheelEvent::new(120.0)), &mut machine));

        settle_in_circle(&mut machine);
        assert!(adapter.handle(InputEvent::Wheel(WheelEvent::new(120.0)), &mut machine));
        assert!(machine.container_rotation() > 0.0);
    }

    #[test]
    fn release_after_drag_leaves_inertia() {
        let mut machine = machine_with_items(4);
        settle_in_circle(&mut machine);

        let mut adapter = InputGestureAdapter::default();
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(0.0, 0.0)), &mut machine);
        adapter.handle(InputEvent::PointerMove(PointerEvent::new(60.0, 0.0)), &mut machine);
        adapter.handle(InputEvent::PointerUp(PointerEvent::new(60.0, 0.0)), &mut machine);

        assert!(!adapter.is_dragging());
        let v0 = adapter.velocity();
        assert!(v0 > 0.0);

        let before = machine.container_rotation();
        adapter.tick(TICK, &mut machine);
        assert!(machine.container_rotation() != before);
        assert!(adapter.velocity() < v0);
    }

    #[test]
    fn inertia_decays_below_epsilon() {
        let mut machine = machine_with_items(4);
        settle_in_circle(&mut machine);

        let mut adapter = InputGestureAdapter::default();
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(0.0, 0.0)), &mut machine);
        adapter.handle(InputEvent::PointerMove(PointerEvent::new(40.0, 0.0)), &mut machine);
        adapter.handle(InputEvent::PointerUp(PointerEvent::new(40.0, 0.0)), &mut machine);

        for _ in 0..500 {
            adapter.tick(TICK, &mut machine);
        }
        assert_eq!(adapter.velocity(), 0.0);
    }

    #[test]
    fn idle_circle_auto_rotates() {
        let mut machine = machine_with_items(4);
        settle_in_circle(&mut machine);

        let mut adapter = InputGestureAdapter::default();
        let before = machine.container_rotation();
        adapter.tick(Duration::from_secs(1), &mut machine);
        let turned = machine.container_rotation() - before;
        assert!((turned - GestureConfig::default().auto_rotate_speed).abs() < 1e-4);
    }

    #[test]
    fn short_press_on_hovered_item_activates_it() {
        let mut machine = machine_with_items(3);
        let mut adapter = InputGestureAdapter::default();

        adapter.handle(InputEvent::HoverTarget(Some(2)), &mut machine);
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(10.0, 10.0)), &mut machine);
        adapter.handle(InputEvent::PointerUp(PointerEvent::new(11.0, 10.0)), &mut machine);

        // Navigation fires after the configured delay.
        machine.tick(Duration::from_secs(1));
        let events = machine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            crate::machine::ViewEvent::Navigate { id: ItemId(2), .. }
        )));
    }

    #[test]
    fn long_drag_is_not_a_click() {
        let mut machine = machine_with_items(3);
        let mut adapter = InputGestureAdapter::default();

        adapter.handle(InputEvent::HoverTarget(Some(1)), &mut machine);
        adapter.handle(InputEvent::PointerDown(PointerEvent::new(10.0, 10.0)), &mut machine);
        adapter.handle(InputEvent::PointerMove(PointerEvent::new(60.0, 10.0)), &mut machine);
        adapter.handle(InputEvent::PointerUp(PointerEvent::new(60.0, 10.0)), &mut machine);

        machine.tick(Duration::from_secs(1));
        assert!(!machine
            .drain_events()
            .iter()
            .any(|e| matches!(e, crate::machine::ViewEvent::Navigate { .. })));
    }

    #[test]
    fn hover_reapplied_after_transition_settles() {
        let mut machine = machine_with_items(3);
        let mut adapter = InputGestureAdapter::default();

        machine.request_mode(ViewMode::List).unwrap();
        machine.tick(TICK);
        adapter.handle(InputEvent::HoverTarget(Some(1)), &mut machine);
        assert_eq!(machine.hovered(), None); // suppressed in flight

        for _ in 0..2000 {
            machine.tick(TICK);
            adapter.tick(TICK, &mut machine);
            if !machine.in_flight() {
                break;
            }
        }
        adapter.tick(TICK, &mut machine);
        assert_eq!(machine.hovered(), Some(1));
    }

    #[test]
    fn resize_event_reaches_the_machine() {
        let mut machine = machine_with_items(1);
        let mut adapter = InputGestureAdapter::default();
        adapter.handle(
            InputEvent::Resize {
                width: 640.0,
                height: 480.0,
            },
            &mut machine,
        );
        assert_eq!(machine.metrics(), ViewportMetrics::new(640.0, 480.0));
    }
}
