#![forbid(unsafe_code)]

//! Stateful view engine: item registry, view-mode state machine, scroll
//! coordination, and gesture handling.
//!
//! The machine owns a shared collection of items and moves them between
//! three mutually exclusive presentation modes (carousel, list, circle)
//! through a two-phase gather/fan-out choreography. Everything advances on
//! an explicit `tick(dt)`; rendering, hit testing, and the scroll backend
//! are external collaborators behind traits.

pub mod gesture;
pub mod item;
pub mod machine;
pub mod scroll;

pub use gesture::{GestureConfig, InputGestureAdapter};
pub use item::{Item, ItemId, ItemRegistry};
pub use machine::{
    FrameItem, TransitionError, TransitionPhase, TransitionTiming, ViewEvent, ViewStateMachine,
};
pub use scroll::{
    NoopScrollProvider, PageContext, ScrollAxis, ScrollDirectionCoordinator, ScrollOptions,
    ScrollProvider, ScrollProviderFactory, ScrollSetupError,
};
pub use vitrine_layout::ViewMode;
