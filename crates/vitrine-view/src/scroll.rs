#![forbid(unsafe_code)]

//! Scroll provider contract and the direction coordinator.
//!
//! The hosting page brings its own scroll backend (a smooth-scroll library
//! wired to the DOM); this module only decides when that backend is allowed
//! to run and along which axis. Horizontal scrolling is valid in carousel
//! mode only; in list and circle modes the provider is fully torn down, not
//! merely muted, so stray update ticks cannot fight an in-flight transition.
//!
//! # Failure Modes
//!
//! - Provider construction fails (missing DOM anchor analog): the
//!   coordinator logs a warning and degrades to [`NoopScrollProvider`]
//!   (`current_pos` always 0). The view stays functional.

use std::fmt;

use tracing::warn;

/// Scroll axis for a provider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    /// Carousel strip scrolling.
    Horizontal,
    /// Default page scrolling (inside pages on fresh load).
    Vertical,
}

/// Configuration handed to a provider when it is (re)enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Axis the provider should operate along.
    pub axis: ScrollAxis,
    /// Total scrollable distance; zero means nothing to scroll.
    pub max_distance: f32,
}

/// Contract the external scroll backend fulfils.
///
/// Implementations emit their own per-tick `update` notifications to the
/// host; the view engine only polls [`current_pos`](Self::current_pos).
pub trait ScrollProvider {
    /// Enable (or reconfigure) the provider.
    fn enable(&mut self, options: ScrollOptions);

    /// Disable the provider and tear down its DOM transform side effects.
    fn disable(&mut self);

    /// Whether the provider is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Current scroll position along the active axis.
    fn current_pos(&self) -> f32;
}

/// Builds scroll provider instances on demand.
pub trait ScrollProviderFactory {
    /// Construct a provider for the given options.
    fn build(&mut self, options: ScrollOptions) -> Result<Box<dyn ScrollProvider>, ScrollSetupError>;
}

/// Why provider construction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollSetupError {
    /// The DOM anchor element the backend scrolls is missing.
    MissingAnchor {
        /// Selector that failed to resolve.
        selector: String,
    },
    /// The backend refused to initialize.
    Backend {
        /// Backend-reported reason.
        message: String,
    },
}

impl fmt::Display for ScrollSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor { selector } => {
                write!(f, "scroll anchor not found: {selector}")
            }
            Self::Backend { message } => write!(f, "scroll backend failed: {message}"),
        }
    }
}

impl std::error::Error for ScrollSetupError {}

/// Inert fallback provider: never enabled, position pinned at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollProvider;

impl ScrollProvider for NoopScrollProvider {
    fn enable(&mut self, _options: ScrollOptions) {}

    fn disable(&mut self) {}

    fn is_enabled(&self) -> bool {
        false
    }

    fn current_pos(&self) -> f32 {
        0.0
    }
}

/// Page-level context read on fresh load.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageContext {
    /// Whether the current page carries the inside-page class toggle;
    /// inside pages default to vertical scrolling.
    pub inside_page: bool,
}

impl PageContext {
    /// Default scroll axis for a fresh load of this page.
    #[must_use]
    pub fn default_axis(self) -> ScrollAxis {
        if self.inside_page {
            ScrollAxis::Vertical
        } else {
            ScrollAxis::Horizontal
        }
    }
}

/// Owns the provider lifecycle and keeps it consistent with the view mode.
pub struct ScrollDirectionCoordinator {
    factory: Box<dyn ScrollProviderFactory>,
    provider: Option<Box<dyn ScrollProvider>>,
    active_axis: Option<ScrollAxis>,
    page: PageContext,
    activations: u64,
}

impl fmt::Debug for ScrollDirectionCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollDirectionCoordinator")
            .field("active_axis", &self.active_axis)
            .field("enabled", &self.is_enabled())
            .field("activations", &self.activations)
            .finish()
    }
}

impl ScrollDirectionCoordinator {
    /// Create a coordinator with no provider yet constructed.
    #[must_use]
    pub fn new(factory: Box<dyn ScrollProviderFactory>, page: PageContext) -> Self {
        Self {
            factory,
            provider: None,
            active_axis: None,
            page,
            activations: 0,
        }
    }

    /// Build the fresh-load provider along the page's default axis.
    ///
    /// Inside pages get vertical page scrolling until the view machine
    /// activates a mode; home pages get the horizontal strip directly.
    pub fn bootstrap(&mut self) {
        let axis = self.page.default_axis();
        self.activate_axis(axis, 0.0);
    }

    /// Enable horizontal scrolling over `max_distance`.
    ///
    /// Idempotent: if a horizontal provider already exists it is
    /// reconfigured in place, never duplicated.
    pub fn activate_horizontal(&mut self, max_distance: f32) {
        self.activate_axis(ScrollAxis::Horizontal, max_distance);
    }

    /// Tear down the current provider entirely (list/circle modes and
    /// in-flight transitions). Idempotent.
    pub fn deactivate(&mut self) {
        if let Some(mut provider) = self.provider.take() {
            provider.disable();
        }
        self.active_axis = None;
    }

    /// Current scroll position; zero when no provider is active.
    #[must_use]
    pub fn current_pos(&self) -> f32 {
        self.provider.as_deref().map_or(0.0, ScrollProvider::current_pos)
    }

    /// Whether an enabled provider exists.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.as_deref().is_some_and(ScrollProvider::is_enabled)
    }

    /// Axis of the current provider, if any.
    #[must_use]
    pub fn active_axis(&self) -> Option<ScrollAxis> {
        self.active_axis
    }

    /// Total activation calls (diagnostic; self-transitions must not bump it).
    #[must_use]
    pub fn activation_count(&self) -> u64 {
        self.activations
    }

    fn activate_axis(&mut self, axis: ScrollAxis, max_distance: f32) {
        self.activations += 1;
        let options = ScrollOptions { axis, max_distance };

        // Same axis: reconfigure the existing instance in place.
        if self.active_axis == Some(axis)
            && let Some(provider) = self.provider.as_deref_mut()
        {
            provider.enable(options);
            return;
        }

        self.deactivate();
        match self.factory.build(options) {
            Ok(mut provider) => {
                provider.enable(options);
                self.provider = Some(provider);
            }
            Err(err) => {
                warn!(%err, ?axis, "scroll provider construction failed; using no-op fallback");
                self.provider = Some(Box::new(NoopScrollProvider));
            }
        }
        self.active_axis = Some(axis);
    }
}
