//! # dash-shell
//! Responsive tier resolution for a multi-breakpoint dashboard shell.
//!
//! Every page variant of the shell (mobile, tablet portrait, tablet
//! horizontal, desktop) lays itself out from a small record of spacing and
//! sizing parameters. Which record applies depends on how wide the page is
//! rendered, bucketed into a handful of named tiers. This crate is that
//! mechanism, written once:
//!
//! - A [`SizeObserver`](observer::SizeObserver) watches the viewport or a
//!   container through a [`ResizeHost`](observer::ResizeHost) and reports its
//!   [`Width`](unit::Width).
//! - [`classify`](responsive::classify) maps a width onto a [`Tier`](responsive::Tier)
//!   through a [`Thresholds`](responsive::Thresholds) table.
//! - A [`TierConfigRegistry`](registry::TierConfigRegistry) maps the tier to its
//!   record, and a [`TierSet`](registry::TierSet) bundles both.
//! - A [`TierResolver`](resolver::TierResolver) keeps the current tier and tells
//!   the layout when it changes.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//!
//! use dash_shell::prelude::*;
//!
//! let host = Rc::new(HeadlessHost::new(1200));
//! let resolver = TierResolver::new(SizeObserver::viewport(host.clone()), Desktop::tier_set());
//! assert_eq!(resolver.tier(), DesktopTier::Small);
//!
//! let _subscription = resolver.on_tier_change(|tier, metrics| {
//!     println!("{tier}: padding {}", metrics.padding);
//! });
//!
//! host.set_viewport_width(1700);
//! assert_eq!(resolver.tier(), DesktopTier::Large);
//! assert_eq!(resolver.config().padding, 32);
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. Observers, resolvers
//! and hosts use `Rc` and interior mutability and belong to the UI thread.
//! Notifications run inside the call that changed a size, and a callback that
//! has been unsubscribed is never called again, not even later in the same
//! notification pass.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for tier transitions and
//! observer bindings, `trace` for individual resize notifications, `warn` when
//! configuration overrides a preset table. Install a subscriber to see them.

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod headless;
pub mod observer;
pub mod prefs;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod responsive;
mod subscription;
pub mod unit;

pub use error::TierError;
pub use subscription::Subscription;

pub mod prelude {
    pub use crate::error::TierError;
    pub use crate::headless::HeadlessHost;
    pub use crate::observer::{
        ContainerId, MeasurementSource, ObserverConfig, ResizeHost, SizeObserver,
    };
    pub use crate::presets::{
        Desktop, DesktopTier, DeviceClass, DevicePreset, LayoutMetrics, Mobile, MobileTier,
        TabletHorizontal, TabletHorizontalTier, TabletPortrait, TabletPortraitTier,
    };
    pub use crate::registry::{TierConfigRegistry, TierSet};
    pub use crate::resolver::TierResolver;
    pub use crate::responsive::{Thresholds, Tier, TierMask, classify, range};
    pub use crate::subscription::Subscription;
    pub use crate::unit::Width;
}
