//! Width observation for a viewport or a rendered container.
//!
//! A [`SizeObserver`] holds exactly one binding on a [`ResizeHost`], the
//! platform boundary that knows the current viewport and container sizes and
//! fires resize notifications. The observer owns its state; nothing about the
//! current width is kept in globals, and dropping the observer releases the
//! binding.
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::new_key_type;

use crate::subscription::{Subscribers, Subscription};
use crate::unit::Width;

new_key_type! {
    /// A rendered container known to a [`ResizeHost`].
    pub struct ContainerId;

    /// A resize listener registered on a [`ResizeHost`].
    pub struct ListenerKey;
}

/// What an observer measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementSource {
    Viewport,
    Container(ContainerId),
}

/// The platform side of width observation.
///
/// Hosts deliver notifications synchronously, on the thread that owns them,
/// whenever the size behind a source may have changed. Listeners re-read the
/// size through [`viewport_width`](ResizeHost::viewport_width) or
/// [`container_width`](ResizeHost::container_width), so hosts may notify more
/// often than sizes actually change.
pub trait ResizeHost {
    fn viewport_width(&self) -> Width;

    /// The measured width of a container, or `None` while it is not mounted.
    fn container_width(&self, id: ContainerId) -> Option<Width>;

    /// Registers `callback` for resize notifications of `source`. Viewport
    /// sources map to the window resize event, containers to element resize
    /// notifications.
    fn listen(&self, source: MeasurementSource, callback: Box<dyn Fn()>) -> ListenerKey;

    /// Releases a listener. Returns `false` if `key` was not registered.
    fn unlisten(&self, key: ListenerKey) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverConfig {
    /// Subtracted from the viewport width to estimate a container's width
    /// before it has been measured.
    pub sidebar_allowance: u32,
}

impl ObserverConfig {
    pub const DEFAULT_SIDEBAR_ALLOWANCE: u32 = 80;
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            sidebar_allowance: Self::DEFAULT_SIDEBAR_ALLOWANCE,
        }
    }
}

struct ObserverState {
    host: Rc<dyn ResizeHost>,
    config: ObserverConfig,
    source: Cell<MeasurementSource>,
    binding: Cell<Option<ListenerKey>>,
    width: Cell<Width>,
    disposed: Cell<bool>,
    subscribers: Subscribers<dyn Fn(Width)>,
}

impl ObserverState {
    fn measure(&self) -> Width {
        match self.source.get() {
            MeasurementSource::Viewport => self.host.viewport_width(),
            MeasurementSource::Container(id) => match self.host.container_width(id) {
                Some(width) if !width.is_zero() => width,
                _ => {
                    let fallback = self.fallback_width();
                    tracing::trace!(?id, %fallback, "container not measured yet, using fallback width");
                    fallback
                }
            },
        }
    }

    fn fallback_width(&self) -> Width {
        self.host
            .viewport_width()
            .saturating_sub(self.config.sidebar_allowance)
    }

    fn refresh(&self) {
        if self.disposed.get() {
            return;
        }
        let width = self.measure();
        tracing::trace!(source = ?self.source.get(), %width, "resize notification");
        if width == self.width.replace(width) {
            return;
        }
        // A callback may resize the source. The nested pass has then
        // delivered the newer width, so this one stops.
        self.subscribers.for_each(|callback| {
            if !self.disposed.get() && self.width.get() == width {
                callback(width);
            }
        });
    }

    fn bind(self: &Rc<Self>) {
        let weak: Weak<ObserverState> = Rc::downgrade(self);
        let source = self.source.get();
        let key = self.host.listen(
            source,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.refresh();
                }
            }),
        );
        tracing::debug!(?source, "bound size observer");
        self.binding.set(Some(key));
    }

    fn unbind(&self) {
        if let Some(key) = self.binding.take() {
            self.host.unlisten(key);
            tracing::debug!(source = ?self.source.get(), "released size observer binding");
        }
    }
}

/// Reports the width of a [`MeasurementSource`] and notifies on change.
///
/// Container sources that are not mounted yet, or that measure zero, report
/// the viewport width minus [`ObserverConfig::sidebar_allowance`] until the
/// host delivers a real measurement. Subscribers then see the measured width
/// without having to re-subscribe.
pub struct SizeObserver {
    state: Rc<ObserverState>,
}

impl SizeObserver {
    pub fn new(host: Rc<dyn ResizeHost>, source: MeasurementSource, config: ObserverConfig) -> Self {
        let state = Rc::new(ObserverState {
            host,
            config,
            source: Cell::new(source),
            binding: Cell::new(None),
            width: Cell::new(Width::ZERO),
            disposed: Cell::new(false),
            subscribers: Subscribers::default(),
        });
        state.width.set(state.measure());
        state.bind();
        Self { state }
    }

    pub fn viewport(host: Rc<dyn ResizeHost>) -> Self {
        Self::new(host, MeasurementSource::Viewport, ObserverConfig::default())
    }

    pub fn container(host: Rc<dyn ResizeHost>, id: ContainerId) -> Self {
        Self::new(host, MeasurementSource::Container(id), ObserverConfig::default())
    }

    pub fn source(&self) -> MeasurementSource {
        self.state.source.get()
    }

    pub fn config(&self) -> ObserverConfig {
        self.state.config
    }

    /// The best-known width right now.
    ///
    /// This reads through to the host, so it is current even between
    /// notifications. After [`dispose`](SizeObserver::dispose) it returns the
    /// last width seen.
    pub fn current_width(&self) -> Width {
        if self.state.disposed.get() {
            return self.state.width.get();
        }
        self.state.measure()
    }

    /// Registers `callback` for width changes. Callbacks only run when the
    /// width differs from the last one reported.
    pub fn subscribe(&self, callback: impl Fn(Width) + 'static) -> Subscription {
        if self.state.disposed.get() {
            return Subscription::new(|| {});
        }
        let key = self.state.subscribers.insert(Rc::new(callback));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.subscribers.remove(key);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.len()
    }

    /// Moves the observer onto another source, e.g. once the container a view
    /// measures has been created. The old binding is released before the new
    /// one is acquired, and subscribers are told if the width changed.
    pub fn rebind(&self, source: MeasurementSource) {
        if self.state.disposed.get() || self.state.source.get() == source {
            return;
        }
        self.state.unbind();
        self.state.source.set(source);
        self.state.bind();
        self.state.refresh();
    }

    pub fn is_bound(&self) -> bool {
        self.state.binding.get().is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.disposed.get()
    }

    /// Releases the host binding and drops every subscriber. Safe to call more
    /// than once.
    pub fn dispose(&self) {
        if self.state.disposed.replace(true) {
            return;
        }
        self.state.unbind();
        self.state.subscribers.clear();
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for SizeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeObserver")
            .field("source", &self.state.source.get())
            .field("width", &self.state.width.get())
            .field("bound", &self.is_bound())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
