//! Headless resize host for tests, benchmarks and non-windowed consumers.
//!
//! [`HeadlessHost`] keeps a viewport width and a set of containers in memory
//! and dispatches resize notifications synchronously, inside the call that
//! changed a size, the way a windowing event loop would.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use dash_shell::headless::HeadlessHost;
//! use dash_shell::observer::SizeObserver;
//! use dash_shell::unit::Width;
//!
//! let host = Rc::new(HeadlessHost::new(1280));
//! let content = host.create_container();
//! let observer = SizeObserver::container(host.clone(), content);
//!
//! // Not mounted yet: viewport width minus the sidebar allowance.
//! assert_eq!(observer.current_width(), Width(1200));
//!
//! host.mount(content, 960);
//! assert_eq!(observer.current_width(), Width(960));
//! ```
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::observer::{ContainerId, ListenerKey, MeasurementSource, ResizeHost};
use crate::unit::Width;

struct Listener {
    source: MeasurementSource,
    callback: Rc<dyn Fn()>,
}

/// An in-memory [`ResizeHost`].
pub struct HeadlessHost {
    viewport: Cell<Width>,
    containers: RefCell<SlotMap<ContainerId, Option<Width>>>,
    listeners: RefCell<SlotMap<ListenerKey, Listener>>,
}

impl HeadlessHost {
    pub fn new(viewport_width: impl Into<Width>) -> Self {
        Self {
            viewport: Cell::new(viewport_width.into()),
            containers: RefCell::new(SlotMap::with_key()),
            listeners: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Simulates a window resize.
    pub fn set_viewport_width(&self, width: impl Into<Width>) -> &Self {
        self.viewport.set(width.into());
        self.dispatch(MeasurementSource::Viewport);
        self
    }

    /// Simulates a drag-resize gesture: one notification per width.
    pub fn drag_viewport<W: Into<Width>>(&self, widths: impl IntoIterator<Item = W>) -> &Self {
        for width in widths {
            self.set_viewport_width(width);
        }
        self
    }

    /// Registers a container that has not been mounted yet.
    pub fn create_container(&self) -> ContainerId {
        self.containers.borrow_mut().insert(None)
    }

    /// Mounts a container with its first measurement.
    pub fn mount(&self, id: ContainerId, width: impl Into<Width>) -> &Self {
        self.set_container(id, Some(width.into()))
    }

    pub fn resize(&self, id: ContainerId, width: impl Into<Width>) -> &Self {
        self.set_container(id, Some(width.into()))
    }

    /// Detaches a container. Observers fall back to the viewport estimate.
    pub fn unmount(&self, id: ContainerId) -> &Self {
        self.set_container(id, None)
    }

    /// Forgets a container entirely. Listeners bound to it stay registered
    /// but will only ever see the fallback width.
    pub fn remove_container(&self, id: ContainerId) -> bool {
        let removed = self.containers.borrow_mut().remove(id).is_some();
        if removed {
            self.dispatch(MeasurementSource::Container(id));
        }
        removed
    }

    pub fn is_mounted(&self, id: ContainerId) -> bool {
        matches!(self.containers.borrow().get(id), Some(Some(_)))
    }

    /// Number of listeners currently registered, across all sources.
    pub fn active_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listeners_for(&self, source: MeasurementSource) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|listener| listener.source == source)
            .count()
    }

    fn set_container(&self, id: ContainerId, width: Option<Width>) -> &Self {
        let known = match self.containers.borrow_mut().get_mut(id) {
            Some(slot) => {
                *slot = width;
                true
            }
            None => false,
        };
        if known {
            self.dispatch(MeasurementSource::Container(id));
        } else {
            tracing::warn!(?id, "resize for unknown container ignored");
        }
        self
    }

    fn dispatch(&self, source: MeasurementSource) {
        let targets: SmallVec<[(ListenerKey, Rc<dyn Fn()>); 4]> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, listener)| listener.source == source)
            .map(|(key, listener)| (key, listener.callback.clone()))
            .collect();

        for (key, callback) in targets {
            // A listener released by an earlier callback in this pass is skipped.
            if self.listeners.borrow().contains_key(key) {
                callback();
            }
        }
    }
}

impl ResizeHost for HeadlessHost {
    fn viewport_width(&self) -> Width {
        self.viewport.get()
    }

    fn container_width(&self, id: ContainerId) -> Option<Width> {
        self.containers.borrow().get(id).copied().flatten()
    }

    fn listen(&self, source: MeasurementSource, callback: Box<dyn Fn()>) -> ListenerKey {
        self.listeners.borrow_mut().insert(Listener {
            source,
            callback: Rc::from(callback),
        })
    }

    fn unlisten(&self, key: ListenerKey) -> bool {
        self.listeners.borrow_mut().remove(key).is_some()
    }
}

impl fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("viewport", &self.viewport.get())
            .field("containers", &self.containers.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
