//! Tracks the current tier of an observed width.
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::observer::SizeObserver;
use crate::registry::TierSet;
use crate::responsive::Tier;
use crate::subscription::{Subscribers, Subscription};
use crate::unit::Width;

struct ResolverState<T, R> {
    tier_set: TierSet<T, R>,
    tier: Cell<T>,
    width: Cell<Width>,
    listeners: Subscribers<dyn Fn(T, &R)>,
}

impl<T: Tier, R: 'static> ResolverState<T, R> {
    fn update(&self, width: Width) {
        self.width.set(width);
        let tier = self.tier_set.classify(width);
        let previous = self.tier.replace(tier);
        if previous == tier {
            return;
        }
        tracing::debug!(from = %previous, to = %tier, %width, "tier changed");
        let record = self.tier_set.config_for(tier);
        // Stale once a listener's resize moved the tier again.
        self.listeners.for_each(|listener| {
            if self.tier.get() == tier {
                listener(tier, record);
            }
        });
    }
}

/// Owns a [`SizeObserver`] and reports which tier of a [`TierSet`] its width
/// falls into.
///
/// The current tier only moves when a width change crosses a threshold;
/// resize notifications that stay within a tier are absorbed here. Dropping
/// the resolver drops the observer and releases its platform binding.
pub struct TierResolver<T, R> {
    state: Rc<ResolverState<T, R>>,
    observer: SizeObserver,
    _width: Subscription,
}

impl<T: Tier, R: 'static> TierResolver<T, R> {
    pub fn new(observer: SizeObserver, tier_set: TierSet<T, R>) -> Self {
        let width = observer.current_width();
        let state = Rc::new(ResolverState {
            tier: Cell::new(tier_set.classify(width)),
            tier_set,
            width: Cell::new(width),
            listeners: Subscribers::default(),
        });

        let weak = Rc::downgrade(&state);
        let width_subscription = observer
            .subscribe(move |width| {
                if let Some(state) = weak.upgrade() {
                    state.update(width);
                }
            })
            .scoped();

        Self {
            state,
            observer,
            _width: width_subscription,
        }
    }

    pub fn tier(&self) -> T {
        self.state.tier.get()
    }

    /// The record of the current tier.
    pub fn config(&self) -> &R {
        self.state.tier_set.config_for(self.tier())
    }

    /// The width the current tier was classified from.
    pub fn width(&self) -> Width {
        self.state.width.get()
    }

    pub fn tier_set(&self) -> &TierSet<T, R> {
        &self.state.tier_set
    }

    pub fn observer(&self) -> &SizeObserver {
        &self.observer
    }

    /// Re-reads the observer and reclassifies. Only needed when the host
    /// cannot notify, e.g. a container estimate that depends on the viewport.
    pub fn refresh(&self) {
        self.state.update(self.observer.current_width());
    }

    /// Registers `callback` for tier transitions. It receives the new tier and
    /// its record, and is not called for the tier current at registration.
    pub fn on_tier_change(&self, callback: impl Fn(T, &R) + 'static) -> Subscription {
        let key = self.state.listeners.insert(Rc::new(callback));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.listeners.remove(key);
            }
        })
    }
}

impl<T: Tier, R: fmt::Debug> fmt::Debug for TierResolver<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierResolver")
            .field("tier", &self.state.tier.get())
            .field("width", &self.state.width.get())
            .field("observer", &self.observer)
            .finish()
    }
}
