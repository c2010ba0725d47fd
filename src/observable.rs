use std::cell::RefCell;

use crate::{
    loading_state::LoadingState,
    utils::{CCStr, CheapClone},
};

type Observer<V, E> = CheapClone<dyn Fn(&LoadingState<V, E>)>;

struct Inner<V, E> {
    state: LoadingState<V, E>,
    observers: Vec<(u64, Observer<V, E>)>,
    next_id: u64,
}

/// A [LoadingState] cell publishing every change to its observers.
///
/// The owner of the cell is the single writer; observers are notified
/// synchronously, in subscription order, each time [ObservableState::set] is
/// called. Clones share the same cell and compare equal.
///
/// This type is not `Send`: it lives on the UI thread, like the dioxus
/// signals it feeds.
pub struct ObservableState<V, E = CCStr> {
    inner: CheapClone<RefCell<Inner<V, E>>>,
}

impl<V, E> Clone for ObservableState<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: CheapClone::clone(&self.inner),
        }
    }
}
impl<V, E> PartialEq for ObservableState<V, E> {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.inner, &other.inner)
    }
}
impl<V: 'static, E: 'static> Default for ObservableState<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
impl<V: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug for ObservableState<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableState")
            .field("state", &inner.state)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl<V: 'static, E: 'static> ObservableState<V, E> {
    /// Creates a cell in the [LoadingState::Idle] state
    pub fn new() -> Self {
        Self::with_state(LoadingState::Idle)
    }

    pub fn with_state(state: LoadingState<V, E>) -> Self {
        Self {
            inner: CheapClone::new(RefCell::new(Inner {
                state,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers `observer`, which stays subscribed as long as the returned
    /// [Subscription] is alive.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F: Fn(&LoadingState<V, E>) + 'static>(&self, observer: F) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let observer: Observer<V, E> = CheapClone::new(observer);
            inner.observers.push((id, observer));
            id
        };
        let weak = CheapClone::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().observers.retain(|(oid, _)| *oid != id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl<V: Clone, E: Clone> ObservableState<V, E> {
    /// Returns a copy of the current state
    pub fn get(&self) -> LoadingState<V, E> {
        self.inner.borrow().state.clone()
    }

    /// Replaces the current state and notifies every observer.
    ///
    /// Observers run after the cell is released, so they may read the state,
    /// subscribe, unsubscribe or call `set` again. Each observer receives the
    /// state current at the time it is called.
    pub fn set(&self, state: LoadingState<V, E>) {
        let observers = {
            let mut inner = self.inner.borrow_mut();
            inner.state = state;
            inner
                .observers
                .iter()
                .map(|(_, o)| CheapClone::clone(o))
                .collect::<Vec<_>>()
        };
        log::debug!(
            "ObservableState - notifying {} observer(s)",
            observers.len()
        );
        for observer in observers {
            let current = self.get();
            observer(&current);
        }
    }
}

/// Keeps an observer registered on an [ObservableState].
///
/// Dropping it unsubscribes the observer.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}
impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel();
    }
    fn cancel(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Log = CheapClone<RefCell<Vec<String>>>;

    fn recorder(log: &Log, name: &'static str) -> impl Fn(&LoadingState<u8>) + 'static {
        let log = CheapClone::clone(log);
        move |s| log.borrow_mut().push(format!("{name}:{s:?}"))
    }

    #[test]
    fn starts_idle_and_notifies_in_subscription_order() {
        let state = ObservableState::<u8>::new();
        assert_eq!(state.get(), LoadingState::Idle);

        let log = Log::default();
        let _a = state.subscribe(recorder(&log, "a"));
        let _b = state.subscribe(recorder(&log, "b"));
        state.set(LoadingState::Loading);
        state.set(LoadingState::Loaded(7));

        assert_eq!(
            *log.borrow(),
            ["a:Loading", "b:Loading", "a:Loaded(7)", "b:Loaded(7)"]
        );
        assert_eq!(state.get(), LoadingState::Loaded(7));
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let state = ObservableState::<u8>::new();
        let log = Log::default();
        let sub = state.subscribe(recorder(&log, "a"));
        let kept = state.subscribe(recorder(&log, "b"));
        assert_eq!(state.observer_count(), 2);

        drop(sub);
        kept.unsubscribe();
        assert_eq!(state.observer_count(), 0);

        state.set(LoadingState::Loading);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clones_share_the_cell() {
        let state = ObservableState::<u8>::new();
        let other = state.clone();
        assert_eq!(state, other);
        assert_ne!(state, ObservableState::new());

        let log = Log::default();
        let _sub = other.subscribe(recorder(&log, "a"));
        state.set(LoadingState::Failed("nope".into()));
        assert_eq!(*log.borrow(), ["a:Failed(CCStr(\"nope\"))"]);
    }

    #[test]
    fn observers_may_set_again() {
        let state = ObservableState::<u8>::new();
        let log = Log::default();
        let reentrant = state.clone();
        let _chain = state.subscribe(move |s| {
            if s.is_loading() {
                reentrant.set(LoadingState::Loaded(1));
            }
        });
        let _b = state.subscribe(recorder(&log, "b"));

        state.set(LoadingState::Loading);
        // the nested set already delivered the latest state to "b"
        assert_eq!(*log.borrow(), ["b:Loaded(1)", "b:Loaded(1)"]);
        assert_eq!(state.get(), LoadingState::Loaded(1));
    }

    #[test]
    fn subscription_outliving_the_state_is_harmless() {
        let state = ObservableState::<u8>::new();
        let sub = state.subscribe(|_| {});
        drop(state);
        drop(sub);
    }
}
