//! Host for a root reducer.
//!
//! The store owns the authoritative state, feeds it one intent at a time
//! through the reducer and hands out snapshots. Reducers stay pure; any
//! logging about dispatch happens here.

use parking_lot::Mutex;

use crate::mvi::{Intent, Reducer};

struct Inner<S> {
    state: S,
    dispatched: u64,
}

/// Serializes dispatches against a single reducer.
///
/// Dispatches never overlap: the lock is held while the reducer runs, so one
/// intent is fully processed before the next one is looked at.
pub struct Store<R: Reducer> {
    reducer: R,
    inner: Mutex<Inner<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store whose initial state is `reducer.init(init)`.
    pub fn new(reducer: R, init: &R::Intent) -> Self {
        let state = reducer.init(init);
        tracing::debug!(kind = init.kind(), "Store initialized");
        Self {
            reducer,
            inner: Mutex::new(Inner {
                state,
                dispatched: 0,
            }),
        }
    }

    /// Reduce `intent` against the current state and make the result current.
    ///
    /// Returns a copy of the new state. If the reducer panics the panic
    /// propagates to the caller and the previous state stays current.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let mut inner = self.inner.lock();
        let current = inner.state.clone();
        let next = self.reducer.reduce(Some(current), &intent);
        let changed = next != inner.state;
        inner.state = next;
        inner.dispatched += 1;
        tracing::debug!(
            kind = intent.kind(),
            changed,
            dispatched = inner.dispatched,
            "Dispatched"
        );
        inner.state.clone()
    }

    /// Copy of the current state.
    pub fn state(&self) -> R::State {
        self.inner.lock().state.clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.inner.lock().state)
    }

    /// Number of intents dispatched since creation.
    pub fn dispatch_count(&self) -> u64 {
        self.inner.lock().dispatched
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }
}
