//! Root reducer: a combined reducer plus the state-reset rule.

use crate::mvi::{Intent, Reducer};

/// Wraps a reducer and wipes its state whenever a reset intent arrives.
///
/// On a reset intent the incoming state is dropped and the inner reducer is
/// called with `None`, so every slice starts over from its default. No
/// value from before the reset survives into the result. All other intents
/// are passed to the inner reducer untouched.
pub struct RootReducer<R> {
    inner: R,
    reset_on: Vec<String>,
}

impl<R: Reducer> RootReducer<R> {
    /// Reset the state of `inner` whenever an intent of kind `reset_on`
    /// is reduced.
    pub fn new(inner: R, reset_on: impl Into<String>) -> Self {
        Self {
            inner,
            reset_on: vec![reset_on.into()],
        }
    }

    /// Register one more discriminator that triggers a reset.
    pub fn also_reset_on(mut self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        if !self.resets_on(&kind) {
            self.reset_on.push(kind);
        }
        self
    }

    /// Whether an intent of this kind wipes the state.
    pub fn resets_on(&self, kind: &str) -> bool {
        self.reset_on.iter().any(|k| k == kind)
    }

    /// Discriminators that trigger a reset.
    pub fn reset_kinds(&self) -> &[String] {
        &self.reset_on
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Reducer> Reducer for RootReducer<R> {
    type State = R::State;
    type Intent = R::Intent;

    fn reduce(&self, state: Option<Self::State>, intent: &Self::Intent) -> Self::State {
        let state = if self.resets_on(intent.kind()) {
            None
        } else {
            state
        };
        self.inner.reduce(state, intent)
    }
}
