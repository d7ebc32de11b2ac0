//! Reducer trait for MVI architecture.

use std::marker::PhantomData;

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Option<State>, &Intent) -> State
///
/// `None` is the uninitialized marker. A reducer called with `None` must
/// produce its default state regardless of the intent's content, otherwise
/// a state reset cannot work.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Option<Self::State>, intent: &Self::Intent) -> Self::State;

    /// Compute the state produced from scratch for `intent`.
    fn init(&self, intent: &Self::Intent) -> Self::State {
        self.reduce(None, intent)
    }
}

/// A [`Reducer`] backed by a plain function or closure.
///
/// Built with [`reducer_fn`].
pub struct FnReducer<S, I, F> {
    f: F,
    _marker: PhantomData<fn(Option<S>, &I) -> S>,
}

/// Wrap a closure `(Option<S>, &I) -> S` as a [`Reducer`].
pub fn reducer_fn<S, I, F>(f: F) -> FnReducer<S, I, F>
where
    S: SliceState,
    I: Intent,
    F: Fn(Option<S>, &I) -> S,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, I, F> Reducer for FnReducer<S, I, F>
where
    S: SliceState,
    I: Intent,
    F: Fn(Option<S>, &I) -> S,
{
    type State = S;
    type Intent = I;

    fn reduce(&self, state: Option<S>, intent: &I) -> S {
        (self.f)(state, intent)
    }
}
