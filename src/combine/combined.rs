//! Record-of-reducers combinator.

use std::collections::HashSet;

use thiserror::Error;

use super::tree::{SliceValue, StateTree};
use crate::mvi::{Intent, Reducer};

/// Errors raised while assembling a [`CombinedReducer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombineError {
    #[error("No slice reducers were registered")]
    Empty,

    #[error("Slice '{name}' is registered more than once")]
    DuplicateSlice { name: &'static str },
}

/// A slice reducer with its state type erased.
trait ErasedSlice<I>: Send + Sync {
    fn reduce(&self, state: Option<Box<dyn SliceValue>>, intent: &I) -> Box<dyn SliceValue>;
}

struct Slice<R>(R);

impl<R> ErasedSlice<R::Intent> for Slice<R>
where
    R: Reducer + Send + Sync,
{
    fn reduce(
        &self,
        state: Option<Box<dyn SliceValue>>,
        intent: &R::Intent,
    ) -> Box<dyn SliceValue> {
        // An entry of the wrong type counts as uninitialized.
        let state = state
            .and_then(|value| value.into_any().downcast::<R::State>().ok())
            .map(|boxed| *boxed);
        Box::new(self.0.reduce(state, intent))
    }
}

/// Builder for a [`CombinedReducer`].
///
/// ```
/// use rootstate::actions::Signal;
/// use rootstate::combine::CombineReducers;
/// use rootstate::features::{AppReducer, AuthReducer};
///
/// let combined = CombineReducers::<Signal>::new()
///     .slice("app", AppReducer)
///     .slice("auth", AuthReducer)
///     .build()
///     .unwrap();
/// assert_eq!(combined.slice_names().collect::<Vec<_>>(), ["app", "auth"]);
/// ```
pub struct CombineReducers<I> {
    slices: Vec<(&'static str, Box<dyn ErasedSlice<I>>)>,
}

impl<I: Intent> CombineReducers<I> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register `reducer` as the owner of slice `name`.
    pub fn slice<R>(mut self, name: &'static str, reducer: R) -> Self
    where
        R: Reducer<Intent = I> + Send + Sync + 'static,
    {
        self.slices.push((name, Box::new(Slice(reducer))));
        self
    }

    /// Freeze the set of slices.
    pub fn build(self) -> Result<CombinedReducer<I>, CombineError> {
        if self.slices.is_empty() {
            return Err(CombineError::Empty);
        }

        let mut seen = HashSet::new();
        for (name, _) in &self.slices {
            if !seen.insert(*name) {
                return Err(CombineError::DuplicateSlice { name: *name });
            }
        }

        Ok(CombinedReducer {
            slices: self.slices,
        })
    }
}

impl<I: Intent> Default for CombineReducers<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// One reducer over a [`StateTree`], delegating each named slice to the
/// reducer registered for it.
///
/// Every slice reducer receives the same intent and only its own sub-state.
/// The returned tree holds exactly the registered slice names; entries the
/// incoming tree has under other names are dropped.
pub struct CombinedReducer<I> {
    slices: Vec<(&'static str, Box<dyn ErasedSlice<I>>)>,
}

impl<I> CombinedReducer<I> {
    /// Registered slice names, in registration order.
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|(name, _)| *name)
    }
}

impl<I: Intent> Reducer for CombinedReducer<I> {
    type State = StateTree;
    type Intent = I;

    fn reduce(&self, state: Option<StateTree>, intent: &I) -> StateTree {
        let mut previous = state.unwrap_or_default();
        let mut next = StateTree::new();
        for (name, slice) in &self.slices {
            next.put(*name, slice.reduce(previous.take(name), intent));
        }
        next
    }
}
