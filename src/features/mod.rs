//! Feature slices of the application state.
//!
//! Each feature follows the MVI layout:
//! - `state.rs` - Slice state and its default
//! - `intent.rs` - Typed intents parsed out of a [`Signal`]
//! - `reducer.rs` - State transitions (pure, no side effects)

pub mod app;
pub mod auth;

pub use app::{AppIntent, AppReducer, AppState};
pub use auth::{AuthIntent, AuthReducer, AuthState};

use crate::actions::{types, Signal};
use crate::combine::{CombineError, CombineReducers, CombinedReducer, RootReducer};

/// Slice name of the [`app`] feature.
pub const APP: &str = "app";

/// Slice name of the [`auth`] feature.
pub const AUTH: &str = "auth";

/// The application's slices, without the reset rule.
pub fn combined() -> Result<CombinedReducer<Signal>, CombineError> {
    CombineReducers::new()
        .slice(APP, AppReducer)
        .slice(AUTH, AuthReducer)
        .build()
}

/// The application's root reducer.
///
/// Signals whose kind is listed in `reset_on` wipe the whole tree back to
/// slice defaults. An empty list falls back to [`types::SIGNOUT`].
pub fn root_reducer<S>(
    reset_on: &[S],
) -> Result<RootReducer<CombinedReducer<Signal>>, CombineError>
where
    S: AsRef<str>,
{
    let mut kinds = reset_on.iter().map(|kind| kind.as_ref().to_string());
    let first = kinds
        .next()
        .unwrap_or_else(|| types::SIGNOUT.to_string());
    Ok(kinds.fold(RootReducer::new(combined()?, first), |root, kind| {
        root.also_reset_on(kind)
    }))
}
