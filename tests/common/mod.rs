//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

use rootstate::actions::{types, Signal};
use rootstate::combine::{CombinedReducer, RootReducer, StateTree};
use rootstate::features::{self, AppState, AuthState, APP, AUTH};
use serde_json::json;

pub type AppRoot = RootReducer<CombinedReducer<Signal>>;

/// The application root reducer resetting on `SIGNOUT`.
pub fn root() -> AppRoot {
    features::root_reducer(&[types::SIGNOUT]).expect("application slices are valid")
}

/// `{ app: { page: 3 }, auth: { user: "alice" } }`
pub fn alice_on_page_three() -> StateTree {
    StateTree::new()
        .with(APP, AppState::on_page(3))
        .with(AUTH, AuthState::signed_in("alice"))
}

/// `{ app: {}, auth: { user: null } }`
pub fn defaults() -> StateTree {
    StateTree::new()
        .with(APP, AppState::default())
        .with(AUTH, AuthState::default())
}

pub fn sign_out() -> Signal {
    Signal::new(types::SIGNOUT)
}

pub fn sign_in(user: &str) -> Signal {
    Signal::with_payload(types::SIGNIN, json!({ "user": user }))
}

pub fn navigate(page: u32) -> Signal {
    Signal::with_payload(types::NAVIGATE, json!({ "page": page }))
}

/// A spread of prior states, including the uninitialized one.
pub fn prior_states() -> Vec<Option<StateTree>> {
    vec![
        None,
        Some(StateTree::new()),
        Some(defaults()),
        Some(alice_on_page_three()),
        Some(StateTree::new().with(AUTH, AuthState::signed_in("bob"))),
    ]
}

/// A spread of signals none of which is a reset.
pub fn ordinary_signals() -> Vec<Signal> {
    vec![
        Signal::init(),
        Signal::new("NOOP"),
        sign_in("carol"),
        navigate(7),
        Signal::with_payload("UNKNOWN", json!([1, 2, 3])),
    ]
}
