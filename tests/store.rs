mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::*;
use rootstate::actions::Signal;
use rootstate::combine::CombineReducers;
use rootstate::features::{AppState, AuthReducer, AuthState, APP, AUTH};
use rootstate::mvi::reducer_fn;
use rootstate::Store;

#[test]
fn new_store_starts_from_defaults() {
    let store = Store::new(root(), &Signal::init());
    assert_eq!(store.state(), defaults());
    assert_eq!(store.dispatch_count(), 0);
}

#[test]
fn dispatch_replaces_state() {
    let store = Store::new(root(), &Signal::init());
    store.dispatch(sign_in("alice"));
    let returned = store.dispatch(navigate(3));

    assert_eq!(returned, alice_on_page_three());
    assert_eq!(store.state(), alice_on_page_three());
    assert_eq!(store.dispatch_count(), 2);
}

#[test]
fn sign_out_wipes_store_state() {
    let store = Store::new(root(), &Signal::init());
    store.dispatch(sign_in("alice"));
    store.dispatch(navigate(3));
    store.dispatch(sign_out());

    assert_eq!(store.state(), defaults());
    assert!(store.with_state(|state| {
        state
            .get::<AuthState>(AUTH)
            .is_some_and(|auth| !auth.is_signed_in())
    }));
}

#[test]
fn returned_state_is_a_snapshot() {
    let store = Store::new(root(), &Signal::init());
    let before = store.dispatch(sign_in("alice"));
    store.dispatch(sign_out());

    assert_eq!(before.get::<AuthState>(AUTH), Some(&AuthState::signed_in("alice")));
}

#[test]
fn panicking_slice_leaves_previous_state() {
    let fragile = reducer_fn(|state: Option<AppState>, signal: &Signal| {
        if signal.kind == "EXPLODE" {
            panic!("app slice failed");
        }
        state.unwrap_or_default()
    });
    let combined = CombineReducers::new()
        .slice(APP, fragile)
        .slice(AUTH, AuthReducer)
        .build()
        .unwrap();
    let store = Store::new(combined, &Signal::init());
    store.dispatch(sign_in("alice"));
    let before = store.state();

    let result = catch_unwind(AssertUnwindSafe(|| store.dispatch(Signal::new("EXPLODE"))));

    assert!(result.is_err());
    assert_eq!(store.state(), before);
    assert_eq!(store.dispatch_count(), 1);

    // The store keeps working after the failed dispatch.
    store.dispatch(sign_in("bob"));
    assert_eq!(
        store.state().get::<AuthState>(AUTH),
        Some(&AuthState::signed_in("bob"))
    );
}
