mod common;

use common::*;
use rootstate::actions::Signal;
use rootstate::combine::{CombineError, CombineReducers, StateTree};
use rootstate::features::{self, AppReducer, AppState, AuthReducer, AuthState, APP, AUTH};
use rootstate::mvi::{reducer_fn, Reducer};

#[test]
fn build_rejects_empty_set() {
    let result = CombineReducers::<Signal>::new().build();
    assert_eq!(result.err(), Some(CombineError::Empty));
}

#[test]
fn build_rejects_duplicate_names() {
    let result = CombineReducers::new()
        .slice("app", AppReducer)
        .slice("auth", AuthReducer)
        .slice("app", AppReducer)
        .build();
    assert_eq!(
        result.err(),
        Some(CombineError::DuplicateSlice { name: "app" })
    );
}

#[test]
fn slice_names_keep_registration_order() {
    let combined = CombineReducers::new()
        .slice("zeta", AuthReducer)
        .slice("alpha", AppReducer)
        .build()
        .unwrap();
    assert_eq!(combined.slice_names().collect::<Vec<_>>(), ["zeta", "alpha"]);
}

#[test]
fn uninitialized_state_yields_every_default() {
    let state = features::combined().unwrap().reduce(None, &Signal::init());
    assert_eq!(state, defaults());
}

#[test]
fn missing_slice_is_treated_as_uninitialized() {
    let partial = StateTree::new().with(AUTH, AuthState::signed_in("alice"));
    let state = features::combined()
        .unwrap()
        .reduce(Some(partial), &Signal::new("NOOP"));

    assert_eq!(state.get::<AppState>(APP), Some(&AppState::default()));
    assert_eq!(state.get::<AuthState>(AUTH), Some(&AuthState::signed_in("alice")));
}

#[test]
fn mistyped_slice_is_treated_as_uninitialized() {
    let malformed = StateTree::new()
        .with(APP, AuthState::signed_in("alice"))
        .with(AUTH, AuthState::signed_in("alice"));
    let state = features::combined()
        .unwrap()
        .reduce(Some(malformed), &Signal::new("NOOP"));

    assert_eq!(state.get::<AppState>(APP), Some(&AppState::default()));
    assert_eq!(state.get::<AuthState>(AUTH), Some(&AuthState::signed_in("alice")));
}

#[test]
fn unknown_slices_are_dropped() {
    let extra = alice_on_page_three().with("legacy", AppState::on_page(1));
    let state = features::combined()
        .unwrap()
        .reduce(Some(extra), &Signal::new("NOOP"));

    assert!(!state.contains("legacy"));
    assert_eq!(state, alice_on_page_three());
}

#[test]
fn every_slice_sees_the_same_signal() {
    let combined = features::combined().unwrap();
    let state = combined.reduce(Some(defaults()), &sign_in("alice"));
    let state = combined.reduce(Some(state), &navigate(3));
    assert_eq!(state, alice_on_page_three());
}

#[test]
fn slices_are_isolated() {
    // Two compositions that differ only in what the auth slice does.
    let greedy_auth = reducer_fn(|_: Option<AuthState>, _: &Signal| AuthState::signed_in("eve"));
    let with_greedy = CombineReducers::new()
        .slice(APP, AppReducer)
        .slice(AUTH, greedy_auth)
        .build()
        .unwrap();
    let with_normal = features::combined().unwrap();

    for prior in prior_states() {
        for signal in ordinary_signals() {
            let a = with_greedy.reduce(prior.clone(), &signal);
            let b = with_normal.reduce(prior.clone(), &signal);
            assert_eq!(a.get::<AppState>(APP), b.get::<AppState>(APP));
            assert_eq!(a.get::<AuthState>(AUTH), Some(&AuthState::signed_in("eve")));
        }
    }
}

#[test]
fn slice_only_receives_its_own_sub_state() {
    let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let recorder = {
        let seen = seen.clone();
        reducer_fn(move |state: Option<AppState>, _: &Signal| {
            seen.lock().push(state.clone());
            state.unwrap_or_default()
        })
    };
    let combined = CombineReducers::new()
        .slice(APP, recorder)
        .slice(AUTH, AuthReducer)
        .build()
        .unwrap();

    combined.reduce(Some(alice_on_page_three()), &Signal::new("NOOP"));
    combined.reduce(None, &Signal::new("NOOP"));

    assert_eq!(*seen.lock(), vec![Some(AppState::on_page(3)), None]);
}

#[test]
#[should_panic(expected = "slice failure")]
fn slice_panic_propagates() {
    let failing = reducer_fn(|_: Option<AppState>, _: &Signal| -> AppState {
        panic!("slice failure")
    });
    let combined = CombineReducers::new()
        .slice(APP, failing)
        .slice(AUTH, AuthReducer)
        .build()
        .unwrap();
    combined.reduce(None, &Signal::init());
}
