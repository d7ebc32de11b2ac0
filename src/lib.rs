//! Root state composition for a client-side state container.
//!
//! Feature slices each own a reducer and a default state. [`combine`]
//! merges them into one reducer over a [`combine::StateTree`] and adds a
//! single cross-cutting rule: a sign-out signal discards every slice's state
//! and rebuilds the tree from defaults.
//!
//! ```
//! use rootstate::actions::{types, Signal};
//! use rootstate::features::{self, AuthState};
//! use rootstate::mvi::Reducer;
//! use serde_json::json;
//!
//! let root = features::root_reducer(&[types::SIGNOUT]).unwrap();
//! let state = root.reduce(None, &Signal::with_payload(types::SIGNIN, json!({ "user": "alice" })));
//! assert_eq!(state.get::<AuthState>("auth"), Some(&AuthState::signed_in("alice")));
//!
//! let state = root.reduce(Some(state), &Signal::new(types::SIGNOUT));
//! assert_eq!(state, root.reduce(None, &Signal::new(types::SIGNOUT)));
//! ```

pub mod actions;
pub mod combine;
pub mod config;
pub mod features;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod store;

pub use actions::Signal;
pub use combine::{CombineReducers, CombinedReducer, RootReducer, StateTree};
pub use store::Store;
