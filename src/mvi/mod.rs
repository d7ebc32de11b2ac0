//! Model-View-Intent (MVI) reducer primitives.
//!
//! Every slice of the state tree, and every combinator built on top of
//! slices, is expressed through the traits in this module.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value owned by one slice
//! - **Intent**: Signal dispatched to every slice
//! - **Reducer**: Pure function `(Option<State>, &Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{reducer_fn, FnReducer, Reducer};
pub use state::SliceState;
