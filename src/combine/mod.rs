//! Composition of slice reducers into the root reducer.
//!
//! ```text
//! (state, signal)
//!        │
//!        ▼
//!   RootReducer ── reset kind? ──yes──→ state = None
//!        │                                  │
//!        ▼                                  ▼
//!   CombinedReducer ◄───────────────────────┘
//!        ├── "app"  → AppReducer(app sub-state, signal)
//!        └── "auth" → AuthReducer(auth sub-state, signal)
//! ```
//!
//! - `tree.rs` - Type-erased [`StateTree`] keyed by slice name
//! - `combined.rs` - [`CombineReducers`] builder and [`CombinedReducer`]
//! - `root.rs` - [`RootReducer`] reset guard

mod combined;
mod root;
mod tree;

pub use combined::{CombineError, CombineReducers, CombinedReducer};
pub use root::RootReducer;
pub use tree::StateTree;
