//! Application shell slice.
//!
//! Tracks which page the user is on. Wiped on sign-out like every other
//! slice.

mod intent;
mod reducer;
mod state;

pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::AppState;
