//! Authentication slice.
//!
//! Holds the signed-in user. `SIGNOUT` clears it here as well, although the
//! root reducer already resets the whole tree for that signal.

mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::AuthState;
