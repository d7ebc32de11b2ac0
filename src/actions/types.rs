//! Well-known signal discriminators.
//!
//! Producers and reducers must agree on these values; they are the only
//! coupling between the two sides.

/// Dispatched by the store once, before any other signal.
pub const INIT: &str = "@@rootstate/INIT";

/// A user signed in. Payload: `{"user": "<name>"}`.
pub const SIGNIN: &str = "SIGNIN";

/// The user signed out. Resets the whole state tree.
pub const SIGNOUT: &str = "SIGNOUT";

/// The user moved to another page. Payload: `{"page": <n>}`.
pub const NAVIGATE: &str = "NAVIGATE";
