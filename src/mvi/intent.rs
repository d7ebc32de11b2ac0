//! Base trait for intents (signals) in MVI architecture.

/// A signal that can be dispatched through a reducer.
///
/// Intents represent:
/// - User actions (sign in, navigation)
/// - System events (API responses, session expiry)
///
/// Every intent carries a string discriminator. Combinators only ever look
/// at the discriminator; the payload belongs to the slices.
pub trait Intent: Send + 'static {
    /// The discriminator (`type` field) of this intent.
    fn kind(&self) -> &str;
}
