use crate::actions::{types, Signal};

/// Intents the auth slice reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    SignIn { user: String },
    SignOut,
}

impl AuthIntent {
    /// Parse the auth-level meaning of a signal, if it has one.
    ///
    /// `SIGNIN` requires a non-empty string `user` field.
    pub fn from_signal(signal: &Signal) -> Option<Self> {
        match signal.kind.as_str() {
            types::SIGNIN => {
                let user = signal.field("user")?.as_str()?;
                if user.is_empty() {
                    return None;
                }
                Some(Self::SignIn {
                    user: user.to_string(),
                })
            }
            types::SIGNOUT => Some(Self::SignOut),
            _ => None,
        }
    }
}
