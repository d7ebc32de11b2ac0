use serde::Serialize;

use crate::mvi::SliceState;

/// Default serializes to `{"user": null}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AuthState {
    pub user: Option<String>,
}

impl SliceState for AuthState {}

impl AuthState {
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
