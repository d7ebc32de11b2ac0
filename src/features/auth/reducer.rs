use crate::actions::Signal;
use crate::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = Signal;

    fn reduce(&self, state: Option<AuthState>, signal: &Signal) -> AuthState {
        let state = state.unwrap_or_default();
        match AuthIntent::from_signal(signal) {
            Some(AuthIntent::SignIn { user }) => AuthState { user: Some(user) },
            Some(AuthIntent::SignOut) => AuthState::default(),
            None => state,
        }
    }
}
