use crate::actions::Signal;
use crate::mvi::Reducer;

use super::intent::AppIntent;
use super::state::AppState;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = Signal;

    fn reduce(&self, state: Option<AppState>, signal: &Signal) -> AppState {
        let state = state.unwrap_or_default();
        match AppIntent::from_signal(signal) {
            Some(AppIntent::Navigate { page }) => AppState { page: Some(page) },
            None => state,
        }
    }
}
