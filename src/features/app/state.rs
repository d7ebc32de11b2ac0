use serde::Serialize;

use crate::mvi::SliceState;

/// Default serializes to `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SliceState for AppState {}

impl AppState {
    pub fn on_page(page: u32) -> Self {
        Self { page: Some(page) }
    }
}
