use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types;
use crate::mvi::Intent;

/// A tagged signal with an optional JSON payload.
///
/// Wire form: `{"type": "NAVIGATE", "payload": {"page": 3}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Signal {
    /// Signal without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Signal carrying `payload`.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// The store's initialization signal.
    pub fn init() -> Self {
        Self::new(types::INIT)
    }

    /// Look up a top-level field of an object payload.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref()?.get(key)
    }
}

impl Intent for Signal {
    fn kind(&self) -> &str {
        &self.kind
    }
}
