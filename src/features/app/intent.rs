use crate::actions::{types, Signal};

/// Intents the app slice reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Move to another page.
    Navigate { page: u32 },
}

impl AppIntent {
    /// Parse the app-level meaning of a signal, if it has one.
    ///
    /// A `NAVIGATE` signal without a valid `page` number is ignored.
    pub fn from_signal(signal: &Signal) -> Option<Self> {
        match signal.kind.as_str() {
            types::NAVIGATE => {
                let page = signal.field("page")?.as_u64()?;
                let page = u32::try_from(page).ok()?;
                Some(Self::Navigate { page })
            }
            _ => None,
        }
    }
}
