//! Replaying recorded signals through a store.
//!
//! Input is JSON Lines: one `{"type": ..., "payload": ...}` object per line.
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use thiserror::Error;

use crate::actions::Signal;
use crate::mvi::Reducer;
use crate::store::Store;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read signals: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid signal on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse every signal in `reader`.
pub fn parse_signals<B: BufRead>(reader: B) -> Result<Vec<Signal>, ReplayError> {
    let mut signals = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let signal = serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse {
            line: idx + 1,
            source,
        })?;
        signals.push(signal);
    }
    Ok(signals)
}

/// Dispatch `signals` in order, returning the state after each one.
pub fn replay<R>(store: &Store<R>, signals: Vec<Signal>) -> Vec<R::State>
where
    R: Reducer<Intent = Signal>,
{
    signals
        .into_iter()
        .map(|signal| store.dispatch(signal))
        .collect()
}
