//! Base trait for slice state in MVI architecture.

use std::fmt::Debug;

use serde::Serialize;

/// Marker trait for state owned by a reducer.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Defaulted (`Default` is the value a slice starts from and resets to)
/// - Comparable (PartialEq for detecting changes)
/// - Serializable (for snapshots and the replay CLI)
pub trait SliceState: Clone + PartialEq + Default + Debug + Serialize + Send + 'static {}
