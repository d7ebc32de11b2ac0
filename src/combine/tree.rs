//! Type-erased state tree keyed by slice name.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::mvi::SliceState;

/// Object-safe view of a [`SliceState`].
pub(crate) trait SliceValue: Send {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_box(&self) -> Box<dyn SliceValue>;
    fn eq_value(&self, other: &dyn SliceValue) -> bool;
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn to_json(&self) -> serde_json::Result<Value>;
}

impl<T: SliceState> SliceValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_box(&self) -> Box<dyn SliceValue> {
        Box::new(self.clone())
    }

    fn eq_value(&self, other: &dyn SliceValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Mapping from slice name to that slice's state.
///
/// Slice values are opaque to the tree; typed access goes through
/// [`StateTree::get`]. Two trees are equal when they hold the same names and
/// every value is equal with the same concrete type.
#[derive(Default)]
pub struct StateTree {
    slices: BTreeMap<&'static str, Box<dyn SliceValue>>,
}

impl StateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`StateTree::insert`].
    pub fn with<T: SliceState>(mut self, name: &'static str, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Store `value` under `name`, replacing any previous entry.
    pub fn insert<T: SliceState>(&mut self, name: &'static str, value: T) {
        self.slices.insert(name, Box::new(value));
    }

    /// Typed view of a slice. `None` if absent or of another type.
    pub fn get<T: SliceState>(&self, name: &str) -> Option<&T> {
        self.slices.get(name)?.as_any().downcast_ref::<T>()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slices.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.slices.remove(name).is_some()
    }

    /// Slice names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// JSON snapshot of the whole tree.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<Box<dyn SliceValue>> {
        self.slices.remove(name)
    }

    pub(crate) fn put(&mut self, name: &'static str, value: Box<dyn SliceValue>) {
        self.slices.insert(name, value);
    }
}

impl Clone for StateTree {
    fn clone(&self) -> Self {
        Self {
            slices: self
                .slices
                .iter()
                .map(|(name, value)| (*name, value.clone_box()))
                .collect(),
        }
    }
}

impl PartialEq for StateTree {
    fn eq(&self, other: &Self) -> bool {
        self.slices.len() == other.slices.len()
            && self.slices.iter().all(|(name, value)| {
                other
                    .slices
                    .get(name)
                    .is_some_and(|theirs| value.eq_value(&**theirs))
            })
    }
}

impl fmt::Debug for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entry<'a>(&'a dyn SliceValue);

        impl fmt::Debug for Entry<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_value(f)
            }
        }

        f.debug_map()
            .entries(
                self.slices
                    .iter()
                    .map(|(name, value)| (name, Entry(&**value))),
            )
            .finish()
    }
}

impl Serialize for StateTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slices.len()))?;
        for (name, value) in &self.slices {
            let json = value.to_json().map_err(S::Error::custom)?;
            map.serialize_entry(name, &json)?;
        }
        map.end()
    }
}

impl SliceState for StateTree {}
