//! The in-memory settings document.

use std::collections::btree_map::{self, BTreeMap};

use super::value::SettingValue;

/// Ordered mapping from setting key to scalar value.
///
/// This is the typed in-memory representation.  Conversion to and from the
/// JSON text on disk is handled by [`crate::codec`], never by this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    values: BTreeMap<String, SettingValue>,
}

impl SettingsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Inserts or overwrites `key`.  The previous value, if any, is returned.
    ///
    /// No type check is made against the previous value; last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Option<SettingValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, SettingValue> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SettingsDocument {
    type Item = (&'a String, &'a SettingValue);
    type IntoIter = btree_map::Iter<'a, String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for SettingsDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
