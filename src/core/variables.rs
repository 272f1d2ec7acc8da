//! Integer variable store shared by guards and operations.

use std::collections::HashMap;

/// Mapping from variable name to its current integer value.
///
/// Reads are lenient: a name that was never declared reads as `0`,
/// exactly like a declared variable that was never written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    values: HashMap<String, i64>,
}

impl Variables {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Declare a variable, resetting it to `0` if it already exists.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), 0);
    }

    /// Current value of `name`, or `0` when it was never declared.
    pub fn get(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }

    /// Write a value, declaring the variable if needed.
    pub fn set(&mut self, name: &str, value: i64) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }

    /// True when `name` was declared or written.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of variables in the store.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the store holds no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
