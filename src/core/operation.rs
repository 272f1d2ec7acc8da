//! Side effects applied to integer variables when a transition fires.

use super::variables::Variables;
use std::fmt;

/// Integer-mutating side effect attached to a transition.
///
/// The set of kinds is closed; there is no extension point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Assign an explicit value.
    Set { variable: String, value: i64 },
    /// Add one to the current value.
    Increment { variable: String },
    /// Subtract one from the current value.
    Decrement { variable: String },
}

impl Operation {
    /// Name of the variable this operation writes.
    pub fn variable(&self) -> &str {
        match self {
            Self::Set { variable, .. }
            | Self::Increment { variable }
            | Self::Decrement { variable } => variable,
        }
    }

    /// Value this operation would produce from `current`.
    ///
    /// Increment and decrement wrap on overflow.
    pub fn evaluate(&self, current: i64) -> i64 {
        match self {
            Self::Set { value, .. } => *value,
            Self::Increment { .. } => current.wrapping_add(1),
            Self::Decrement { .. } => current.wrapping_sub(1),
        }
    }

    /// Apply the operation to the store, returning `(old, new)`.
    pub fn apply(&self, variables: &mut Variables) -> (i64, i64) {
        let name = self.variable();
        let old = variables.get(name);
        let new = self.evaluate(old);
        variables.set(name, new);
        (old, new)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { variable, value } => write!(f, "{variable} = {value}"),
            Self::Increment { variable } => write!(f, "{variable}++"),
            Self::Decrement { variable } => write!(f, "{variable}--"),
        }
    }
}
