//! In-progress states and transitions held by the builder.
//!
//! Targets are stored by name here and only become
//! [`StateId`](crate::core::StateId)s when the builder resolves them.

use crate::core::{Condition, Operation};

/// Target of a transition during construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// No `.to()` call yet.
    Unset,
    /// Symbolic reference, possibly to a state declared later.
    ByName(String),
}

#[derive(Clone, Debug)]
pub(crate) struct DraftTransition {
    pub(crate) event: String,
    pub(crate) target: Target,
    pub(crate) operation: Option<Operation>,
    pub(crate) condition: Option<Condition>,
}

impl DraftTransition {
    pub(crate) fn new(event: String) -> Self {
        Self {
            event,
            target: Target::Unset,
            operation: None,
            condition: None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DraftState {
    pub(crate) name: String,
    pub(crate) transitions: Vec<DraftTransition>,
}

impl DraftState {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            transitions: Vec::new(),
        }
    }
}
