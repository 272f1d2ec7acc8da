//! States and their outgoing transitions.

use super::condition::Condition;
use super::operation::Operation;
use std::fmt;

/// Handle to a state inside the [`Graph`](super::Graph) that owns it.
///
/// Handles are positions in the graph's declaration-ordered state list and
/// are only meaningful for the graph that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Edge fired by a named event, optionally guarded and with a side effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub(crate) event: String,
    pub(crate) target: StateId,
    pub(crate) operation: Option<Operation>,
    pub(crate) condition: Option<Condition>,
}

impl Transition {
    /// Event name that triggers this transition.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Resolved target state.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Side effect applied when the transition fires.
    pub fn operation(&self) -> Option<&Operation> {
        self.operation.as_ref()
    }

    /// Guard that must hold for the transition to fire.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// True when firing this transition writes a variable.
    pub fn has_operation(&self) -> bool {
        self.operation.is_some()
    }

    /// A transition without a condition is always eligible once its event matches.
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}

/// Named node of the graph.
///
/// Transition order is significant: the first eligible transition for an
/// event wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub(crate) name: String,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    /// Name given at declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// First transition declared for `event`, ignoring conditions.
    pub fn transition_for(&self, event: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.event == event)
    }

    /// All transitions declared for `event`, in declaration order.
    pub fn transitions_for<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.event == event)
    }

    /// A state with no outgoing transitions can never be left.
    pub fn is_final(&self) -> bool {
        self.transitions.is_empty()
    }
}
