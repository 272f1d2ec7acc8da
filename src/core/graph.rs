//! The finished state graph.

use super::state::{State, StateId};
use super::variables::Variables;
use std::ops::Index;

/// A complete, resolved finite state machine.
///
/// Produced by [`GraphBuilder::build`](crate::builder::GraphBuilder::build).
/// Every transition target points at a state in this graph's own list.
/// The structure is immutable once built; only the variable store changes,
/// and only through an [`Interpreter`](crate::interpreter::Interpreter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    states: Vec<State>,
    initial: Option<StateId>,
    pub(crate) variables: Variables,
}

impl Graph {
    pub(crate) fn new(states: Vec<State>, initial: Option<StateId>, variables: Variables) -> Self {
        Self {
            states,
            initial,
            variables,
        }
    }

    /// States in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// First state declared under `name`.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.state_id(name).map(|id| &self[id])
    }

    /// Handle of the first state declared under `name`.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId)
    }

    /// State behind `id`, or `None` if the handle is out of range for this graph.
    pub fn state_by_id(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// Handle of the entry point, if one was marked.
    pub fn initial_id(&self) -> Option<StateId> {
        self.initial
    }

    /// Entry point, or `None` if no state was marked initial.
    pub fn initial_state(&self) -> Option<&State> {
        self.initial.and_then(|id| self.state_by_id(id))
    }

    /// The variable store with its current values.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Current value of `name`; undeclared names read as `0`.
    pub fn variable(&self, name: &str) -> i64 {
        self.variables.get(name)
    }

    /// Number of declared variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// True when `name` was declared.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// Read-only structure alongside the writable variable store, so a
    /// selected transition can be applied while it is still borrowed.
    pub(crate) fn parts_mut(&mut self) -> (&[State], &mut Variables) {
        (&self.states, &mut self.variables)
    }
}

/// Direct access to a state by handle.
///
/// # Panics
///
/// Panics if `id` does not belong to this graph, i.e. its index is past the
/// last state. Handles taken from one graph are not valid in another; use
/// [`Graph::state_by_id`] when the handle may be foreign.
impl Index<StateId> for Graph {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}
