//! Interpreter that walks a graph one event at a time.

use crate::core::{EventHistory, Graph, State, StateId, TransitionRecord, DEFAULT_HISTORY_LIMIT};
use crate::interpreter::error::InterpreterError;
use chrono::Utc;

/// Result of dispatching a single event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A transition fired. `from` and `to` may be the same state.
    Transitioned { from: StateId, to: StateId },

    /// No transition for the event, or none whose guard held.
    Ignored,
}

impl Dispatch {
    /// True when a transition fired.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Drives a [`Graph`] from its initial state.
///
/// The interpreter borrows the graph mutably for its whole lifetime: it
/// writes the graph's variables as operations fire, and no other
/// interpreter can drive the same graph at the same time.
///
/// # Example
///
/// ```rust
/// use eventgraph::builder::GraphBuilder;
/// use eventgraph::interpreter::Interpreter;
///
/// let mut graph = GraphBuilder::new()
///     .integer("var")
///     .state("State 1").initial()
///         .when("GO").to("State 2").increment("var").if_greater_than("var", -1)
///     .state("State 2")
///     .build()
///     .unwrap();
///
/// let mut interpreter = Interpreter::bind(&mut graph).unwrap();
/// interpreter.dispatch("GO");
///
/// assert_eq!(interpreter.current_state_name(), "State 2");
/// assert_eq!(interpreter.read_variable("var"), 1);
/// ```
#[derive(Debug)]
pub struct Interpreter<'g> {
    graph: &'g mut Graph,
    initial: StateId,
    current: StateId,
    history: EventHistory,
}

impl<'g> Interpreter<'g> {
    /// Bind to `graph`, starting at its initial state.
    ///
    /// The history keeps the last [`DEFAULT_HISTORY_LIMIT`] records; see
    /// [`with_history_limit`](Self::with_history_limit).
    pub fn bind(graph: &'g mut Graph) -> Result<Self, InterpreterError> {
        let initial = graph.initial_id().ok_or(InterpreterError::NoInitialState)?;

        tracing::debug!(initial = %graph[initial].name(), "Interpreter bound");

        Ok(Self {
            graph,
            initial,
            current: initial,
            history: EventHistory::with_limit(DEFAULT_HISTORY_LIMIT),
        })
    }

    /// Keep at most `limit` history records, dropping the oldest first.
    ///
    /// A limit of `0` turns history recording off.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history.set_limit(Some(limit));
        self
    }

    /// Feed one event to the machine.
    ///
    /// Transitions of the current state are scanned in declaration order.
    /// The first one for `event` that is unconditional, or whose condition
    /// holds for the current variable values, fires: its operation is
    /// applied and the machine moves to its target. Later transitions for
    /// the same event are never evaluated. If nothing fires the call changes
    /// nothing.
    pub fn dispatch(&mut self, event: &str) -> Dispatch {
        let from = self.current;
        let (states, variables) = self.graph.parts_mut();
        let source = &states[from.index()];

        let selected = source
            .transitions_for(event)
            .find(|t| t.condition().is_none_or(|c| c.check(variables)));

        let Some(transition) = selected else {
            tracing::trace!(event, state = %source.name(), "Event ignored");
            return Dispatch::Ignored;
        };

        if let Some(operation) = transition.operation() {
            let (old, new) = operation.apply(variables);
            tracing::debug!(variable = operation.variable(), old, new, "Operation applied");
        }

        let to = transition.target();
        let target = &states[to.index()];

        tracing::debug!(
            event,
            from = %source.name(),
            to = %target.name(),
            "Transition fired"
        );

        if self.history.is_recording() {
            self.history.record(TransitionRecord {
                event: event.to_string(),
                from: source.name().to_string(),
                to: target.name().to_string(),
                timestamp: Utc::now(),
            });
        }
        self.current = to;

        Dispatch::Transitioned { from, to }
    }

    /// Handle of the current state.
    pub fn current_id(&self) -> StateId {
        self.current
    }

    /// The current state.
    pub fn current_state(&self) -> &State {
        &self.graph[self.current]
    }

    /// Name of the current state.
    pub fn current_state_name(&self) -> &str {
        self.current_state().name()
    }

    /// Current value of `name`; undeclared names read as `0`.
    pub fn read_variable(&self, name: &str) -> i64 {
        self.graph.variable(name)
    }

    /// True when the current state has no outgoing transitions.
    pub fn is_final(&self) -> bool {
        self.current_state().is_final()
    }

    /// Fired transitions, oldest first, within the retention limit.
    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    /// The bound graph, including its live variable values.
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Return to the initial state and clear the history.
    ///
    /// Variables keep their current values.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.history.clear();
    }
}
