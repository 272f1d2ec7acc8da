//! Fluent builder for state graphs.

use crate::builder::error::{BuildError, BuildErrors};
use crate::builder::resolve::resolve_states;
use crate::builder::transition::{DraftState, DraftTransition, Target};
use crate::core::{Condition, Graph, Operation, StateId, Variables};
use std::collections::HashSet;
use stillwater::validation::Validation;

/// Builder for constructing state graphs with a fluent API.
///
/// The builder tracks a *current state* (set by [`state`](Self::state)) and a
/// *current transition* (set by [`when`](Self::when)). Later calls configure
/// whichever of the two they apply to, so a whole machine reads as one
/// expression in narrative order. Transition targets are names and may
/// point at states declared further down; they are resolved by
/// [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use eventgraph::builder::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .integer("presses")
///     .state("Off").initial()
///         .when("PUSH").to("On").increment("presses")
///     .state("On")
///         .when("PUSH").to("Off")
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.states().len(), 2);
/// assert_eq!(graph.initial_state().unwrap().name(), "Off");
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    states: Vec<DraftState>,
    seen: HashSet<String>,
    initial: Option<usize>,
    variables: Variables,
    current_state: Option<usize>,
    current_transition: Option<usize>,
    errors: Vec<BuildError>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            seen: HashSet::new(),
            initial: None,
            variables: Variables::new(),
            current_state: None,
            current_transition: None,
            errors: Vec::new(),
        }
    }

    /// Declare a new state and make it the current state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.seen.insert(name.clone()) {
            tracing::warn!(
                state = %name,
                "Duplicate state name; lookups resolve to the first declaration"
            );
        }
        self.states.push(DraftState::new(name));
        self.current_state = Some(self.states.len() - 1);
        self.current_transition = None;
        self
    }

    /// Mark the current state as the entry point. The last call wins.
    pub fn initial(mut self) -> Self {
        match self.current_state {
            Some(index) => self.initial = Some(index),
            None => self.errors.push(BuildError::NoCurrentState {
                operation: "initial",
            }),
        }
        self
    }

    /// Declare an integer variable with value `0`.
    ///
    /// Re-declaring resets the variable to `0`.
    pub fn integer(mut self, name: impl Into<String>) -> Self {
        self.variables.declare(name);
        self
    }

    /// Add a transition on `event` to the current state and make it the
    /// current transition.
    pub fn when(mut self, event: impl Into<String>) -> Self {
        match self.current_state {
            Some(index) => {
                let transitions = &mut self.states[index].transitions;
                transitions.push(DraftTransition::new(event.into()));
                self.current_transition = Some(transitions.len() - 1);
            }
            None => self
                .errors
                .push(BuildError::NoCurrentState { operation: "when" }),
        }
        self
    }

    /// Target the current transition at the state named `state`.
    ///
    /// The state may be declared later in the chain.
    pub fn to(self, state: impl Into<String>) -> Self {
        let target = Target::ByName(state.into());
        self.with_transition("to", |t| t.target = target)
    }

    /// Assign `value` to `variable` when the current transition fires.
    pub fn set(self, variable: impl Into<String>, value: i64) -> Self {
        let operation = Operation::Set {
            variable: variable.into(),
            value,
        };
        self.with_operation("set", operation)
    }

    /// Add one to `variable` when the current transition fires.
    pub fn increment(self, variable: impl Into<String>) -> Self {
        let operation = Operation::Increment {
            variable: variable.into(),
        };
        self.with_operation("increment", operation)
    }

    /// Subtract one from `variable` when the current transition fires.
    pub fn decrement(self, variable: impl Into<String>) -> Self {
        let operation = Operation::Decrement {
            variable: variable.into(),
        };
        self.with_operation("decrement", operation)
    }

    /// Only fire the current transition while `variable == value`.
    pub fn if_equals(self, variable: impl Into<String>, value: i64) -> Self {
        let condition = Condition::Equals {
            variable: variable.into(),
            value,
        };
        self.with_condition("if_equals", condition)
    }

    /// Only fire the current transition while `variable > value`.
    pub fn if_greater_than(self, variable: impl Into<String>, value: i64) -> Self {
        let condition = Condition::GreaterThan {
            variable: variable.into(),
            value,
        };
        self.with_condition("if_greater_than", condition)
    }

    /// Only fire the current transition while `variable < value`.
    pub fn if_less_than(self, variable: impl Into<String>, value: i64) -> Self {
        let condition = Condition::LessThan {
            variable: variable.into(),
            value,
        };
        self.with_condition("if_less_than", condition)
    }

    /// Resolve every transition target and produce the finished graph.
    ///
    /// Fails with every collected problem: builder misuse, transitions
    /// without a target, and targets naming undeclared states. A graph with
    /// no initial state still builds; binding it to an interpreter fails.
    pub fn build(self) -> Result<Graph, BuildErrors> {
        let GraphBuilder {
            states,
            initial,
            variables,
            mut errors,
            ..
        } = self;

        let resolved = match resolve_states(states) {
            Validation::Success(states) => Some(states),
            Validation::Failure(found) => {
                errors.extend(found.iter().cloned());
                None
            }
        };

        match resolved {
            Some(states) if errors.is_empty() => {
                tracing::debug!(
                    states = states.len(),
                    variables = variables.len(),
                    has_initial = initial.is_some(),
                    "Built state graph"
                );
                Ok(Graph::new(states, initial.map(StateId), variables))
            }
            _ => Err(BuildErrors(errors)),
        }
    }

    // Operations and conditions are last-wins per transition.
    fn with_operation(self, name: &'static str, operation: Operation) -> Self {
        self.with_transition(name, |t| t.operation = Some(operation))
    }

    fn with_condition(self, name: &'static str, condition: Condition) -> Self {
        self.with_transition(name, |t| t.condition = Some(condition))
    }

    fn with_transition<F>(mut self, operation: &'static str, configure: F) -> Self
    where
        F: FnOnce(&mut DraftTransition),
    {
        match self.current_state.zip(self.current_transition) {
            Some((state, transition)) => configure(&mut self.states[state].transitions[transition]),
            None => self
                .errors
                .push(BuildError::NoCurrentTransition { operation }),
        }
        self
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn builds_states_in_declaration_order() {
        let graph = GraphBuilder::new()
            .state("State 1")
            .initial()
            .state("State 2")
            .state("State 3")
            .build()
            .unwrap();

        let names: Vec<&str> = graph.states().iter().map(State::name).collect();
        assert_eq!(names, vec!["State 1", "State 2", "State 3"]);
    }

    #[test]
    fn duplicate_state_names_are_kept_in_order() {
        let graph = GraphBuilder::new()
            .state("A")
            .initial()
            .when("GO")
            .to("B")
            .state("B")
            .state("B")
            .when("BACK")
            .to("A")
            .build()
            .unwrap();

        assert_eq!(graph.states().len(), 3);
        assert_eq!(graph.state_id("B"), Some(StateId(1)));
        assert!(graph.state("B").unwrap().is_final());
        assert!(!graph.states()[2].is_final());
    }

    #[test]
    fn last_initial_call_wins() {
        let graph = GraphBuilder::new()
            .state("A")
            .initial()
            .state("B")
            .initial()
            .build()
            .unwrap();

        assert_eq!(graph.initial_state().map(State::name), Some("B"));
    }

    #[test]
    fn graph_without_initial_still_builds() {
        let graph = GraphBuilder::new().state("A").build().unwrap();

        assert!(graph.initial_state().is_none());
    }

    #[test]
    fn integer_declares_zero() {
        let graph = GraphBuilder::new()
            .integer("var")
            .integer("other")
            .state("A")
            .initial()
            .build()
            .unwrap();

        assert_eq!(graph.variable_count(), 2);
        assert!(graph.has_variable("var"));
        assert_eq!(graph.variable("var"), 0);
    }

    #[test]
    fn forward_reference_resolves_to_later_state() {
        let graph = GraphBuilder::new()
            .state("State 1")
            .initial()
            .when("FIRE")
            .to("State 2")
            .state("State 2")
            .build()
            .unwrap();

        let transition = graph.state("State 1").unwrap().transition_for("FIRE").unwrap();
        assert_eq!(graph[transition.target()].name(), "State 2");
    }

    #[test]
    fn operation_and_condition_are_last_wins() {
        let graph = GraphBuilder::new()
            .integer("var")
            .state("A")
            .initial()
            .when("GO")
            .to("A")
            .set("var", 1)
            .increment("var")
            .if_equals("var", 0)
            .if_less_than("var", 5)
            .build()
            .unwrap();

        let transition = graph.state("A").unwrap().transition_for("GO").unwrap();
        assert_eq!(
            transition.operation(),
            Some(&Operation::Increment {
                variable: "var".to_string()
            })
        );
        assert_eq!(
            transition.condition(),
            Some(&Condition::LessThan {
                variable: "var".to_string(),
                value: 5
            })
        );
    }

    #[test]
    fn retargeting_is_last_wins() {
        let graph = GraphBuilder::new()
            .state("A")
            .initial()
            .when("GO")
            .to("Missing")
            .to("B")
            .state("B")
            .build()
            .unwrap();

        let transition = graph.state("A").unwrap().transition_for("GO").unwrap();
        assert_eq!(graph[transition.target()].name(), "B");
    }

    #[test]
    fn dangling_target_fails_build() {
        let result = GraphBuilder::new()
            .state("STOP")
            .initial()
            .when("PLAY")
            .to("PLAYNG")
            .state("PLAYING")
            .build();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[BuildError::DanglingTransitionTarget {
                state: "STOP".to_string(),
                event: "PLAY".to_string(),
                target: "PLAYNG".to_string(),
            }]
        );
    }

    #[test]
    fn transition_without_target_fails_build() {
        let result = GraphBuilder::new().state("A").initial().when("GO").build();

        let errors = result.unwrap_err();
        assert!(matches!(
            errors.errors(),
            [BuildError::MissingTarget { state, event }] if state == "A" && event == "GO"
        ));
    }

    #[test]
    fn misuse_before_state_is_reported() {
        let result = GraphBuilder::new()
            .initial()
            .when("GO")
            .to("A")
            .state("A")
            .build();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                BuildError::NoCurrentState {
                    operation: "initial"
                },
                BuildError::NoCurrentState { operation: "when" },
                BuildError::NoCurrentTransition { operation: "to" },
            ]
        );
    }

    #[test]
    fn new_state_clears_current_transition() {
        let result = GraphBuilder::new()
            .state("A")
            .when("GO")
            .to("B")
            .state("B")
            .set("var", 3)
            .build();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[BuildError::NoCurrentTransition { operation: "set" }]
        );
    }

    #[test]
    fn misuse_and_dangling_targets_are_reported_together() {
        let result = GraphBuilder::new()
            .if_equals("var", 1)
            .state("A")
            .when("GO")
            .to("Nowhere")
            .build();

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors.errors()[0],
            BuildError::NoCurrentTransition {
                operation: "if_equals"
            }
        ));
        assert!(matches!(
            errors.errors()[1],
            BuildError::DanglingTransitionTarget { .. }
        ));
    }
}
