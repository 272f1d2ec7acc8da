//! Target resolution for finished builders.
//!
//! A single pass replaces every symbolic target with the handle of the
//! state declared under that name. Failures are accumulated with
//! `Validation` so a build reports every dangling target at once instead
//! of stopping at the first.

use crate::builder::error::BuildError;
use crate::builder::transition::{DraftState, DraftTransition, Target};
use crate::core::{State, StateId, Transition};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of resolving part of a graph.
pub(crate) type Resolution<T> = Validation<T, NonEmptyVec<BuildError>>;

/// Resolve all targets of all states, preserving declaration order.
pub(crate) fn resolve_states(states: Vec<DraftState>) -> Resolution<Vec<State>> {
    let lookup = state_lookup(&states);

    let resolved: Vec<Resolution<State>> = states
        .into_iter()
        .map(|state| resolve_state(state, &lookup))
        .collect();

    Validation::all_vec(resolved)
}

/// Name to handle map. The first state declared under a name wins.
fn state_lookup(states: &[DraftState]) -> HashMap<String, StateId> {
    let mut lookup = HashMap::with_capacity(states.len());
    for (index, state) in states.iter().enumerate() {
        lookup
            .entry(state.name.clone())
            .or_insert(StateId(index));
    }
    lookup
}

fn resolve_state(state: DraftState, lookup: &HashMap<String, StateId>) -> Resolution<State> {
    let DraftState { name, transitions } = state;

    let resolved: Vec<Resolution<Transition>> = transitions
        .into_iter()
        .map(|transition| resolve_transition(&name, transition, lookup))
        .collect();

    Validation::all_vec(resolved).map(|transitions| State { name, transitions })
}

fn resolve_transition(
    state: &str,
    draft: DraftTransition,
    lookup: &HashMap<String, StateId>,
) -> Resolution<Transition> {
    let DraftTransition {
        event,
        target,
        operation,
        condition,
    } = draft;

    match target {
        Target::Unset => Validation::fail(BuildError::MissingTarget {
            state: state.to_string(),
            event,
        }),
        Target::ByName(name) => match lookup.get(&name) {
            Some(&id) => Validation::success(Transition {
                event,
                target: id,
                operation,
                condition,
            }),
            None => Validation::fail(BuildError::DanglingTransitionTarget {
                state: state.to_string(),
                event,
                target: name,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_state(name: &str, transitions: Vec<(&str, Target)>) -> DraftState {
        let mut state = DraftState::new(name.to_string());
        for (event, target) in transitions {
            let mut transition = DraftTransition::new(event.to_string());
            transition.target = target;
            state.transitions.push(transition);
        }
        state
    }

    fn by_name(name: &str) -> Target {
        Target::ByName(name.to_string())
    }

    #[test]
    fn forward_references_resolve() {
        let states = vec![
            draft_state("A", vec![("GO", by_name("C"))]),
            draft_state("B", vec![]),
            draft_state("C", vec![("BACK", by_name("A"))]),
        ];

        match resolve_states(states) {
            Validation::Success(states) => {
                assert_eq!(states.len(), 3);
                assert_eq!(states[0].transitions()[0].target(), StateId(2));
                assert_eq!(states[2].transitions()[0].target(), StateId(0));
            }
            Validation::Failure(_) => panic!("Expected resolution to succeed"),
        }
    }

    #[test]
    fn duplicate_names_resolve_to_first_declared() {
        let states = vec![
            draft_state("A", vec![("GO", by_name("B"))]),
            draft_state("B", vec![]),
            draft_state("B", vec![]),
        ];

        match resolve_states(states) {
            Validation::Success(states) => {
                assert_eq!(states.len(), 3);
                assert_eq!(states[0].transitions()[0].target(), StateId(1));
            }
            Validation::Failure(_) => panic!("Expected resolution to succeed"),
        }
    }

    #[test]
    fn accumulates_every_unresolved_target() {
        let states = vec![
            draft_state(
                "A",
                vec![("GO", by_name("Nowhere")), ("STAY", Target::Unset)],
            ),
            draft_state("B", vec![("BACK", by_name("Elsewhere"))]),
        ];

        match resolve_states(states) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_missing_target = errors.iter().any(|e| {
                    matches!(e, BuildError::MissingTarget { state, event }
                        if state == "A" && event == "STAY")
                });
                let has_nowhere = errors.iter().any(|e| {
                    matches!(e, BuildError::DanglingTransitionTarget { target, .. }
                        if target == "Nowhere")
                });
                let has_elsewhere = errors.iter().any(|e| {
                    matches!(e, BuildError::DanglingTransitionTarget { state, target, .. }
                        if state == "B" && target == "Elsewhere")
                });

                assert!(has_missing_target);
                assert!(has_nowhere);
                assert!(has_elsewhere);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_graph_resolves() {
        let result = resolve_states(Vec::new());
        assert!(result.is_success());
    }
}
