//! Build errors for the graph builder.

use thiserror::Error;

/// Problems found while building a graph.
///
/// Builder calls never fail mid-chain; misuse is recorded and reported by
/// [`GraphBuilder::build`](super::GraphBuilder::build) together with any
/// resolution failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition on '{event}' from state '{state}' targets undeclared state '{target}'")]
    DanglingTransitionTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Transition on '{event}' from state '{state}' has no target. Call .to(state) after .when(event)")]
    MissingTarget { state: String, event: String },

    #[error("'{operation}' called before any state was declared. Call .state(name) first")]
    NoCurrentState { operation: &'static str },

    #[error("'{operation}' called before any transition was declared. Call .when(event) first")]
    NoCurrentTransition { operation: &'static str },
}

/// Every error collected by a failed build, in discovery order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Graph build failed with {} error(s): {}", .0.len(), join(.0))]
pub struct BuildErrors(pub(crate) Vec<BuildError>);

impl BuildErrors {
    /// Every error found, in the order it was detected.
    pub fn errors(&self) -> &[BuildError] {
        &self.0
    }

    /// Number of errors collected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for errors returned by `build()`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the collected errors.
    pub fn iter(&self) -> impl Iterator<Item = &BuildError> {
        self.0.iter()
    }
}

fn join(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
