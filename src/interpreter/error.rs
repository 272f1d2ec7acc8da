//! Interpreter errors.

use thiserror::Error;

/// Errors raised when binding an interpreter to a graph.
///
/// Dispatch itself never fails: unmatched events and unsatisfied guards
/// are ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("Graph has no initial state. Call .initial() after .state(name) before .build()")]
    NoInitialState,
}
