//! Graph model: states, transitions, guards, operations and variables.
//!
//! This module contains the data side of the machine:
//! - `Graph`, the resolved machine handed to the interpreter
//! - `State` / `Transition`, with first-match-wins ordering
//! - `Condition` guards and `Operation` side effects over `Variables`
//! - `EventHistory`, the log of fired transitions
//!
//! Nothing here mutates a graph's structure; only the variable store
//! changes once a graph is built.

mod condition;
mod graph;
mod history;
mod operation;
mod state;
mod variables;

pub use condition::Condition;
pub use graph::Graph;
pub use history::{EventHistory, TransitionRecord, DEFAULT_HISTORY_LIMIT};
pub use operation::Operation;
pub use state::{State, StateId, Transition};
pub use variables::Variables;
