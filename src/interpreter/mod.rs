//! Event-driven execution of built graphs.
//!
//! Execution is synchronous: each `dispatch` runs to completion, fires at
//! most one transition, and leaves no intermediate state observable.

mod error;
mod machine;

pub use error::InterpreterError;
pub use machine::{Dispatch, Interpreter};
