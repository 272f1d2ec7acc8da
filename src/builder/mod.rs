//! Builder API for state graph construction.
//!
//! A machine is written as a single chained expression. Transition targets
//! are names, so a transition may point at a state declared later; every
//! target is resolved in one pass when the graph is built.

pub mod error;
pub mod machine;
mod resolve;
mod transition;

pub use error::{BuildError, BuildErrors};
pub use machine::GraphBuilder;
