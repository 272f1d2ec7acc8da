//! Eventgraph: a flat, event-driven finite state machine
//!
//! A machine is described with a fluent builder, resolved into an immutable
//! [`Graph`], and then driven one event at a time by an [`Interpreter`].
//!
//! # Core Concepts
//!
//! - **Graph**: States in declaration order, one initial state, and a store
//!   of integer variables
//! - **Transitions**: Fire on a named event, optionally guarded by an integer
//!   [`Condition`] and optionally applying an integer [`Operation`]
//! - **First match wins**: Among transitions of the current state for the
//!   same event, the earliest declared eligible one fires; the rest are
//!   never evaluated
//! - **Lenient reads**: Undeclared variables read as `0`; events with no
//!   eligible transition are ignored
//!
//! # Example
//!
//! ```rust
//! use eventgraph::{GraphBuilder, Interpreter};
//!
//! let mut graph = GraphBuilder::new()
//!     .integer("track")
//!     .state("STOP").initial()
//!         .when("PLAY").to("PLAYING").set("track", 1).if_equals("track", 0)
//!         .when("PLAY").to("PLAYING")
//!     .state("PLAYING")
//!         .when("STOP").to("STOP")
//!     .build()
//!     .unwrap();
//!
//! let mut player = Interpreter::bind(&mut graph).unwrap();
//!
//! player.dispatch("PLAY");
//! assert_eq!(player.current_state_name(), "PLAYING");
//! assert_eq!(player.read_variable("track"), 1);
//!
//! // No PLAY transition out of PLAYING: nothing changes.
//! player.dispatch("PLAY");
//! assert_eq!(player.current_state_name(), "PLAYING");
//! assert_eq!(player.read_variable("track"), 1);
//! ```

pub mod builder;
pub mod core;
pub mod interpreter;

// Re-export commonly used types
pub use builder::{BuildError, BuildErrors, GraphBuilder};
pub use core::{Condition, EventHistory, Graph, Operation, State, StateId, Transition};
pub use interpreter::{Dispatch, Interpreter, InterpreterError};
