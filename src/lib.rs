//! Placeflow: a validated Petri-net style workflow engine
//!
//! A workflow is a directed graph of places (states) and named transitions
//! (edges). Each transition may carry a side-effecting action. The graph is
//! validated once, when it is built, and frozen afterwards; a
//! [`StateMachine`] then walks it one named transition at a time.
//!
//! # Core Concepts
//!
//! - **Place**: any `Clone + Eq + Hash + Debug` value identifying a state
//! - **Transition**: a named edge `from -> to` with an optional [`Action`]
//! - **Net**: the validated, immutable graph (unique places, unique named
//!   transitions, no dangling endpoints, every place reachable from the first)
//! - **StateMachine**: the current place plus guarded `apply`
//!
//! # Example
//!
//! ```rust
//! use placeflow::core::{BoxError, Transition};
//! use placeflow::machine::{ApplyError, StateMachine};
//!
//! let mut machine: StateMachine<&str> = StateMachine::new(
//!     vec!["draft", "review", "published"],
//!     vec![
//!         Transition::new("submit", "draft", "review"),
//!         Transition::new("reject", "review", "draft"),
//!         Transition::new("publish", "review", "published")
//!             .with_action(|| -> Result<(), BoxError> { Ok(()) }),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(machine.current_place(), &"draft");
//! assert!(matches!(
//!     machine.apply("publish"),
//!     Err(ApplyError::IllegalTransition { .. })
//! ));
//!
//! machine.apply("submit").unwrap();
//! let allowed: Vec<&str> = machine
//!     .allowed_transitions()
//!     .iter()
//!     .map(|t| t.name.as_str())
//!     .collect();
//! assert_eq!(allowed, vec!["reject", "publish"]);
//!
//! machine.apply("publish").unwrap();
//! assert_eq!(machine.current_place(), &"published");
//! ```
//!
//! # Concurrency
//!
//! Machines are single-owner and synchronous and do no internal locking.
//! See [`machine`] for details.

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Action, BoxError, Net, Place, QueryError, Transition, ValidationError};
pub use crate::machine::{ApplyError, StateMachine};
