//! Builder API for ergonomic workflow construction.
//!
//! This module provides fluent builders and a macro for declaring places and
//! transitions with minimal boilerplate. Builders only check that required
//! fields are present; the graph itself is validated once, when the machine
//! (or net) is built.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Action, Place, Transition};

/// Create a transition without an action.
///
/// # Example
///
/// ```
/// use placeflow::builder::simple_transition;
/// use placeflow::core::Transition;
///
/// let transition: Transition<u8> = simple_transition("advance", 0, 1);
/// assert!(!transition.has_action());
/// ```
pub fn simple_transition<P: Place, E>(name: impl Into<String>, from: P, to: P) -> Transition<P, E> {
    Transition::new(name, from, to)
}

/// Create a transition that runs `action` when applied.
///
/// # Example
///
/// ```
/// use placeflow::builder::action_transition;
/// use placeflow::core::{BoxError, Transition};
///
/// let transition: Transition<&str> = action_transition("ship", "packed", "shipped", || {
///     Err::<(), BoxError>("carrier offline".into())
/// });
/// assert!(transition.run_action().is_err());
/// ```
pub fn action_transition<P, E, A>(name: impl Into<String>, from: P, to: P, action: A) -> Transition<P, E>
where
    P: Place,
    A: Action<E> + 'static,
{
    Transition::new(name, from, to).with_action(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Stage {
        Start,
        End,
    }

    #[test]
    fn simple_transition_builds() {
        let transition: Transition<Stage> = simple_transition("finish", Stage::Start, Stage::End);

        assert_eq!(transition.name, "finish");
        assert_eq!(transition.from, Stage::Start);
        assert_eq!(transition.to, Stage::End);
        assert!(!transition.has_action());
    }

    #[test]
    fn action_transition_runs_action() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let transition: Transition<Stage, String> =
            action_transition("finish", Stage::Start, Stage::End, move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        assert!(transition.run_action().is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
