//! Named transitions between places.

use super::action::{Action, BoxError};
use super::place::Place;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a transition action.
pub type TransitionAction<E> = Arc<dyn Action<E>>;

/// A named, directed edge from one place to another.
///
/// `from == to` is a legal self-loop: the place does not change but the
/// action, if any, still runs. Names must be non-empty and unique within a
/// graph; both are checked when the graph is validated.
///
/// # Example
///
/// ```rust
/// use placeflow::core::{BoxError, Transition};
///
/// let submit: Transition<&str> = Transition::new("submit", "draft", "review");
/// assert!(!submit.has_action());
///
/// let publish: Transition<&str> = Transition::new("publish", "review", "live")
///     .with_action(|| -> Result<(), BoxError> { Ok(()) });
/// assert!(publish.has_action());
/// ```
pub struct Transition<P: Place, E = BoxError> {
    pub name: String,
    pub from: P,
    pub to: P,
    pub action: Option<TransitionAction<E>>,
}

impl<P: Place, E> Transition<P, E> {
    /// Create a transition without an action.
    pub fn new(name: impl Into<String>, from: P, to: P) -> Self {
        Self {
            name: name.into(),
            from,
            to,
            action: None,
        }
    }

    /// Attach an action, replacing any previous one.
    pub fn with_action<A>(mut self, action: A) -> Self
    where
        A: Action<E> + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Run the action if there is one. A transition without an action
    /// always succeeds.
    pub fn run_action(&self) -> Result<(), E> {
        match &self.action {
            Some(action) => action.run(),
            None => Ok(()),
        }
    }
}

impl<P: Place, E> Clone for Transition<P, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}

impl<P: Place, E> fmt::Debug for Transition<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("action", &self.has_action())
            .finish()
    }
}
