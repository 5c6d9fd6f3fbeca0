//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, BoxError, Place, Transition, TransitionAction};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<P: Place, E = BoxError> {
    name: Option<String>,
    from: Option<P>,
    to: Option<P>,
    action: Option<TransitionAction<E>>,
}

impl<P: Place, E> TransitionBuilder<P, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            name: None,
            from: None,
            to: None,
            action: None,
        }
    }

    /// Set the transition name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the source place (required).
    pub fn from(mut self, place: P) -> Self {
        self.from = Some(place);
        self
    }

    /// Set the target place (required).
    pub fn to(mut self, place: P) -> Self {
        self.to = Some(place);
        self
    }

    /// Attach an action (optional).
    pub fn action<A>(mut self, action: A) -> Self
    where
        A: Action<E> + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    ///
    /// Only checks that the required fields were set. An empty name is
    /// accepted here and rejected when the graph is validated.
    pub fn build(self) -> Result<Transition<P, E>, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let from = self.from.ok_or(BuildError::MissingFromPlace)?;
        let to = self.to.ok_or(BuildError::MissingToPlace)?;

        Ok(Transition {
            name,
            from,
            to,
            action: self.action,
        })
    }
}

impl<P: Place, E> Default for TransitionBuilder<P, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Stage {
        Draft,
        Review,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<Stage>::new()
            .from(Stage::Draft)
            .to(Stage::Review)
            .build();
        assert!(matches!(result, Err(BuildError::MissingName)));

        let result = TransitionBuilder::<Stage>::new()
            .name("submit")
            .to(Stage::Review)
            .build();
        assert!(matches!(result, Err(BuildError::MissingFromPlace)));

        let result = TransitionBuilder::<Stage>::new()
            .name("submit")
            .from(Stage::Draft)
            .build();
        assert!(matches!(result, Err(BuildError::MissingToPlace)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::<Stage>::new()
            .name("submit")
            .from(Stage::Draft)
            .to(Stage::Review)
            .build()
            .unwrap();

        assert_eq!(transition.name, "submit");
        assert_eq!(transition.from, Stage::Draft);
        assert_eq!(transition.to, Stage::Review);
        assert!(!transition.has_action());
    }

    #[test]
    fn action_is_carried_into_transition() {
        let transition = TransitionBuilder::<Stage, String>::new()
            .name("submit")
            .from(Stage::Draft)
            .to(Stage::Review)
            .action(|| Err("reviewer unavailable".to_string()))
            .build()
            .unwrap();

        assert!(transition.has_action());
        assert_eq!(
            transition.run_action(),
            Err("reviewer unavailable".to_string())
        );
    }
}
