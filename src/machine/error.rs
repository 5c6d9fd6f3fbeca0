//! Errors raised when applying a transition.

use thiserror::Error;

/// Why `apply` did not move the machine.
///
/// In every case the current place is unchanged.
#[derive(Debug, Error)]
pub enum ApplyError<E> {
    /// No transition with this name exists anywhere in the graph.
    #[error("transition \"{name}\" does not exist")]
    UnknownTransition { name: String },

    /// The transition exists but does not start at the current place.
    #[error("cannot apply transition \"{name}\" ({from} -> {to}) on {current}")]
    IllegalTransition {
        name: String,
        from: String,
        to: String,
        current: String,
    },

    /// The transition's action failed. Holds the action's own error.
    #[error("transition action failed: {0}")]
    Action(E),
}

impl<E> ApplyError<E> {
    /// Take the action's error out, if that is what happened.
    pub fn into_action_error(self) -> Option<E> {
        match self {
            Self::Action(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_error_is_recoverable_unchanged() {
        let err: ApplyError<String> = ApplyError::Action("timeout".to_string());
        assert_eq!(err.to_string(), "transition action failed: timeout");
        assert_eq!(err.into_action_error(), Some("timeout".to_string()));
    }

    #[test]
    fn guard_errors_carry_no_action_error() {
        let err: ApplyError<String> = ApplyError::UnknownTransition {
            name: "Fly".to_string(),
        };
        assert_eq!(err.to_string(), "transition \"Fly\" does not exist");
        assert!(err.into_action_error().is_none());
    }

    #[test]
    fn illegal_transition_names_both_places() {
        let err: ApplyError<String> = ApplyError::IllegalTransition {
            name: "Back".to_string(),
            from: "B".to_string(),
            to: "A".to_string(),
            current: "A".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot apply transition \"Back\" (B -> A) on A"
        );
    }
}
