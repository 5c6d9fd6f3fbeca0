//! Errors raised while building and querying a workflow graph.

use std::fmt;
use thiserror::Error;

/// Which end of a transition an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// Structural problems that make a graph definition unusable.
///
/// These only surface during construction. None of them can be retried
/// without changing the definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no places given")]
    NoPlaces,

    #[error("duplicate place: {place}")]
    DuplicatePlace { place: String },

    #[error("transition from {from} to {to} has no name")]
    UnnamedTransition { from: String, to: String },

    #[error("transition \"{transition}\" {endpoint} place does not exist: {place}")]
    DanglingTransition {
        transition: String,
        endpoint: Endpoint,
        place: String,
    },

    #[error("duplicate transition: \"{name}\"")]
    DuplicateTransition { name: String },

    #[error("unreachable place detected: {place}")]
    UnreachablePlace { place: String },
}

/// Errors from read-only queries against a graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("place does not exist: {place}")]
    UnknownPlace { place: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let err = ValidationError::DanglingTransition {
            transition: "Init".to_string(),
            endpoint: Endpoint::To,
            place: "Two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "transition \"Init\" to place does not exist: Two"
        );

        let err = ValidationError::UnreachablePlace {
            place: "Orphan".to_string(),
        };
        assert_eq!(err.to_string(), "unreachable place detected: Orphan");

        let err = QueryError::UnknownPlace {
            place: "7".to_string(),
        };
        assert_eq!(err.to_string(), "place does not exist: 7");
    }
}
