//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building a transition.
///
/// Graph-level problems (duplicates, dangling endpoints, unreachable places)
/// are reported as [`ValidationError`](crate::core::ValidationError) when the
/// machine is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition name not specified. Call .name(name)")]
    MissingName,

    #[error("Transition source place not specified. Call .from(place)")]
    MissingFromPlace,

    #[error("Transition target place not specified. Call .to(place)")]
    MissingToPlace,
}
