//! Core workflow graph types.
//!
//! This module contains the pieces every other layer builds on:
//! - Place identifiers via the `Place` trait
//! - Named transitions with optional side-effecting actions
//! - The `Net` graph definition and its structural validation
//! - Work-list reachability over transition edges
//! - History of committed transitions
//!
//! Nothing in here mutates a definition after it has been built.

mod action;
mod audit;
mod error;
mod history;
mod net;
mod place;
mod reach;
mod transition;
mod validate;

pub use action::{Action, BoxError};
pub use audit::audit;
pub use error::{Endpoint, QueryError, ValidationError};
pub use history::{History, TransitionRecord};
pub use net::Net;
pub use place::Place;
pub use reach::reachable_from;
pub use transition::{Transition, TransitionAction};

pub(crate) use place::describe;
pub(crate) use validate::validate;
