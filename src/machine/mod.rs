//! The driven state machine.
//!
//! A `StateMachine` owns a validated [`Net`](crate::core::Net) and the
//! current place. It is the only thing in the crate that mutates, and it
//! only does so through [`StateMachine::apply`].
//!
//! # Ownership
//!
//! The machine is single-owner and fully synchronous. `apply` takes
//! `&mut self` and runs the transition's action to completion before
//! returning. There is no internal locking: a host that needs to drive one
//! machine from several threads wraps it in its own `Mutex` (or hands it to a
//! single actor). Distinct machines share nothing.

mod error;
mod state_machine;

pub use error::ApplyError;
pub use state_machine::StateMachine;
