//! Side-effecting transition actions.

/// Boxed error used as the default action error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A zero-argument, fallible operation attached to a transition.
///
/// The machine treats an action as opaque: it only looks at whether the call
/// succeeded. Closures returning `Result<(), E>` implement this trait, so most
/// callers never name it:
///
/// ```rust
/// use placeflow::core::{Action, BoxError};
///
/// let notify = || -> Result<(), BoxError> { Ok(()) };
/// assert!(notify.run().is_ok());
/// ```
///
/// Actions take `&self`. State an action needs to change must live behind
/// interior mutability (an atomic, a `Mutex`, a channel sender).
pub trait Action<E>: Send + Sync {
    /// Run the action to completion.
    fn run(&self) -> Result<(), E>;
}

impl<E, F> Action<E> for F
where
    F: Fn() -> Result<(), E> + Send + Sync,
{
    fn run(&self) -> Result<(), E> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Failing;

    impl Action<String> for Failing {
        fn run(&self) -> Result<(), String> {
            Err("disk full".to_string())
        }
    }

    #[test]
    fn closures_are_actions() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let action = move || -> Result<(), String> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };

        assert!(action.run().is_ok());
        assert!(action.run().is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn custom_action_reports_its_error() {
        let action: Arc<dyn Action<String>> = Arc::new(Failing);
        assert_eq!(action.run(), Err("disk full".to_string()));
    }
}
