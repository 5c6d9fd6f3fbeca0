//! State machine that applies named transitions.

use crate::core::{
    describe, BoxError, History, Net, Place, QueryError, Transition, TransitionRecord,
    ValidationError,
};
use crate::machine::error::ApplyError;
use chrono::Utc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Drives a validated [`Net`] one named transition at a time.
///
/// The machine starts in the net's first place. The current place is always
/// one of the net's places and changes only when [`apply`](Self::apply)
/// succeeds.
///
/// # Example
///
/// ```rust
/// use placeflow::core::Transition;
/// use placeflow::machine::{ApplyError, StateMachine};
///
/// let mut machine: StateMachine<char> = StateMachine::new(
///     vec!['A', 'B'],
///     vec![
///         Transition::new("Go", 'A', 'B'),
///         Transition::new("Back", 'B', 'A'),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(machine.current_place(), &'A');
/// machine.apply("Go").unwrap();
/// assert_eq!(machine.current_place(), &'B');
///
/// let err = machine.apply("Go").unwrap_err();
/// assert!(matches!(err, ApplyError::IllegalTransition { .. }));
/// assert_eq!(machine.current_place(), &'B');
/// ```
pub struct StateMachine<P: Place, E = BoxError> {
    id: Uuid,
    net: Net<P, E>,
    current: P,
    history: History<P>,
}

impl<P: Place, E> StateMachine<P, E> {
    /// Validate a definition and start a machine in its first place.
    ///
    /// Fails with the first [`ValidationError`] found; no machine is created
    /// for an invalid definition.
    pub fn new(
        places: Vec<P>,
        transitions: Vec<Transition<P, E>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_net(Net::new(places, transitions)?))
    }

    /// Start a machine on an already validated net.
    pub fn from_net(net: Net<P, E>) -> Self {
        let current = net.initial_place().clone();
        let id = Uuid::new_v4();
        debug!(machine = %id, initial = ?current, "state machine started");

        Self {
            id,
            net,
            current,
            history: History::new(),
        }
    }

    /// Keep at most `limit` history records, dropping the oldest first.
    ///
    /// A limit of `0` turns history off. Records already kept beyond the new
    /// limit are discarded.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let mut history = History::with_limit(limit);
        for record in self.history.records().cloned() {
            history.push(record);
        }
        self.history = history;
        self
    }

    /// Identifier of this machine instance, attached to its log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn net(&self) -> &Net<P, E> {
        &self.net
    }

    pub fn current_place(&self) -> &P {
        &self.current
    }

    /// Committed transitions since the machine started or was last reset.
    pub fn history(&self) -> &History<P> {
        &self.history
    }

    /// Guard check: the transition starts at the current place.
    pub fn can_apply(&self, transition: &Transition<P, E>) -> bool {
        transition.from == self.current
    }

    /// Guard check by name. Unknown names are never applicable.
    pub fn can_apply_named(&self, name: &str) -> bool {
        self.net
            .transition(name)
            .is_some_and(|transition| self.can_apply(transition))
    }

    /// Transitions that start at the current place, in declaration order.
    ///
    /// Several transitions may lead to the same target; all are returned.
    pub fn allowed_transitions(&self) -> Vec<&Transition<P, E>> {
        self.net.outgoing(&self.current).collect()
    }

    /// Places reachable from `place` through exactly one transition.
    pub fn adjacent_places(&self, place: &P) -> Result<Vec<P>, QueryError> {
        self.net.adjacent_places(place)
    }

    /// True when no transition leaves the current place.
    pub fn is_terminal(&self) -> bool {
        self.net.outgoing(&self.current).next().is_none()
    }

    /// Apply the transition called `name`.
    ///
    /// The transition is looked up among all declared transitions, so an
    /// unknown name and a known-but-not-allowed name are reported
    /// differently. If the transition has an action it runs first; the
    /// current place only changes once the action has succeeded. An action
    /// error is returned as [`ApplyError::Action`] holding the error the
    /// action produced.
    pub fn apply(&mut self, name: &str) -> Result<(), ApplyError<E>> {
        let Some(transition) = self.net.transition(name) else {
            trace!(machine = %self.id, transition = name, "unknown transition");
            return Err(ApplyError::UnknownTransition {
                name: name.to_string(),
            });
        };

        if !self.can_apply(transition) {
            trace!(
                machine = %self.id,
                transition = name,
                current = ?self.current,
                "transition not allowed from current place"
            );
            return Err(ApplyError::IllegalTransition {
                name: name.to_string(),
                from: describe(&transition.from),
                to: describe(&transition.to),
                current: describe(&self.current),
            });
        }

        if let Err(err) = transition.run_action() {
            warn!(
                machine = %self.id,
                transition = name,
                current = ?self.current,
                "transition action failed, place unchanged"
            );
            return Err(ApplyError::Action(err));
        }

        let from = std::mem::replace(&mut self.current, transition.to.clone());
        debug!(
            machine = %self.id,
            transition = name,
            from = ?from,
            to = ?self.current,
            "transition applied"
        );
        self.history.push(TransitionRecord {
            transition: transition.name.clone(),
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Return to the initial place and forget the history.
    ///
    /// The graph itself is untouched and no actions run.
    pub fn reset(&mut self) {
        self.current = self.net.initial_place().clone();
        self.history.clear();
        debug!(machine = %self.id, initial = ?self.current, "state machine reset");
    }
}

impl<P: Place, E> std::fmt::Debug for StateMachine<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("current", &self.current)
            .field("net", &self.net)
            .finish()
    }
}
