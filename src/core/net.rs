//! The frozen workflow graph.

use super::action::BoxError;
use super::error::{QueryError, ValidationError};
use super::place::{describe, Place};
use super::reach;
use super::transition::Transition;
use super::validate::validate;
use tracing::{debug, warn};

/// A validated graph of places and named transitions.
///
/// A `Net` can only be obtained through [`Net::new`], so every instance has
/// passed validation: places are unique, every transition is named, unique
/// and connects two known places, and every place is reachable from the
/// first one. The structure cannot be changed afterwards.
///
/// # Example
///
/// ```rust
/// use placeflow::core::{Net, Transition};
///
/// let net: Net<&str> = Net::new(
///     vec!["draft", "review", "live"],
///     vec![
///         Transition::new("submit", "draft", "review"),
///         Transition::new("reject", "review", "draft"),
///         Transition::new("publish", "review", "live"),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(net.initial_place(), &"draft");
/// assert_eq!(net.adjacent_places(&"review").unwrap(), vec!["draft", "live"]);
/// ```
pub struct Net<P: Place, E = BoxError> {
    places: Vec<P>,
    transitions: Vec<Transition<P, E>>,
}

impl<P: Place, E> Net<P, E> {
    /// Validate a definition and freeze it.
    ///
    /// The first place is the initial place.
    pub fn new(places: Vec<P>, transitions: Vec<Transition<P, E>>) -> Result<Self, ValidationError> {
        if let Err(err) = validate(&places, &transitions) {
            warn!(error = %err, "rejected workflow definition");
            return Err(err);
        }

        debug!(
            places = places.len(),
            transitions = transitions.len(),
            "workflow definition validated"
        );

        Ok(Self {
            places,
            transitions,
        })
    }

    pub fn places(&self) -> &[P] {
        &self.places
    }

    pub fn transitions(&self) -> &[Transition<P, E>] {
        &self.transitions
    }

    pub fn initial_place(&self) -> &P {
        // Validation rejects an empty place list.
        &self.places[0]
    }

    pub fn contains(&self, place: &P) -> bool {
        self.places.contains(place)
    }

    /// Look up a transition by name, regardless of the current place.
    pub fn transition(&self, name: &str) -> Option<&Transition<P, E>> {
        self.transitions.iter().find(|t| t.name == name)
    }

    /// Transitions leaving `place`, in declaration order.
    pub fn outgoing<'a>(&'a self, place: &'a P) -> impl Iterator<Item = &'a Transition<P, E>> + 'a {
        self.transitions.iter().filter(move |t| &t.from == place)
    }

    /// Places directly reachable from `place` through one transition.
    ///
    /// Each target appears once, in the order its first transition was
    /// declared. A self-loop makes `place` adjacent to itself.
    pub fn adjacent_places(&self, place: &P) -> Result<Vec<P>, QueryError> {
        self.ensure_known(place)?;

        let mut adjacent: Vec<P> = Vec::new();
        for transition in self.outgoing(place) {
            if !adjacent.contains(&transition.to) {
                adjacent.push(transition.to.clone());
            }
        }
        Ok(adjacent)
    }

    /// Every place reachable from `place`, `place` included, in depth-first
    /// visit order.
    pub fn reachable_from(&self, place: &P) -> Result<Vec<P>, QueryError> {
        self.ensure_known(place)?;
        Ok(reach::reachable_from(place, &self.transitions))
    }

    fn ensure_known(&self, place: &P) -> Result<(), QueryError> {
        if self.contains(place) {
            Ok(())
        } else {
            Err(QueryError::UnknownPlace {
                place: describe(place),
            })
        }
    }
}

impl<P: Place, E> Clone for Net<P, E> {
    fn clone(&self) -> Self {
        Self {
            places: self.places.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<P: Place, E> std::fmt::Debug for Net<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Net")
            .field("places", &self.places)
            .field("transitions", &self.transitions)
            .finish()
    }
}
