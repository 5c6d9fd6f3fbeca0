//! Fail-fast structural validation.

use super::error::{Endpoint, ValidationError};
use super::place::{describe, Place};
use super::reach::reachable_from;
use super::transition::Transition;
use std::collections::HashSet;

/// Check that a graph definition can be safely driven.
///
/// Checks run in a fixed order and the first failure is returned:
/// place uniqueness, then each transition in declaration order (name present,
/// `from` exists, `to` exists, name not seen before), then reachability of
/// every place from the first one.
pub(crate) fn validate<P: Place, E>(
    places: &[P],
    transitions: &[Transition<P, E>],
) -> Result<(), ValidationError> {
    let Some(initial) = places.first() else {
        return Err(ValidationError::NoPlaces);
    };

    let mut known: HashSet<&P> = HashSet::with_capacity(places.len());
    for place in places {
        if !known.insert(place) {
            return Err(ValidationError::DuplicatePlace {
                place: describe(place),
            });
        }
    }

    let mut names: HashSet<&str> = HashSet::with_capacity(transitions.len());
    for transition in transitions {
        if transition.name.is_empty() {
            return Err(ValidationError::UnnamedTransition {
                from: describe(&transition.from),
                to: describe(&transition.to),
            });
        }
        if !known.contains(&transition.from) {
            return Err(dangling(transition, Endpoint::From));
        }
        if !known.contains(&transition.to) {
            return Err(dangling(transition, Endpoint::To));
        }
        if !names.insert(transition.name.as_str()) {
            return Err(ValidationError::DuplicateTransition {
                name: transition.name.clone(),
            });
        }
    }

    let visited = reachable_from(initial, transitions);
    if visited.len() != places.len() {
        let visited: HashSet<&P> = visited.iter().collect();
        if let Some(place) = places.iter().find(|p| !visited.contains(p)) {
            return Err(ValidationError::UnreachablePlace {
                place: describe(place),
            });
        }
    }

    Ok(())
}

pub(crate) fn dangling<P: Place, E>(
    transition: &Transition<P, E>,
    endpoint: Endpoint,
) -> ValidationError {
    let place = match endpoint {
        Endpoint::From => &transition.from,
        Endpoint::To => &transition.to,
    };
    ValidationError::DanglingTransition {
        transition: transition.name.clone(),
        endpoint,
        place: describe(place),
    }
}
