//! Exhaustive structural audit using `Validation`.
//!
//! Construction stops at the first problem it finds. When a definition is
//! being written or generated, it is more useful to see every problem at
//! once, so `audit` runs the same checks and accumulates all violations.

use super::error::{Endpoint, ValidationError};
use super::place::{describe, Place};
use super::reach::reachable_from;
use super::transition::Transition;
use super::validate::dangling;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Run every structural check and collect ALL violations.
///
/// Returns `Validation::Success(())` exactly when construction of the same
/// definition would succeed. Otherwise the failure holds every violation:
/// each repeated place once, each bad transition endpoint, each repeated
/// transition name and each unreachable place, in check order.
///
/// Reachability is still computed when transitions are malformed; dangling
/// edges simply lead nowhere.
///
/// ```rust
/// use placeflow::core::{audit, Transition, ValidationError};
/// use stillwater::validation::Validation;
///
/// let transitions: Vec<Transition<&str>> = vec![
///     Transition::new("", "a", "b"),
///     Transition::new("go", "a", "zzz"),
/// ];
///
/// match audit(&["a", "b", "c"], &transitions) {
///     Validation::Failure(errors) => {
///         // unnamed, dangling "zzz", unreachable "c"
///         assert_eq!(errors.len(), 3);
///     }
///     Validation::Success(_) => unreachable!(),
/// }
/// ```
pub fn audit<P: Place, E>(
    places: &[P],
    transitions: &[Transition<P, E>],
) -> Validation<(), NonEmptyVec<ValidationError>> {
    let Some(initial) = places.first() else {
        return Validation::fail(ValidationError::NoPlaces);
    };

    let mut checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = Vec::new();

    // Place uniqueness, each repeated place reported once.
    let mut known: HashSet<&P> = HashSet::with_capacity(places.len());
    let mut repeated: HashSet<&P> = HashSet::new();
    for place in places {
        if !known.insert(place) && repeated.insert(place) {
            checks.push(Validation::fail(ValidationError::DuplicatePlace {
                place: describe(place),
            }));
        }
    }

    // Transition well-formedness and name uniqueness.
    let mut names: HashSet<&str> = HashSet::with_capacity(transitions.len());
    let mut repeated_names: HashSet<&str> = HashSet::new();
    for transition in transitions {
        if transition.name.is_empty() {
            checks.push(Validation::fail(ValidationError::UnnamedTransition {
                from: describe(&transition.from),
                to: describe(&transition.to),
            }));
        }
        if !known.contains(&transition.from) {
            checks.push(Validation::fail(dangling(transition, Endpoint::From)));
        }
        if !known.contains(&transition.to) {
            checks.push(Validation::fail(dangling(transition, Endpoint::To)));
        }
        let name = transition.name.as_str();
        if !name.is_empty() && !names.insert(name) && repeated_names.insert(name) {
            checks.push(Validation::fail(ValidationError::DuplicateTransition {
                name: transition.name.clone(),
            }));
        }
    }

    // Every distinct place must be reachable from the initial one.
    let visited = reachable_from(initial, transitions);
    let visited: HashSet<&P> = visited.iter().collect();
    let mut reported: HashSet<&P> = HashSet::new();
    for place in places {
        if !visited.contains(place) && reported.insert(place) {
            checks.push(Validation::fail(ValidationError::UnreachablePlace {
                place: describe(place),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
