//! Place identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a place (a state) in a workflow graph.
///
/// Places are opaque: the engine only compares them for equality and hashes
/// them into visited sets. Uniqueness within a graph is checked when the graph
/// is validated, not by the type itself.
///
/// Every `Clone + Eq + Hash + Debug` type is a place, so integers, strings and
/// plain enums can be used directly:
///
/// ```rust
/// use placeflow::core::Place;
///
/// fn takes_place<P: Place>(_p: P) {}
///
/// takes_place(3u32);
/// takes_place("draft");
/// takes_place(String::from("review"));
/// ```
pub trait Place: Clone + Eq + Hash + Debug {}

impl<T> Place for T where T: Clone + Eq + Hash + Debug {}

/// Render a place for error messages and log fields.
pub(crate) fn describe<P: Place>(place: &P) -> String {
    format!("{place:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Stage {
        Draft,
        Review,
    }

    fn assert_place<P: Place>(_p: &P) {}

    #[test]
    fn enums_and_primitives_are_places() {
        assert_place(&Stage::Draft);
        assert_place(&7u8);
        assert_place(&"start");
    }

    #[test]
    fn describe_uses_debug_output() {
        assert_eq!(describe(&Stage::Review), "Review");
        assert_eq!(describe(&"start"), "\"start\"");
        assert_eq!(describe(&42u32), "42");
    }
}
