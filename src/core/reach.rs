//! Reachability over transition edges.

use super::place::Place;
use super::transition::Transition;
use std::collections::{HashMap, HashSet};

/// Collect every place reachable from `start` by following zero or more
/// transitions, in depth-first visit order.
///
/// Uses an explicit work list, so deep chains do not grow the call stack.
/// Each place is visited at most once, which makes cycles and self-loops
/// terminate. Places in a subgraph not connected to `start` are simply absent
/// from the result. `start` itself is always the first element, whether or
/// not it appears in any transition.
///
/// ```rust
/// use placeflow::core::{reachable_from, Transition};
///
/// let transitions: Vec<Transition<u8>> = vec![
///     Transition::new("a", 0, 1),
///     Transition::new("b", 1, 0),
///     Transition::new("c", 5, 6),
/// ];
///
/// assert_eq!(reachable_from(&0, &transitions), vec![0, 1]);
/// ```
pub fn reachable_from<P: Place, E>(start: &P, transitions: &[Transition<P, E>]) -> Vec<P> {
    let mut edges: HashMap<&P, Vec<&P>> = HashMap::new();
    for transition in transitions {
        edges.entry(&transition.from).or_default().push(&transition.to);
    }

    let mut visited: HashSet<&P> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(place) = stack.pop() {
        if !visited.insert(place) {
            continue;
        }
        order.push(place.clone());

        if let Some(targets) = edges.get(place) {
            // Reverse so the first declared edge is explored first.
            for target in targets.iter().rev() {
                if !visited.contains(*target) {
                    stack.push(*target);
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(u32, u32)]) -> Vec<Transition<u32>> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (from, to))| Transition::new(format!("t{i}"), *from, *to))
            .collect()
    }

    #[test]
    fn start_is_always_reached() {
        assert_eq!(reachable_from(&3, &edges(&[])), vec![3]);
    }

    #[test]
    fn follows_edges_depth_first() {
        let transitions = edges(&[(0, 1), (1, 2), (0, 3), (3, 4)]);
        assert_eq!(reachable_from(&0, &transitions), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cycles_and_self_loops_terminate() {
        let transitions = edges(&[(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)]);
        assert_eq!(reachable_from(&0, &transitions), vec![0, 1, 2]);
    }

    #[test]
    fn edges_are_directed() {
        let transitions = edges(&[(1, 0)]);
        assert_eq!(reachable_from(&0, &transitions), vec![0]);
    }

    #[test]
    fn disconnected_subgraph_is_skipped() {
        let transitions = edges(&[(0, 1), (5, 6), (6, 5)]);
        let reached = reachable_from(&0, &transitions);
        assert_eq!(reached, vec![0, 1]);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let pairs: Vec<(u32, u32)> = (0..100_000).map(|i| (i, i + 1)).collect();
        let reached = reachable_from(&0, &edges(&pairs));
        assert_eq!(reached.len(), 100_001);
        assert_eq!(reached.last(), Some(&100_000));
    }
}
