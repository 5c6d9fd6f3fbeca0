//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{BoxError, Net, Place, Transition, ValidationError};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Places keep the order they were added in; the first place added is the
/// initial place. Nothing is validated until [`build`](Self::build) or
/// [`build_net`](Self::build_net).
pub struct StateMachineBuilder<P: Place, E = BoxError> {
    places: Vec<P>,
    transitions: Vec<Transition<P, E>>,
    history_limit: Option<usize>,
}

impl<P: Place, E> StateMachineBuilder<P, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            places: Vec::new(),
            transitions: Vec::new(),
            history_limit: None,
        }
    }

    /// Add a place. The first place added is the initial place.
    pub fn place(mut self, place: P) -> Self {
        self.places.push(place);
        self
    }

    /// Add several places in order.
    pub fn places(mut self, places: impl IntoIterator<Item = P>) -> Self {
        self.places.extend(places);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder is missing a required field.
    pub fn transition(mut self, builder: TransitionBuilder<P, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<P, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<P, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Cap the built machine's history at `limit` records (optional).
    /// A limit of `0` turns history off.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Validate and freeze the graph without starting a machine.
    pub fn build_net(self) -> Result<Net<P, E>, ValidationError> {
        Net::new(self.places, self.transitions)
    }

    /// Validate the graph and start a machine in the first place.
    pub fn build(self) -> Result<StateMachine<P, E>, ValidationError> {
        let history_limit = self.history_limit;
        let machine = StateMachine::from_net(self.build_net()?);
        Ok(match history_limit {
            Some(limit) => machine.with_history_limit(limit),
            None => machine,
        })
    }
}

impl<P: Place, E> Default for StateMachineBuilder<P, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::simple_transition;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[test]
    fn builder_requires_places() {
        let result = StateMachineBuilder::<Light>::new().build();
        assert!(matches!(result, Err(ValidationError::NoPlaces)));
    }

    #[test]
    fn builder_validates_graph() {
        let result = StateMachineBuilder::<Light>::new()
            .places([Light::Red, Light::Green, Light::Yellow])
            .add_transition(simple_transition("go", Light::Red, Light::Green))
            .build();

        assert_eq!(
            result.err(),
            Some(ValidationError::UnreachablePlace {
                place: "Yellow".to_string()
            })
        );
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::<Light>::new()
            .place(Light::Red)
            .place(Light::Green)
            .place(Light::Yellow)
            .transition(
                TransitionBuilder::new()
                    .name("go")
                    .from(Light::Red)
                    .to(Light::Green),
            )
            .unwrap()
            .transitions(vec![
                simple_transition("slow", Light::Green, Light::Yellow),
                simple_transition("stop", Light::Yellow, Light::Red),
            ])
            .build()
            .unwrap();

        assert_eq!(machine.current_place(), &Light::Red);
        assert_eq!(machine.net().transitions().len(), 3);
    }

    #[test]
    fn incomplete_transition_builder_is_reported() {
        let result = StateMachineBuilder::<Light>::new()
            .place(Light::Red)
            .transition(TransitionBuilder::new().name("go").from(Light::Red));

        assert!(matches!(result, Err(BuildError::MissingToPlace)));
    }

    #[test]
    fn history_limit_is_applied_to_machine() {
        let mut machine = StateMachineBuilder::<Light>::new()
            .history_limit(3)
            .places([Light::Red, Light::Green, Light::Yellow])
            .transitions(vec![
                simple_transition("go", Light::Red, Light::Green),
                simple_transition("slow", Light::Green, Light::Yellow),
                simple_transition("stop", Light::Yellow, Light::Red),
            ])
            .build()
            .unwrap();

        for step in ["go", "slow", "stop"].iter().cycle().take(30) {
            machine.apply(step).unwrap();
        }

        assert_eq!(machine.history().limit(), Some(3));
        assert_eq!(machine.history().len(), 3);
        assert_eq!(machine.current_place(), &Light::Red);
    }

    #[test]
    fn build_net_keeps_declaration_order() {
        let net = StateMachineBuilder::<Light>::new()
            .places([Light::Yellow, Light::Red])
            .add_transition(simple_transition("stop", Light::Yellow, Light::Red))
            .build_net()
            .unwrap();

        assert_eq!(net.initial_place(), &Light::Yellow);
        assert_eq!(net.places(), &[Light::Yellow, Light::Red]);
    }
}
