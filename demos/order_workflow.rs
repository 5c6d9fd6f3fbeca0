//! Order Processing Workflow
//!
//! This example drives an order through a validated workflow graph.
//!
//! Key concepts:
//! - Places declared with `place_enum!`
//! - Transitions with side-effecting actions
//! - Guard checks before applying a transition
//! - A failing action leaves the order where it was
//!
//! Run with: RUST_LOG=placeflow=debug cargo run --example order_workflow

use placeflow::builder::{action_transition, simple_transition};
use placeflow::core::{audit, BoxError, Transition};
use placeflow::machine::{ApplyError, StateMachine};
use placeflow::{place_enum, StateMachineBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

place_enum! {
    enum Order {
        Created,
        Paid,
        Packed,
        Shipped,
        Cancelled,
    }
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Processing Workflow ===\n");

    // The carrier is down for the first shipping attempt.
    let carrier_up = Arc::new(AtomicBool::new(false));
    let carrier = Arc::clone(&carrier_up);

    let mut machine = StateMachineBuilder::<Order>::new()
        .history_limit(100)
        .places(Order::ALL.iter().copied())
        .transitions(vec![
            action_transition("pay", Order::Created, Order::Paid, || {
                println!("  charging card");
                Ok::<(), BoxError>(())
            }),
            simple_transition("cancel", Order::Created, Order::Cancelled),
            simple_transition("pack", Order::Paid, Order::Packed),
            simple_transition("refund", Order::Paid, Order::Cancelled),
            action_transition("ship", Order::Packed, Order::Shipped, move || {
                if carrier.load(Ordering::SeqCst) {
                    println!("  handing parcel to carrier");
                    Ok(())
                } else {
                    Err::<(), BoxError>("carrier unavailable".into())
                }
            }),
        ])
        .build()?;

    println!("Initial place: {}", machine.current_place());
    print_allowed(&machine);

    // Shipping is not allowed yet.
    match machine.apply("ship") {
        Err(err @ ApplyError::IllegalTransition { .. }) => println!("Rejected: {err}"),
        other => println!("Unexpected: {other:?}"),
    }

    machine.apply("pay")?;
    machine.apply("pack")?;
    println!("\nNow at: {}", machine.current_place());

    if let Err(err) = machine.apply("ship") {
        println!("Shipping failed ({err}), still at {}", machine.current_place());
    }

    carrier_up.store(true, Ordering::SeqCst);
    machine.apply("ship")?;
    println!("Now at: {}", machine.current_place());
    println!("Terminal: {}", machine.is_terminal());

    println!("\nPath taken:");
    for record in machine.history().records() {
        println!("  {} : {} -> {}", record.transition, record.from, record.to);
    }

    // Auditing a broken definition lists every problem at once.
    let broken: Vec<Transition<Order>> = vec![
        simple_transition("pay", Order::Created, Order::Paid),
        simple_transition("pay", Order::Paid, Order::Packed),
    ];
    if let stillwater::validation::Validation::Failure(errors) = audit(Order::ALL, &broken) {
        println!("\nBroken definition:");
        for error in errors.iter() {
            println!("  - {error}");
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

fn print_allowed(machine: &StateMachine<Order>) {
    let allowed: Vec<&str> = machine
        .allowed_transitions()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    println!("Allowed: {}", allowed.join(", "));
}
