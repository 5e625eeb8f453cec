//! Basic example of driving the Knapsack Quest engine

use knapsack_core::{optimal_item_set, optimal_value, Action, Direction, Session};

fn main() {
    let mut session = Session::default();

    println!("Level {} (capacity {})", session.level(), session.capacity());
    for (i, item) in session.items().iter().enumerate() {
        println!("  [{}] {}", i, item);
    }

    // Ask the solver directly
    let best = optimal_value(session.capacity(), session.items());
    let combo = optimal_item_set(session.capacity(), session.items());
    println!("\nOptimal value: {} with items {:?}", best, combo);

    // Play the optimal combo through the session
    for index in combo {
        session.apply(Action::Toggle(index)).expect("valid index");
    }
    let outcome = session.apply(Action::Submit).expect("submit never errors");
    println!("Submit: {}", outcome.message());
    println!("Score: {}", session.score());

    // Move on
    match session.apply(Action::ChangeLevel(Direction::Next)) {
        Ok(outcome) => println!("{}", outcome.message()),
        Err(e) => println!("Could not advance: {}", e),
    }
}
