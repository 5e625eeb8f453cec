//! Core engine for Knapsack Quest: the level catalog, the 0/1 knapsack
//! solver, and the session state machine driven by player actions.
//!
//! This crate is pure logic. It performs no I/O; the terminal front end
//! and the save-file store live in `knapsack-tui`.

mod catalog;
mod session;
mod solver;

pub use catalog::{Catalog, CatalogError, Item, BASE_CAPACITY, CAPACITY_STEP, MIN_LEVEL};
pub use session::{Action, ActionError, Direction, Outcome, Progress, Session, SCORE_BONUS};
pub use solver::{optimal_item_set, optimal_value};
