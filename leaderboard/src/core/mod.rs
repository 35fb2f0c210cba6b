//! Core business logic modules
//!
//! Pure instance definitions, validity checkers, the ledger and the gate.
//! Nothing in here performs I/O or locking.

pub mod gate;
pub mod knapsack;
pub mod ledger;
pub mod problem;
pub mod sat;

#[cfg(test)]
mod proptest_tests;

pub use gate::SubmissionGate;
pub use knapsack::{KnapsackInstance, KnapsackItem, KnapsackTotals};
pub use ledger::Ledger;
pub use problem::{Problem, Ranked, SolutionRecord};
pub use sat::{assignment_from_bits, Clause, Literal, SatInstance};
