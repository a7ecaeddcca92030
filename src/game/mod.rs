//! Game session
//!
//! Wires a round, a validator and a dictionary together for a front-end.

mod engine;

pub use engine::{Game, start_round};
