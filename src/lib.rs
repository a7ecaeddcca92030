//! Word Scramble
//!
//! Build as many real words as you can from the letters of a random root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, RoundState, ValidationOutcome};
//! use word_scramble::validator::{Dictionary, validate};
//!
//! let dictionary = Dictionary::embedded();
//! let round = RoundState::new("silkworm").unwrap();
//!
//! // Legal words are accepted in normalized form
//! let outcome = validate("Worm", &round, &dictionary);
//! assert_eq!(outcome, ValidationOutcome::Accepted("worm".to_string()));
//!
//! // Recording returns the next state
//! let round = round.record("worm");
//! assert_eq!(validate("worm", &round, &dictionary), ValidationOutcome::Rejected(Rejection::AlreadyUsed));
//! assert_eq!(round.letter_total(), 4);
//! ```

// Core domain types
pub mod core;

// Legality pipeline and dictionary capability
pub mod validator;

// Word lists
pub mod wordlists;

// Game session
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
