//! This library contains everything you need to work with finite automata over a fixed alphabet.
//!
//! It consists of
//! - __frontend__: Load automaton descriptions of different formats. Currently, a line-oriented
//!   text format and a JSON format are supported.
//! - __backend__: Use the loaded automaton to do whatever you want.
//!   Current backends are
//!   - `simulator`: Run input words through the automaton and classify them
//!   - `text`: Write an automaton back out in the text description format
//!   - `json`: Write an automaton in the JSON description format
//!
//! ## Getting Started
//! The first step always is to load an automaton. To do this use the
//! [`FiniteAutomaton::builder()`](automaton::FiniteAutomaton::builder) method
//! that will give you access to an [`AutomatonBuilder`](automaton::AutomatonBuilder) like this:
//! ```no_run
//! use starling::automaton::FiniteAutomaton;
//! use starling::backends::simulator::{Outcome, Simulator};
//!
//! // Load a description and run the structural checks
//! let automaton = FiniteAutomaton::builder()
//!     .text_description("my-machine.txt").unwrap()
//!     .build().unwrap();
//!
//! // Classify words
//! let simulator = Simulator::new(&automaton);
//! assert_eq!(simulator.classify_text("ab"), Outcome::Accepted);
//!
//! // Or derive an equivalent deterministic machine
//! let dfa = automaton.to_deterministic();
//! assert!(dfa.is_deterministic());
//! ```
//! A word that uses a symbol outside of the alphabet is classified as
//! [`Outcome::Invalid`](backends::simulator::Outcome), a word the automaton gets stuck on as
//! [`Outcome::Rejected`](backends::simulator::Outcome). Neither is an error: only loading a
//! description that violates the structural invariants fails.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod automaton;
pub mod backends;
