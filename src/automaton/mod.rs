//! This is the frontend that loads and validates automata.
//!
//! Use it like so:
//! ```no_run
//! use starling::automaton::FiniteAutomaton;
//!
//! // Load a description from disk, in the text format or the JSON format
//! let automaton = FiniteAutomaton::builder()
//!     .text_description("my-machine.txt").unwrap()
//!     .build().unwrap();
//! ```
//! Automata can also be assembled programmatically from their five raw fields:
//! ```
//! use starling::automaton::FiniteAutomaton;
//!
//! let automaton = FiniteAutomaton::builder()
//!     .symbols(["a"])
//!     .states(["even", "odd"])
//!     .final_states(["even"])
//!     .initial_state("even")
//!     .transition("even", "a", "odd")
//!     .transition("odd", "a", "even")
//!     .build().unwrap();
//!
//! assert!(automaton.is_deterministic());
//! assert_eq!(automaton.initial_state().name(), "even");
//! ```
//! Either way [`AutomatonBuilder::build`] checks the structural invariants before any
//! automaton value exists: the initial state and all final states must be members of
//! the state set and transitions may only mention known states and symbols.

mod builder;
mod determinize;
mod fsm;

pub use builder::*;
pub use fsm::*;
