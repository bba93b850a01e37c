//! Write an automaton in the line-oriented text description format.
//!
//! Use it like so:
//! ```no_run
//! use starling::automaton::FiniteAutomaton;
//! use starling::backends::text::TextGenerator;
//!
//! // First, load and determinize a machine
//! let automaton = FiniteAutomaton::builder()
//!     .text_description("my-machine.txt").unwrap()
//!     .build().unwrap();
//! let dfa = automaton.to_deterministic();
//!
//! // Then, write the result into a new description file
//! TextGenerator::new().generate("my-machine.dfa.txt", &dfa);
//! ```

mod generator;

pub use generator::TextGenerator;
