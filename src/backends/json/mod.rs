//! Write an automaton in the JSON description format.
//!
//! Use it like so:
//! ```no_run
//! use starling::automaton::FiniteAutomaton;
//! use starling::backends::json::JsonGenerator;
//!
//! // First, load a machine in any supported format
//! let automaton = FiniteAutomaton::builder()
//!     .text_description("my-machine.txt").unwrap()
//!     .build().unwrap();
//!
//! // Then, write it back out as JSON
//! JsonGenerator::new().generate("my-machine.json", &automaton);
//! ```

mod generator;

pub use generator::JsonGenerator;
