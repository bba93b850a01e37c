//! Run input words through an automaton and classify them.
//!
//! Use it like so:
//! ```
//! use starling::automaton::FiniteAutomaton;
//! use starling::backends::simulator::{Outcome, Simulator};
//!
//! // First, load or assemble an automaton
//! let automaton = FiniteAutomaton::builder()
//!     .symbols(["a"])
//!     .states(["s"])
//!     .final_states(["s"])
//!     .initial_state("s")
//!     .transition("s", "a", "s")
//!     .build().unwrap();
//!
//! // Then, classify as many words as you like
//! let simulator = Simulator::new(&automaton);
//! assert_eq!(simulator.classify_text("aaa"), Outcome::Accepted);
//! assert_eq!(simulator.classify_text("x"), Outcome::Invalid);
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::automaton::FiniteAutomaton;

/// The verdict for a single input word.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word was consumed completely and the automaton stopped in a final state
    Accepted,

    /// The automaton stopped in a non-final state or had no transition for a symbol
    Rejected,

    /// The word contains a symbol that is not part of the alphabet
    Invalid,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Outcome::Accepted => write!(f, "ACCEPTED"),
            Outcome::Rejected => write!(f, "REJECTED"),
            Outcome::Invalid => write!(f, "INVALID"),
        }
    }
}

/// The Simulator runs input words through a borrowed automaton.
///
/// Classification never modifies the automaton, so one automaton can back any number
/// of simulators and every word is classified independently of all others.
pub struct Simulator<'a> {
    automaton: &'a FiniteAutomaton,
}

impl<'a> Simulator<'a> {
    /// Create a new Simulator for the given automaton.
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }

    /// Classify a single word, given as a sequence of symbol tokens.
    ///
    /// The automaton is treated as deterministic: when a transition lists more than
    /// one destination, only the first one is followed and the remaining branches are
    /// not explored. The first symbol outside of the alphabet makes the word
    /// [`Outcome::Invalid`] and the rest of the word is not looked at; likewise a
    /// missing transition settles for [`Outcome::Rejected`] immediately.
    pub fn classify<W>(&self, word: W) -> Outcome
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let mut current = self.automaton.initial_state();

        for token in word {
            let token = token.as_ref();

            if !self.automaton.alphabet().contains(token) {
                return Outcome::Invalid;
            }

            let next = self
                .automaton
                .destinations(current.name(), token)
                .and_then(|destinations| destinations.first());

            match next {
                Some(next) => current = next,
                None => return Outcome::Rejected,
            }
        }

        if self.automaton.is_final(current) {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }

    /// Classify a word given as plain text, treating every character as one symbol
    /// token.
    pub fn classify_text(&self, word: &str) -> Outcome {
        self.classify(word.chars().map(String::from))
    }

    /// Classify every word of a batch independently, in order.
    pub fn classify_all<I>(&self, words: I) -> Vec<Outcome>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.classify_text(word.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_cycle() -> FiniteAutomaton {
        FiniteAutomaton::builder()
            .text_description("test-data/automata/shift-cycle.txt")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_worked_example() {
        let automaton = shift_cycle();
        let simulator = Simulator::new(&automaton);

        // q0 -a-> q1 -b-> q3, which is final
        assert_eq!(simulator.classify_text("ab"), Outcome::Accepted);
        // q0 -b-> q2 -a-> q3
        assert_eq!(simulator.classify_text("ba"), Outcome::Accepted);
        assert_eq!(simulator.classify_text("c"), Outcome::Invalid);
        // the empty word stays in q0, which is final
        assert_eq!(simulator.classify_text(""), Outcome::Accepted);
    }

    #[test]
    fn test_unknown_symbol_short_circuits() {
        let automaton = shift_cycle();
        let simulator = Simulator::new(&automaton);

        assert_eq!(simulator.classify_text("abcab"), Outcome::Invalid);
        assert_eq!(simulator.classify_text("cab"), Outcome::Invalid);
    }

    #[test]
    fn test_missing_transition_rejects() {
        let automaton = FiniteAutomaton::builder()
            .symbols(["a", "b"])
            .states(["s0", "s1"])
            .final_states(["s1"])
            .initial_state("s0")
            .transition("s0", "a", "s1")
            .build()
            .unwrap();
        let simulator = Simulator::new(&automaton);

        assert_eq!(simulator.classify_text("a"), Outcome::Accepted);
        assert_eq!(simulator.classify_text("b"), Outcome::Rejected);
        assert_eq!(simulator.classify_text("aa"), Outcome::Rejected);
    }

    #[test]
    fn test_first_destination_wins() {
        // Both transitions consume 'a', but only the first listed one is followed
        let automaton = FiniteAutomaton::builder()
            .symbols(["a"])
            .states(["s0", "dead", "fin"])
            .final_states(["fin"])
            .initial_state("s0")
            .transition("s0", "a", "dead")
            .transition("s0", "a", "fin")
            .build()
            .unwrap();
        let simulator = Simulator::new(&automaton);

        assert_eq!(simulator.classify_text("a"), Outcome::Rejected);
    }

    #[test]
    fn test_classification_is_stable() {
        let automaton = shift_cycle();
        let simulator = Simulator::new(&automaton);

        for _ in 0..3 {
            assert_eq!(simulator.classify(["a", "b"]), Outcome::Accepted);
        }
    }

    #[test]
    fn test_batch() {
        let automaton = shift_cycle();
        let simulator = Simulator::new(&automaton);

        let outcomes = simulator.classify_all(["ab", "ba", "c", "", "aab"]);
        assert_eq!(
            outcomes,
            [
                Outcome::Accepted,
                Outcome::Accepted,
                Outcome::Invalid,
                Outcome::Accepted,
                Outcome::Rejected,
            ]
        );
    }
}
