use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;

use crate::automaton::{FiniteAutomaton, State, Symbol};

/// This is the main struct of the [`text`](crate::backends::text) backend that writes
/// automaton description files.
pub struct TextGenerator {}

impl TextGenerator {
    /// Create a new TextGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Write the description of the supplied `automaton` into the output file `path`.
    ///
    /// The result is a loadable description: alphabet line, states line, final-states
    /// line, initial-state line and one transition triple per line, everything in the
    /// iteration order of the automaton.
    pub fn generate<P: AsRef<Path>>(self, path: P, automaton: &FiniteAutomaton) {
        let mut description = String::new();

        description.push_str(&automaton.alphabet().iter().map(Symbol::text).join(" "));
        description.push('\n');

        description.push_str(&automaton.states().iter().map(State::name).join(" "));
        description.push('\n');

        let final_states = automaton
            .states()
            .iter()
            .filter(|state| automaton.is_final(state))
            .map(State::name)
            .join(" ");
        description.push_str(&final_states);
        description.push('\n');

        description.push_str(automaton.initial_state().name());
        description.push('\n');

        for (origin, row) in automaton.transitions() {
            for (symbol, destinations) in row {
                for destination in destinations {
                    description.push_str(&format!(
                        "{} {} {}\n",
                        origin.name(),
                        symbol.text(),
                        destination.name()
                    ));
                }
            }
        }

        let mut file = File::create(path).expect("Could not open output file");
        file.write_all(description.as_bytes())
            .expect("Could not write to output file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::simulator::{Outcome, Simulator};

    #[test]
    fn test_round_trip() {
        let dfa = FiniteAutomaton::builder()
            .text_description("test-data/automata/branching.txt")
            .unwrap()
            .build()
            .unwrap()
            .to_deterministic();

        TextGenerator::new().generate("/tmp/starling-branching-dfa.txt", &dfa);

        let reloaded = FiniteAutomaton::builder()
            .text_description("/tmp/starling-branching-dfa.txt")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(reloaded.states().len(), dfa.states().len());

        let simulator = Simulator::new(&reloaded);
        assert_eq!(simulator.classify_text("ab"), Outcome::Accepted);
        assert_eq!(simulator.classify_text("a"), Outcome::Rejected);
    }
}
