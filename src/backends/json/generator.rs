use serde::ser::Serialize;
use serde_json::{
    json,
    ser::PrettyFormatter,
    Serializer,
    Value,
};
use std::{
    fs::File,
    io::Write,
    path::Path,
};

use crate::automaton::FiniteAutomaton;

/// This is the main struct of the [`json`](crate::backends::json) backend that writes
/// automaton descriptions in JSON format.
pub struct JsonGenerator {}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Write the description of the supplied `automaton` into the output file `path`
    /// in JSON format.
    pub fn generate<P: AsRef<Path>>(self, path: P, automaton: &FiniteAutomaton) {
        let alphabet: Vec<Value> = automaton
            .alphabet()
            .iter()
            .map(|symbol| Value::String(symbol.text().to_string()))
            .collect();

        let states: Vec<Value> = automaton
            .states()
            .iter()
            .map(|state| Value::String(state.name().to_string()))
            .collect();

        let final_states: Vec<Value> = automaton
            .states()
            .iter()
            .filter(|state| automaton.is_final(state))
            .map(|state| Value::String(state.name().to_string()))
            .collect();

        let mut transitions = Vec::new();

        for (origin, row) in automaton.transitions() {
            for (symbol, destinations) in row {
                for destination in destinations {
                    transitions.push(json!([origin.name(), symbol.text(), destination.name()]));
                }
            }
        }

        let json = json!({
            "alphabet": alphabet,
            "states": states,
            "final": final_states,
            "initial": automaton.initial_state().name(),
            "transitions": transitions,
        });

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        json.serialize(&mut ser).unwrap();

        let mut file = File::create(path).expect("Could not open output file");
        file.write_all(&buf).expect("Could not write to output file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::simulator::{Outcome, Simulator};

    #[test]
    fn test_round_trip() {
        let automaton = FiniteAutomaton::builder()
            .text_description("test-data/automata/shift-cycle.txt")
            .unwrap()
            .build()
            .unwrap();

        JsonGenerator::new().generate("/tmp/starling-shift-cycle.json", &automaton);

        let reloaded = FiniteAutomaton::builder()
            .json_description("/tmp/starling-shift-cycle.json")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(reloaded.states().len(), 4);

        let simulator = Simulator::new(&reloaded);
        assert_eq!(simulator.classify_text("ab"), Outcome::Accepted);
        assert_eq!(simulator.classify_text("ba"), Outcome::Accepted);
        assert_eq!(simulator.classify_text(""), Outcome::Accepted);
        assert_eq!(simulator.classify_text("a"), Outcome::Rejected);
    }
}
