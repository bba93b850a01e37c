use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use indexmap::{IndexMap, IndexSet};

use crate::automaton::AutomatonBuilder;

/// The name of a single state of an automaton.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct State(String);

impl State {
    /// Create a new state with the given name.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this state.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A single symbol token of the alphabet.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol from the given token.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The token text of this symbol.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// The transition table of an automaton: origin state to symbol to the ordered
/// sequence of destination states.
///
/// A missing entry means the automaton has no transition for that origin and symbol.
/// More than one destination in a sequence makes the automaton non-deterministic.
pub type TransitionMap = IndexMap<State, IndexMap<Symbol, Vec<State>>>;

/// A finite automaton over a fixed alphabet.
///
/// Values of this type always satisfy the structural invariants enforced by
/// [`AutomatonBuilder::build`] and are immutable afterwards. Deriving a new machine,
/// for example with [`to_deterministic`](FiniteAutomaton::to_deterministic), never
/// touches the original value.
#[derive(Debug, Clone)]
pub struct FiniteAutomaton {
    alphabet: IndexSet<Symbol>,
    states: Vec<State>,
    final_states: HashSet<State>,
    initial_state: State,
    transitions: TransitionMap,
}

impl FiniteAutomaton {
    pub(crate) fn new(
        alphabet: IndexSet<Symbol>,
        states: Vec<State>,
        final_states: HashSet<State>,
        initial_state: State,
        transitions: TransitionMap,
    ) -> Self {
        Self {
            alphabet,
            states,
            final_states,
            initial_state,
            transitions,
        }
    }

    /// Create an [`AutomatonBuilder`] that gathers the raw fields of an automaton and
    /// runs the structural checks.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// The alphabet in its fixed iteration order.
    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    /// The states in the order they were listed in the source description.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The state the automaton starts in.
    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// Check whether `state` is an accepting state.
    pub fn is_final(&self, state: &State) -> bool {
        self.final_states.contains(state)
    }

    /// The ordered destination sequence of the transition for `origin` and `symbol`,
    /// or `None` if the automaton defines no such transition.
    pub fn destinations(&self, origin: &str, symbol: &str) -> Option<&[State]> {
        let destinations = self.transitions.get(origin)?.get(symbol)?;
        Some(destinations.as_slice())
    }

    /// The full transition table.
    pub fn transitions(&self) -> &TransitionMap {
        &self.transitions
    }

    /// Check whether every defined transition has exactly one destination.
    pub fn is_deterministic(&self) -> bool {
        self.transitions
            .values()
            .flat_map(IndexMap::values)
            .all(|destinations| destinations.len() == 1)
    }
}

impl Display for FiniteAutomaton {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Alphabet: {}", join_symbols(&self.alphabet))?;
        writeln!(f, "Initial state: {}", self.initial_state)?;
        writeln!(f, "Transitions:")?;

        for (origin, row) in &self.transitions {
            for (symbol, destinations) in row {
                write!(f, "  {} --{}->", origin, symbol)?;

                for destination in destinations {
                    write!(f, " {}", destination)?;

                    if self.is_final(destination) {
                        write!(f, "*")?;
                    }
                }

                writeln!(f)?;
            }
        }

        Ok(())
    }
}

fn join_symbols(alphabet: &IndexSet<Symbol>) -> String {
    let mut joined = String::new();

    for symbol in alphabet {
        if !joined.is_empty() {
            joined.push(' ');
        }

        joined.push_str(symbol.text());
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branching() -> FiniteAutomaton {
        FiniteAutomaton::builder()
            .symbols(["a", "b"])
            .states(["s0", "s1", "s2"])
            .final_states(["s2"])
            .initial_state("s0")
            .transition("s0", "a", "s1")
            .transition("s0", "a", "s2")
            .transition("s1", "b", "s2")
            .build()
            .unwrap()
    }

    #[test]
    fn test_destination_order() {
        let automaton = branching();
        let destinations = automaton.destinations("s0", "a").unwrap();
        let names: Vec<&str> = destinations.iter().map(State::name).collect();
        assert_eq!(names, ["s1", "s2"]);
    }

    #[test]
    fn test_missing_transition() {
        let automaton = branching();
        assert!(automaton.destinations("s0", "b").is_none());
        assert!(automaton.destinations("s2", "a").is_none());
    }

    #[test]
    fn test_determinism_check() {
        let automaton = branching();
        assert!(!automaton.is_deterministic());

        let automaton = FiniteAutomaton::builder()
            .symbols(["a"])
            .states(["s0", "s1"])
            .final_states(["s1"])
            .initial_state("s0")
            .transition("s0", "a", "s1")
            .build()
            .unwrap();
        assert!(automaton.is_deterministic());
    }

    #[test]
    fn test_display() {
        let listing = format!("{}", branching());
        assert!(listing.contains("Alphabet: a b"));
        assert!(listing.contains("s0 --a-> s1 s2*"));
    }
}
