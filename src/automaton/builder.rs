use std::collections::HashSet;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use crate::{
    automaton::{FiniteAutomaton, State, Symbol, TransitionMap},
    error::{ParsingError, StructuralError},
    parser::{json, text, RawDescription},
};

/// The AutomatonBuilder gathers the five raw fields of an automaton and returns a
/// validated [`FiniteAutomaton`].
///
/// Use it like so:
/// ```no_run
/// use starling::automaton::FiniteAutomaton;
///
/// let automaton = FiniteAutomaton::builder()
///     // Load a description in the line-oriented text format
///     .text_description("my-machine.txt").unwrap()
///     // Or in the JSON format
///     .json_description("my-machine.json").unwrap()
///     .build().unwrap();
/// ```
/// The raw fields can also be supplied directly with [`symbols`](AutomatonBuilder::symbols),
/// [`states`](AutomatonBuilder::states), [`final_states`](AutomatonBuilder::final_states),
/// [`initial_state`](AutomatonBuilder::initial_state) and
/// [`transition`](AutomatonBuilder::transition).
pub struct AutomatonBuilder {
    alphabet: Vec<String>,
    states: Vec<String>,
    final_states: Vec<String>,
    initial_state: Option<String>,
    transitions: Vec<(String, String, String)>,
}

impl AutomatonBuilder {
    pub(crate) fn new() -> Self {
        Self {
            alphabet: Vec::new(),
            states: Vec::new(),
            final_states: Vec::new(),
            initial_state: None,
            transitions: Vec::new(),
        }
    }

    fn absorb(&mut self, description: RawDescription) {
        let RawDescription {
            alphabet,
            states,
            final_states,
            initial_state,
            transitions,
        } = description;

        self.alphabet.extend(alphabet);
        self.states.extend(states);
        self.final_states.extend(final_states);
        self.initial_state = Some(initial_state);
        self.transitions.extend(transitions);
    }
}

impl AutomatonBuilder {
    /// Load a description from disk that is in the line-oriented text format: one line
    /// of alphabet symbols, one line of state names, one line of final states, one line
    /// with the initial state and one `origin symbol destination` triple per remaining
    /// line, all tokens separated by whitespace.
    pub fn text_description<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let description = text::parse_file(path.as_ref())?;
        self.absorb(description);
        Ok(self)
    }

    /// Load a description from disk that is in JSON format: an object with the keys
    /// `alphabet`, `states`, `final`, `initial` and `transitions`. C-style comments
    /// are allowed.
    pub fn json_description<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let description = json::parse_file(path.as_ref())?;
        self.absorb(description);
        Ok(self)
    }

    /// Add the given tokens to the alphabet.
    pub fn symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Append the given names to the state set.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Mark the given state names as accepting.
    pub fn final_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.final_states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the state the automaton starts in.
    pub fn initial_state<S: Into<String>>(mut self, state: S) -> Self {
        self.initial_state = Some(state.into());
        self
    }

    /// Append a transition from `origin` to `destination` that consumes `symbol`.
    ///
    /// Repeating an origin and symbol appends another destination to the same
    /// transition, which makes the automaton non-deterministic.
    pub fn transition<A, B, C>(mut self, origin: A, symbol: B, destination: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        self.transitions
            .push((origin.into(), symbol.into(), destination.into()));
        self
    }

    /// Run the structural checks and create a [`FiniteAutomaton`].
    ///
    /// Repeated alphabet or state tokens are collapsed, keeping their first
    /// occurrence. The first violated invariant aborts the build; no automaton value
    /// exists afterwards.
    pub fn build(self) -> Result<FiniteAutomaton, StructuralError> {
        let alphabet: IndexSet<Symbol> = self.alphabet.into_iter().map(Symbol::new).collect();

        let mut states = Vec::new();
        let mut state_set = HashSet::new();

        for name in self.states {
            if state_set.insert(name.clone()) {
                states.push(State::new(name));
            }
        }

        let initial_state = match self.initial_state {
            Some(name) => name,
            None => return Err(StructuralError::MissingInitialState),
        };

        if !state_set.contains(&initial_state) {
            return Err(StructuralError::UnknownInitialState(initial_state));
        }

        let mut final_states = HashSet::new();

        for name in self.final_states {
            if !state_set.contains(&name) {
                return Err(StructuralError::UnknownFinalState(name));
            }

            final_states.insert(State::new(name));
        }

        let mut transitions = TransitionMap::new();

        for (origin, symbol, destination) in self.transitions {
            if !state_set.contains(&origin) {
                return Err(StructuralError::UnknownTransitionOrigin(origin));
            }

            if !alphabet.contains(symbol.as_str()) {
                return Err(StructuralError::UnknownTransitionSymbol(symbol));
            }

            if !state_set.contains(&destination) {
                return Err(StructuralError::UnknownTransitionDestination(destination));
            }

            transitions
                .entry(State::new(origin))
                .or_insert_with(IndexMap::new)
                .entry(Symbol::new(symbol))
                .or_insert_with(Vec::new)
                .push(State::new(destination));
        }

        Ok(FiniteAutomaton::new(
            alphabet,
            states,
            final_states,
            State::new(initial_state),
            transitions,
        ))
    }
}
