use std::collections::{BTreeSet, HashSet};
use std::iter;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::automaton::{FiniteAutomaton, State, TransitionMap};

impl FiniteAutomaton {
    /// Convert this automaton into a deterministic one that accepts the same language,
    /// using the subset construction.
    ///
    /// Every state of the result stands for one set of states of this automaton and
    /// gets a fresh name of the form `q0`, `q1`, … in the order the sets are first
    /// encountered. Pending sets are processed in LIFO order, so the names of the
    /// result are reproducible for a given input. A set is final if any of its members
    /// is final. States of this automaton that are not reachable from the initial
    /// state never show up in any set of the result.
    pub fn to_deterministic(&self) -> FiniteAutomaton {
        // minted names by canonical member key, doubles as the visited set
        let mut minted: IndexMap<String, State> = IndexMap::new();
        let mut pending: Vec<(State, BTreeSet<&State>)> = Vec::new();
        let mut final_states = HashSet::new();
        let mut transitions = TransitionMap::new();

        let seed: BTreeSet<&State> = iter::once(self.initial_state()).collect();
        let initial_state = mint(&mut minted, &seed);
        pending.push((initial_state.clone(), seed));

        while let Some((current, members)) = pending.pop() {
            if members.iter().any(|member| self.is_final(member)) {
                final_states.insert(current.clone());
            }

            let mut row = IndexMap::new();

            for symbol in self.alphabet() {
                let union: BTreeSet<&State> = members
                    .iter()
                    .filter_map(|member| self.destinations(member.name(), symbol.text()))
                    .flatten()
                    .collect();

                if union.is_empty() {
                    continue;
                }

                let target = match minted.get(&canonical_key(&union)) {
                    Some(existing) => existing.clone(),
                    None => {
                        let fresh = mint(&mut minted, &union);
                        pending.push((fresh.clone(), union));
                        fresh
                    },
                };

                row.insert(symbol.clone(), vec![target]);
            }

            if !row.is_empty() {
                transitions.insert(current, row);
            }
        }

        let states = minted.values().cloned().collect();

        FiniteAutomaton::new(
            self.alphabet().clone(),
            states,
            final_states,
            initial_state,
            transitions,
        )
    }
}

/// Sets of states are identified by their sorted, comma-joined member names.
fn canonical_key(members: &BTreeSet<&State>) -> String {
    members.iter().map(|member| member.name()).join(",")
}

fn mint(minted: &mut IndexMap<String, State>, members: &BTreeSet<&State>) -> State {
    let fresh = State::new(format!("q{}", minted.len()));
    minted.insert(canonical_key(members), fresh.clone());
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::simulator::Simulator;

    fn words_up_to(symbols: &[&str], max_len: usize) -> Vec<Vec<String>> {
        let mut words: Vec<Vec<String>> = vec![Vec::new()];
        let mut frontier: Vec<Vec<String>> = vec![Vec::new()];

        for _ in 0..max_len {
            let mut next = Vec::new();

            for word in &frontier {
                for symbol in symbols {
                    let mut extended = word.clone();
                    extended.push((*symbol).to_string());
                    next.push(extended);
                }
            }

            words.extend(next.iter().cloned());
            frontier = next;
        }

        words
    }

    fn assert_same_language(a: &FiniteAutomaton, b: &FiniteAutomaton, max_len: usize) {
        let symbols: Vec<&str> = a.alphabet().iter().map(|symbol| symbol.text()).collect();
        let simulator_a = Simulator::new(a);
        let simulator_b = Simulator::new(b);

        for word in words_up_to(&symbols, max_len) {
            assert_eq!(
                simulator_a.classify(&word),
                simulator_b.classify(&word),
                "classification differs for {:?}",
                word
            );
        }
    }

    fn branching_nfa() -> FiniteAutomaton {
        FiniteAutomaton::builder()
            .text_description("test-data/automata/branching.txt")
            .unwrap()
            .build()
            .unwrap()
    }

    fn shift_cycle() -> FiniteAutomaton {
        FiniteAutomaton::builder()
            .text_description("test-data/automata/shift-cycle.txt")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_collapses_branches() {
        let nfa = branching_nfa();
        assert!(!nfa.is_deterministic());

        let dfa = nfa.to_deterministic();
        assert!(dfa.is_deterministic());

        // {s0}, {s1,s2} and {s3} are the only reachable sets
        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.initial_state().name(), "q0");
        assert_eq!(dfa.destinations("q0", "a").unwrap(), [State::new("q1")]);
        assert!(dfa.destinations("q0", "b").is_none());
        assert_eq!(dfa.destinations("q1", "b").unwrap(), [State::new("q2")]);
        assert!(dfa.is_final(&State::new("q2")));
        assert!(!dfa.is_final(&State::new("q0")));
    }

    #[test]
    fn test_branching_language() {
        let nfa = branching_nfa();
        let dfa = nfa.to_deterministic();
        assert_same_language(&nfa, &dfa, 4);
    }

    #[test]
    fn test_alphabet_is_preserved() {
        let dfa = branching_nfa().to_deterministic();
        let symbols: Vec<&str> = dfa.alphabet().iter().map(|symbol| symbol.text()).collect();
        assert_eq!(symbols, ["a", "b"]);
    }

    #[test]
    fn test_relabels_deterministic_input() {
        let original = shift_cycle();
        assert!(original.is_deterministic());

        let relabeled = original.to_deterministic();
        assert!(relabeled.is_deterministic());
        assert_eq!(relabeled.states().len(), original.states().len());
        assert_same_language(&original, &relabeled, 5);
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let once = branching_nfa().to_deterministic();
        let twice = once.to_deterministic();

        assert!(twice.is_deterministic());
        assert_eq!(once.states().len(), twice.states().len());
        assert_same_language(&once, &twice, 4);
    }

    #[test]
    fn test_unreachable_states_disappear() {
        let automaton = FiniteAutomaton::builder()
            .symbols(["a"])
            .states(["s0", "s1", "island"])
            .final_states(["s1", "island"])
            .initial_state("s0")
            .transition("s0", "a", "s1")
            .transition("island", "a", "island")
            .build()
            .unwrap();

        let dfa = automaton.to_deterministic();
        assert_eq!(dfa.states().len(), 2);
    }
}
