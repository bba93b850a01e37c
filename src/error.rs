//! All the errors that loading an automaton can produce.

use std::path::PathBuf;
use thiserror::Error;

/// A description file could not be parsed.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// Errors that can appear while assembling an automaton from its raw fields.
///
/// Each variant names the structural invariant that was violated. When one of these
/// is returned, no automaton value was created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// The initial state is not a member of the state set
    #[error("The initial state '{0}' is not part of the state set")]
    UnknownInitialState(String),

    /// A final state is not a member of the state set
    #[error("The final state '{0}' is not part of the state set")]
    UnknownFinalState(String),

    /// A transition starts in a state that is not a member of the state set
    #[error("The transition origin '{0}' is not part of the state set")]
    UnknownTransitionOrigin(String),

    /// A transition consumes a symbol that is not part of the alphabet
    #[error("The transition symbol '{0}' is not part of the alphabet")]
    UnknownTransitionSymbol(String),

    /// A transition ends in a state that is not a member of the state set
    #[error("The transition destination '{0}' is not part of the state set")]
    UnknownTransitionDestination(String),

    /// No initial state was supplied before calling build
    #[error("No initial state was specified")]
    MissingInitialState,
}
