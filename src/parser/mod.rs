pub mod json;
pub mod text;

/// The five raw fields of an automaton description, before any semantic validation.
#[derive(Debug)]
pub struct RawDescription {
    pub alphabet: Vec<String>,
    pub states: Vec<String>,
    pub final_states: Vec<String>,
    pub initial_state: String,
    pub transitions: Vec<(String, String, String)>,
}
