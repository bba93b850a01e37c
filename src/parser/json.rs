use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{error::ParsingError, parser::RawDescription};

fn string_array(value: &json::Value, key: &str) -> Result<Vec<String>, String> {
    let array = match value.get(key) {
        Some(json::Value::Array(array)) => array,
        Some(_) => return Err(format!("'{}' must be an array", key)),
        None => return Err(format!("Description is missing the key '{}'", key)),
    };

    let mut strings = Vec::new();

    for item in array {
        match item.as_str() {
            Some(item) => strings.push(item.to_string()),
            None => return Err(format!("'{}' must be an array of strings", key)),
        }
    }

    Ok(strings)
}

fn parse_description(value: json::Value) -> Result<RawDescription, String> {
    if !value.is_object() {
        return Err("Description must be specified as an object".to_string());
    }

    let alphabet = string_array(&value, "alphabet")?;
    let states = string_array(&value, "states")?;
    let final_states = string_array(&value, "final")?;

    let initial_state = match value.get("initial") {
        Some(json::Value::String(initial_state)) => initial_state.clone(),
        Some(_) => return Err("'initial' must be a string".to_string()),
        None => return Err("Description is missing the key 'initial'".to_string()),
    };

    let triples = match value.get("transitions") {
        Some(json::Value::Array(triples)) => triples,
        Some(_) => return Err("'transitions' must be an array".to_string()),
        None => return Err("Description is missing the key 'transitions'".to_string()),
    };

    let mut transitions = Vec::new();

    for triple in triples {
        let triple = match triple.as_array() {
            Some(triple) => triple,
            None => return Err("'transitions' must be an array of arrays".to_string()),
        };

        match triple.as_slice() {
            [origin, symbol, destination] => {
                match (origin.as_str(), symbol.as_str(), destination.as_str()) {
                    (Some(origin), Some(symbol), Some(destination)) => {
                        transitions.push((
                            origin.to_string(),
                            symbol.to_string(),
                            destination.to_string(),
                        ));
                    },
                    _ => return Err("Transitions must consist of strings".to_string()),
                }
            },
            _ => {
                return Err(format!(
                    "Transitions must be triples of origin, symbol and destination, found {} elements",
                    triple.len()
                ));
            },
        }
    }

    Ok(RawDescription {
        alphabet,
        states,
        final_states,
        initial_state,
        transitions,
    })
}

pub fn parse_file(path: &Path) -> Result<RawDescription, ParsingError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return Err(ParsingError::new(path, format!("{}", e)));
        },
    };
    let reader = BufReader::new(file);
    let reader = StripComments::with_settings(CommentSettings::c_style(), reader);

    let value: json::Value = match json::from_reader(reader) {
        Ok(value) => value,
        Err(_) => {
            return Err(ParsingError::new(path, "Invalid JSON syntax"));
        },
    };

    parse_description(value).map_err(|e| ParsingError::new(path, e))
}
