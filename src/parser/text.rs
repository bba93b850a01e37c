use std::fs;
use std::path::Path;

use crate::{error::ParsingError, parser::RawDescription};

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn parse_description(content: &str) -> Result<RawDescription, String> {
    let mut lines = content.lines();

    // The first four lines are positional so that a machine without final states
    // can leave its final-states line empty
    let alphabet = match lines.next() {
        Some(line) => tokens(line),
        None => return Err("Missing alphabet line".to_string()),
    };

    let states = match lines.next() {
        Some(line) => tokens(line),
        None => return Err("Missing states line".to_string()),
    };

    let final_states = match lines.next() {
        Some(line) => tokens(line),
        None => return Err("Missing final states line".to_string()),
    };

    let initial_line = match lines.next() {
        Some(line) => tokens(line),
        None => return Err("Missing initial state line".to_string()),
    };

    let initial_state = match <[String; 1]>::try_from(initial_line) {
        Ok([initial_state]) => initial_state,
        Err(excess) => {
            return Err(format!(
                "The initial state line must contain exactly one token, found {}",
                excess.len()
            ));
        },
    };

    let mut transitions = Vec::new();

    for line in lines {
        let line = tokens(line);

        if line.is_empty() {
            continue;
        }

        match <[String; 3]>::try_from(line) {
            Ok([origin, symbol, destination]) => {
                transitions.push((origin, symbol, destination));
            },
            Err(excess) => {
                return Err(format!(
                    "Transition lines must consist of origin, symbol and destination, found {} tokens",
                    excess.len()
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
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return Err(ParsingError::new(path, format!("{}", e)));
        },
    };

    parse_description(&content).map_err(|e| ParsingError::new(path, e))
}
