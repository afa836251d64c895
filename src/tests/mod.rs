use super::*;

// Shared test helpers

fn one(input: &str) -> String {
    crate::transcode_one(input, &Options::default()).unwrap()
}

fn one_err(input: &str) -> ParseError {
    crate::transcode_one(input, &Options::default()).unwrap_err()
}

fn many(input: &str) -> Vec<String> {
    crate::transcode_stream(input, &Options::default()).collect()
}

fn val(input: &str) -> serde_json::Value {
    serde_json::from_str(&one(input)).unwrap()
}

mod containers;
mod strings_escapes;
