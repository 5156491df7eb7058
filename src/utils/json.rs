// Start of file: /src/utils/json.rs

use serde::Serialize;

// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

// End of file: /src/utils/json.rs
