use serde_json::Value;

/// Login responses carry the bearer token under one of these keys, checked in order.
const TOKEN_FIELDS: [&str; 2] = ["jwt", "token"];

pub fn extract_non_empty_string(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Pulls the bearer token out of a login payload. `jwt` wins over `token`
/// when both are present; a non-object payload has no token.
pub fn extract_token(payload: &Value) -> Option<String> {
    TOKEN_FIELDS
        .iter()
        .find_map(|field| extract_non_empty_string(payload, field))
}
