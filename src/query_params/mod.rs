use crate::error::{ExplorerError, Result};
use serde_json::{Map, Value};

pub type Params = Map<String, Value>;

/// Parses the params textarea. Blank text counts as `{}`.
pub fn parse_params(text: &str) -> Result<Params> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Params::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ExplorerError::InvalidParams(
            "Params JSON must be an object.".to_string(),
        )),
        Err(e) => Err(ExplorerError::InvalidParams(e.to_string())),
    }
}

/// Drops entries that are `null` or blank strings. Everything else is kept
/// untouched and in its original order.
pub fn sanitize_params(raw: &Params) -> Params {
    raw.iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Flattens params into query pairs. Arrays repeat their key once per element.
pub fn to_query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // numbers, bools and nested containers go out as compact JSON
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture is not an object"),
        }
    }

    #[test]
    fn sanitize_drops_null_and_blank_strings() {
        let raw = object(json!({
            "limit": "5",
            "offset": "",
            "cursor": "   ",
            "owner": null,
            "zero": 0,
            "flag": false,
            "tags": [],
            "name": " x "
        }));
        let clean = sanitize_params(&raw);
        let keys: Vec<&str> = clean.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["limit", "zero", "flag", "tags", "name"]);
        assert_eq!(clean["name"], json!(" x "));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let raw = object(json!({"a": "", "b": "1", "c": null, "d": {"e": ""}}));
        let once = sanitize_params(&raw);
        assert_eq!(sanitize_params(&once), once);
        // nested values are not touched
        assert_eq!(once["d"], json!({"e": ""}));
    }

    #[test]
    fn parse_rejects_non_objects() {
        let err = parse_params("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "Could not parse JSON:\nParams JSON must be an object.");
        assert!(matches!(parse_params("{not json"), Err(ExplorerError::InvalidParams(_))));
        assert!(parse_params("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_keeps_last_duplicate_and_insertion_order() {
        let params = parse_params(r#"{"offset": "0", "limit": "10", "offset": "20"}"#).unwrap();
        assert_eq!(params["offset"], json!("20"));
        assert_eq!(params.keys().next().map(String::as_str), Some("offset"));
    }

    #[test]
    fn query_pairs_flatten_scalars_and_arrays() {
        let params = object(json!({
            "limit": 5,
            "active": true,
            "name": "db",
            "type": ["s3", null, "rds"],
            "filter": {"k": 1}
        }));
        let pairs = to_query_pairs(&params);
        let expected: Vec<(String, String)> = [
            ("limit", "5"),
            ("active", "true"),
            ("name", "db"),
            ("type", "s3"),
            ("type", "rds"),
            ("filter", r#"{"k":1}"#),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(pairs, expected);
    }
}
