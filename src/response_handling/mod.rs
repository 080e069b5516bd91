use crate::error::{ExplorerError, Result};
use reqwest::Response;
use serde_json::Value;

/// Reads an upstream response as JSON.
///
/// Non-2xx statuses become `Http` errors carrying the body text, read failures
/// become `Transport`, and a body that does not parse becomes `InvalidJson`.
pub async fn json_from_response(response: Response) -> Result<Value> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };
        return Err(ExplorerError::Http { status, url, body });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|_| ExplorerError::InvalidJson)
}

/// Pretty-prints a JSON value with two-space indentation.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
