//! Error types for the explorer.
//!
//! The `Display` text of each variant is exactly what the page shows in its
//! error panel, so changing a message changes the UI.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Missing client ID or secret.")]
    MissingCredentials,

    #[error("Missing JWT. Please paste a token.")]
    MissingJwt,

    #[error("Invalid endpoint selection.")]
    InvalidEndpoint,

    #[error("Could not parse JSON:\n{0}")]
    InvalidParams(String),

    #[error("HTTP error: {status} for url: {url}\n\n{body}")]
    Http {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response was not valid JSON.")]
    InvalidJson,

    #[error("Login succeeded but JWT was not found in response.")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExplorerError {
    /// True for failures caught before any outbound call was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExplorerError::MissingCredentials
                | ExplorerError::MissingJwt
                | ExplorerError::InvalidEndpoint
                | ExplorerError::InvalidParams(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_url_and_body() {
        let err = ExplorerError::Http {
            status: StatusCode::UNAUTHORIZED,
            url: "https://api.example.test/v2/datastores".to_string(),
            body: "{\"message\":\"expired\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error: 401 Unauthorized for url: https://api.example.test/v2/datastores\n\n{\"message\":\"expired\"}"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn params_error_prefixes_detail() {
        let err = ExplorerError::InvalidParams("Params JSON must be an object.".to_string());
        assert_eq!(err.to_string(), "Could not parse JSON:\nParams JSON must be an object.");
        assert!(err.is_validation());
    }
}
