use crate::error::ExplorerError;
use reqwest::Response;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Logs the outcome of an upstream send. Bodies are never logged; they may
/// carry tokens.
pub fn log_upstream_response(
    method: &str,
    url: &str,
    started: Instant,
    response: &std::result::Result<Response, reqwest::Error>,
) {
    let elapsed_ms = started.elapsed().as_millis();
    match response {
        Ok(resp) => {
            info!(method, url, status = resp.status().as_u16(), elapsed_ms, "upstream response");
            if let Some(content_type) = resp.headers().get(reqwest::header::CONTENT_TYPE) {
                debug!(content_type = ?content_type, "upstream content type");
            }
        }
        Err(e) => {
            warn!(method, url, elapsed_ms, timeout = e.is_timeout(), error = %e, "upstream request failed");
        }
    }
}

/// Logs a handler-level failure without echoing user input.
pub fn log_failure(action: &str, err: &ExplorerError) {
    if err.is_validation() {
        debug!(action, error = %err, "rejected before any upstream call");
    } else {
        warn!(action, kind = failure_kind(err), "upstream call failed");
    }
}

fn failure_kind(err: &ExplorerError) -> &'static str {
    match err {
        ExplorerError::Http { .. } => "http",
        ExplorerError::Transport(_) => "transport",
        ExplorerError::InvalidJson => "invalid_json",
        ExplorerError::MissingToken => "missing_token",
        _ => "other",
    }
}
