//! Thin client for the upstream posture API.
//!
//! One login call that trades client credentials for a bearer token and one
//! authenticated GET per configured data endpoint. Each call is a single
//! attempt bounded by the configured timeout; nothing is retried.

use crate::config::{Endpoint, ExplorerConfig};
use crate::error::Result;
use crate::query_params::{to_query_pairs, Params};
use crate::response_handling::json_from_response;
use crate::response_logging::log_upstream_response;
use crate::string_extraction::extract_token;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    client_id: &'a str,
    secret: &'a str,
}

/// Parsed login response plus the token found in it, if any.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub payload: Value,
    pub token: Option<String>,
}

#[derive(Clone)]
pub struct PostureClient {
    client: Client,
    login_url: String,
    timeout: Duration,
}

impl PostureClient {
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("posture-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(PostureClient {
            client,
            login_url: config.login_url.clone(),
            timeout: config.request_timeout,
        })
    }

    pub async fn login(&self, client_id: &str, secret: &str) -> Result<LoginOutcome> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.login_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .json(&LoginBody { client_id, secret })
            .send()
            .await;
        log_upstream_response("POST", &self.login_url, started, &response);

        let payload = json_from_response(response?).await?;
        let token = extract_token(&payload);
        Ok(LoginOutcome { payload, token })
    }

    pub async fn fetch(&self, endpoint: &Endpoint, jwt: &str, params: &Params) -> Result<Value> {
        let pairs = to_query_pairs(params);
        debug!(
            endpoint = %endpoint.id,
            keys = ?pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "fetching"
        );

        let started = Instant::now();
        let response = self
            .client
            .get(&endpoint.url)
            .bearer_auth(jwt)
            .header(ACCEPT, "application/json")
            .query(&pairs)
            .timeout(self.timeout)
            .send()
            .await;
        log_upstream_response("GET", &endpoint.url, started, &response);

        json_from_response(response?).await
    }
}
