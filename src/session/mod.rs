//! Per-request form state.
//!
//! A `Session` lives for exactly one request/response cycle: it is built from
//! the submitted form (or from config on a plain GET), updated by the handler
//! and rendered. Nothing is kept server-side between requests.

pub mod session_data;

use crate::config::ExplorerConfig;
use crate::response_handling::pretty_json;
use crate::session::session_data::SessionData;
use serde_json::json;
use std::fmt;

pub const LOGIN_ACTION: &str = "login";
pub const DEFAULT_ENDPOINT: &str = "datastores";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login,
    Fetch(String),
}

impl Action {
    /// An empty action is a fetch against the default endpoint.
    pub fn parse(raw: &str) -> Self {
        match raw {
            LOGIN_ACTION => Action::Login,
            "" => Action::Fetch(DEFAULT_ENDPOINT.to_string()),
            other => Action::Fetch(other.to_string()),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub client_id: String,
    pub secret: String,
    pub jwt: String,
    pub params_text: String,
    pub endpoint: String,
    pub response_text: String,
    pub error_text: String,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client_id: {:?} endpoint: {:?} jwt set: {} secret set: {}",
            self.client_id,
            self.endpoint,
            !self.jwt.is_empty(),
            !self.secret.is_empty()
        )
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({})", self)
    }
}

pub fn default_params_text() -> String {
    pretty_json(&json!({"limit": "10", "offset": "0"}))
}

impl Session {
    /// State shown on a plain GET: configured default credentials, no token.
    pub fn initial(config: &ExplorerConfig) -> Self {
        Session {
            client_id: config.default_client_id.clone(),
            secret: config.default_secret().to_string(),
            jwt: String::new(),
            params_text: default_params_text(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            response_text: String::new(),
            error_text: String::new(),
        }
    }

    /// State echoed back after a POST, before the action runs.
    pub fn from_form(form: SessionData) -> (Action, Self) {
        let form = form.normalized();
        let action = Action::parse(&form.action);
        let endpoint = match &action {
            Action::Fetch(id) => id.clone(),
            Action::Login => DEFAULT_ENDPOINT.to_string(),
        };
        let session = Session {
            client_id: form.client_id,
            secret: form.secret,
            jwt: form.jwt,
            params_text: form.params,
            endpoint,
            response_text: String::new(),
            error_text: String::new(),
        };
        (action, session)
    }
}
