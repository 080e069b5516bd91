//! Explorer configuration.
//!
//! Built once at startup from flags, the process environment and an optional
//! `.env` file, then handed to the handler state. Nothing here is global.

use crate::error::{ExplorerError, Result};
use clap::Parser;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.cyera.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const LOGIN_PATH: &str = "v1/login";

/// The fixed set of data endpoints: (id, button label, path under the API base).
const ENDPOINTS: [(&str, &str, &str); 2] = [
    ("datastores", "Fetch Datastores", "v2/datastores"),
    ("issues", "Fetch Issues", "v3/issues"),
];

#[derive(Parser, Debug)]
#[command(
    name = "posture-explorer",
    version,
    about = "Small web UI for logging in to the Cyera API and browsing raw JSON"
)]
pub struct Args {
    /// Address the explorer page is served on.
    #[arg(long, env = "EXPLORER_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Base URL of the upstream API; login and data URLs hang off it.
    #[arg(long, env = "CYERA_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Timeout for each upstream request, in seconds.
    #[arg(long, env = "EXPLORER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Clone)]
pub struct ExplorerConfig {
    pub bind_addr: SocketAddr,
    pub login_url: String,
    pub endpoints: Vec<Endpoint>,
    pub default_client_id: String,
    default_secret: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("login_url", &self.login_url)
            .field("endpoints", &self.endpoints)
            .field("default_client_id", &self.default_client_id)
            .field("default_secret", &redacted(&self.default_secret))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl ExplorerConfig {
    /// Config pointing at `api_base` with no default credentials.
    pub fn new(api_base: &str) -> Result<Self> {
        let base = parse_base(api_base)?;
        let login_url = join(&base, LOGIN_PATH)?;
        let endpoints = ENDPOINTS
            .iter()
            .map(|(id, label, path)| -> Result<Endpoint> {
                Ok(Endpoint {
                    id: id.to_string(),
                    label: label.to_string(),
                    url: join(&base, path)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ExplorerConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            login_url,
            endpoints,
            default_client_id: String::new(),
            default_secret: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build from parsed flags. Default credentials come from `CYERA_CLIENT_ID`
    /// and `CYERA_SECRET`; they are never accepted as flags.
    pub fn from_args(args: Args) -> Result<Self> {
        if args.timeout_secs == 0 {
            return Err(ExplorerError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }
        let mut config = ExplorerConfig::new(&args.api_base)?;
        config.bind_addr = args.bind;
        config.request_timeout = Duration::from_secs(args.timeout_secs);
        Ok(config.with_credentials(
            &std::env::var("CYERA_CLIENT_ID").unwrap_or_default(),
            &std::env::var("CYERA_SECRET").unwrap_or_default(),
        ))
    }

    pub fn with_credentials(mut self, client_id: &str, secret: &str) -> Self {
        self.default_client_id = client_id.to_string();
        self.default_secret = secret.to_string();
        self
    }

    pub fn default_secret(&self) -> &str {
        &self.default_secret
    }

    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let mut base = Url::parse(raw.trim())
        .map_err(|e| ExplorerError::Config(format!("invalid API base '{}': {}", raw, e)))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ExplorerError::Config(format!(
            "API base must be http or https, got '{}'",
            base.scheme()
        )));
    }
    // Url::join replaces the last segment unless the path ends in a slash.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn join(base: &Url, path: &str) -> Result<String> {
    base.join(path)
        .map(String::from)
        .map_err(|e| ExplorerError::Config(format!("invalid endpoint path '{}': {}", path, e)))
}
