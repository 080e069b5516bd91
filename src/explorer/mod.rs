//! The explorer page: `GET /` renders the form, `POST /` runs one action and
//! renders the result back into the same form.

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::posture_client::PostureClient;
use crate::query_params::{parse_params, sanitize_params};
use crate::response_handling::pretty_json;
use crate::response_logging::log_failure;
use crate::session::session_data::SessionData;
use crate::session::{Action, Session};
use crate::view::render_page;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

#[derive(Clone)]
pub struct ExplorerState {
    pub config: Arc<ExplorerConfig>,
    pub client: PostureClient,
}

impl ExplorerState {
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        let client = PostureClient::new(&config)?;
        Ok(ExplorerState {
            config: Arc::new(config),
            client,
        })
    }
}

pub fn router(state: ExplorerState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
}

async fn index(State(state): State<ExplorerState>) -> Html<String> {
    let session = Session::initial(&state.config);
    Html(render_page(&session, &state.config.endpoints))
}

async fn submit(State(state): State<ExplorerState>, Form(form): Form<SessionData>) -> Html<String> {
    let (action, session) = Session::from_form(form);
    let session = handle(&state, action, session).await;
    Html(render_page(&session, &state.config.endpoints))
}

/// Runs one action against the upstream API and folds the outcome into the
/// session. Failures end up in `error_text`; they never escape the handler.
pub async fn handle(state: &ExplorerState, action: Action, mut session: Session) -> Session {
    debug!(%session, "handling submit");
    let (name, outcome) = match &action {
        Action::Login => ("login", login(state, &mut session).await),
        Action::Fetch(id) => (id.as_str(), fetch(state, id, &mut session).await),
    };
    if let Err(err) = outcome {
        log_failure(name, &err);
        session.error_text = err.to_string();
    }
    session
}

async fn login(state: &ExplorerState, session: &mut Session) -> Result<()> {
    if session.client_id.is_empty() || session.secret.is_empty() {
        return Err(ExplorerError::MissingCredentials);
    }

    let outcome = state.client.login(&session.client_id, &session.secret).await?;
    session.response_text = pretty_json(&outcome.payload);
    match outcome.token {
        Some(token) => {
            info!(client_id = %session.client_id, "login succeeded");
            session.jwt = token;
            Ok(())
        }
        None => {
            session.jwt.clear();
            Err(ExplorerError::MissingToken)
        }
    }
}

async fn fetch(state: &ExplorerState, id: &str, session: &mut Session) -> Result<()> {
    let endpoint = state
        .config
        .endpoint(id)
        .ok_or(ExplorerError::InvalidEndpoint)?;
    if session.jwt.is_empty() {
        return Err(ExplorerError::MissingJwt);
    }

    let params = sanitize_params(&parse_params(&session.params_text)?);
    let value = state.client.fetch(endpoint, &session.jwt, &params).await?;
    session.response_text = pretty_json(&value);
    Ok(())
}

/// Serves the explorer on an already-bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener, state: ExplorerState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn serve(config: ExplorerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("explorer listening on http://{}", listener.local_addr()?);
    serve_on(listener, ExplorerState::new(config)?).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
