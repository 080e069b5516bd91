//! Common test utilities

use posture_explorer::config::ExplorerConfig;
use posture_explorer::explorer::{serve_on, ExplorerState};
use scraper::{Html, Selector};
use tokio::net::TcpListener;

/// Starts the explorer on an ephemeral port, pointed at `api_base`, and
/// returns its base URL.
pub async fn spawn_explorer(config: ExplorerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind explorer");
    let addr = listener.local_addr().expect("No local addr");
    let state = ExplorerState::new(config).expect("Failed to build state");
    tokio::spawn(async move {
        let _ = serve_on(listener, state).await;
    });
    format!("http://{}/", addr)
}

pub async fn post_form(url: &str, fields: &[(&str, &str)]) -> Html {
    let response = reqwest::Client::new()
        .post(url)
        .form(fields)
        .send()
        .await
        .expect("POST to explorer failed");
    assert_eq!(response.status(), 200);
    Html::parse_document(&response.text().await.expect("No body"))
}

/// Text content of the first element matching `css`, or `None`.
pub fn text_of(page: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).expect("Bad selector");
    page.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

pub fn input_value(page: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!("input[name=\"{}\"]", name)).expect("Bad selector");
    page.select(&selector)
        .next()
        .and_then(|el| el.value().attr("value").map(String::from))
}
