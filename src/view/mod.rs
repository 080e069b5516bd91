//! HTML rendering for the explorer page.
//!
//! Every value that came from the user or the upstream API goes through
//! [`escape_html`] before it is written into the page.

use crate::config::Endpoint;
use crate::session::Session;
use std::fmt::Write;

pub const PAGE_TITLE: &str = "Cyera API Explorer";

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; margin: 24px; }
      textarea, input, select { width: 100%; box-sizing: border-box; }
      textarea { min-height: 140px; }
      .row { margin-bottom: 16px; }
      .actions { display: flex; gap: 12px; flex-wrap: wrap; }
      .output { white-space: pre-wrap; background: #f7f7f7; padding: 12px; }
"#;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn endpoint_buttons(endpoints: &[Endpoint], selected: &str) -> String {
    let mut html = String::new();
    for endpoint in endpoints {
        let focus = if endpoint.id == selected { " autofocus" } else { "" };
        let _ = writeln!(
            html,
            r#"        <button type="submit" name="action" value="{}"{}>{}</button>"#,
            escape_html(&endpoint.id),
            focus,
            escape_html(&endpoint.label)
        );
    }
    html
}

fn output_panel(heading: &str, id: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!(
        "    <h3>{}</h3>\n    <div class=\"output\" id=\"{}\">{}</div>\n",
        heading,
        id,
        escape_html(text)
    )
}

pub fn render_page(session: &Session, endpoints: &[Endpoint]) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <style>{style}    </style>
  </head>
  <body>
    <h2>{title}</h2>
    <p>Create a JWT by adding your client ID and secret, optionally edit params, and fetch data.</p>
    <p><em>Tip:</em> Start with just limit/offset to avoid server errors.</p>
    <form method="post">
      <div class="row">
        <label>Client ID</label>
        <input name="client_id" placeholder="Client ID" value="{client_id}" />
      </div>
      <div class="row">
        <label>Secret</label>
        <input name="secret" type="password" placeholder="Secret" value="{secret}" />
      </div>
      <div class="row actions">
        <button type="submit" name="action" value="login">Create JWT</button>
      </div>
      <hr />
      <div class="row">
        <label>JWT</label>
        <textarea name="jwt" placeholder="Paste JWT here...">{jwt}</textarea>
      </div>
      <div class="row">
        <label>Query Params (JSON)</label>
        <textarea name="params">{params}</textarea>
      </div>
      <div class="row actions">
{buttons}      </div>
    </form>
{error}{response}  </body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        client_id = escape_html(&session.client_id),
        secret = escape_html(&session.secret),
        jwt = escape_html(&session.jwt),
        params = escape_html(&session.params_text),
        buttons = endpoint_buttons(endpoints, &session.endpoint),
        error = output_panel("Error", "error", &session.error_text),
        response = output_panel("Response", "response", &session.response_text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;

    fn endpoints() -> Vec<Endpoint> {
        ExplorerConfig::new("https://api.example.test").unwrap().endpoints
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn user_fields_cannot_break_out_of_the_form() {
        let session = Session {
            client_id: r#""><script>alert(1)</script>"#.to_string(),
            jwt: "</textarea><b>x</b>".to_string(),
            error_text: "<img src=x>".to_string(),
            ..Session::default()
        };
        let page = render_page(&session, &endpoints());
        assert!(!page.contains("<script>"));
        assert!(!page.contains("</textarea><b>"));
        assert!(!page.contains("<img"));
        assert!(page.contains("&lt;/textarea&gt;&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn panels_only_render_when_non_empty() {
        let page = render_page(&Session::default(), &endpoints());
        assert!(!page.contains("<h3>Error</h3>"));
        assert!(!page.contains("<h3>Response</h3>"));

        let session = Session {
            response_text: "{}".to_string(),
            ..Session::default()
        };
        let page = render_page(&session, &endpoints());
        assert!(page.contains("<h3>Response</h3>"));
        assert!(!page.contains("<h3>Error</h3>"));
    }

    #[test]
    fn selected_endpoint_gets_focus() {
        let session = Session {
            endpoint: "issues".to_string(),
            ..Session::default()
        };
        let page = render_page(&session, &endpoints());
        assert!(page.contains(r#"value="issues" autofocus>Fetch Issues"#));
        assert!(page.contains(r#"value="datastores">Fetch Datastores"#));
    }
}
