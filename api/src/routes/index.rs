//! Registration page
//!
//! Serves the page hosting the Caisson widget. Each load gets a fresh random
//! user id which the page sends back on `/exchangetoken` and `/idcheckresult`.
//!
//! The page is a single inline document with two substituted values, so it is
//! formatted directly instead of going through a template engine.

use actix_web::{http::header::ContentType, web, HttpResponse};

use ir_core::repositories::UserRepository;
use ir_core::services::idcheck::IdCheckVendor;
use ir_shared::generate_user_id;

use super::idcheck::AppState;

/// Handler for GET /
pub async fn index<U, V>(state: web::Data<AppState<U, V>>) -> HttpResponse
where
    U: UserRepository + 'static,
    V: IdCheckVendor + 'static,
{
    let page = render_index(&state.public_api_key, &generate_user_id());

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

fn render_index(public_api_key: &str, user_id: &str) -> String {
    let public_api_key = escape_html(public_api_key);
    let user_id = escape_html(user_id);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>ID Check</title>
  <script src="https://cdn.caisson.com/caisson.js"></script>
</head>
<body data-caisson-public-key="{public_api_key}" data-user-id="{user_id}">
  <h1>Verify your identity</h1>
  <button id="start-check">Start ID check</button>
  <pre id="result"></pre>
  <script>
    const PUBLIC_KEY = document.body.dataset.caissonPublicKey;
    const USER_ID = document.body.dataset.userId;

    async function exchange(token) {{
      const res = await fetch("/exchangetoken", {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify({{ user_id: USER_ID, caisson_exchange_token: token }})
      }});
      if (!res.ok) throw new Error(await res.text());
    }}

    async function showResult() {{
      const res = await fetch("/idcheckresult", {{ headers: {{ "X-Example-UserID": USER_ID }} }});
      document.getElementById("result").textContent = await res.text();
    }}

    document.getElementById("start-check").addEventListener("click", () => {{
      const caisson = new Caisson(PUBLIC_KEY);
      caisson.idcheck.open(async (token) => {{
        await exchange(token);
        await showResult();
      }});
    }});
  </script>
</body>
</html>
"#
    )
}

/// Escape a value for use inside an HTML attribute
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_key_and_user_id() {
        let page = render_index("pk_live_123", "user-abc");

        assert!(page.contains(r#"data-caisson-public-key="pk_live_123""#));
        assert!(page.contains(r#"data-user-id="user-abc""#));
    }

    #[test]
    fn test_render_escapes_values() {
        let page = render_index(r#""><script>alert(1)</script>"#, "u");

        assert!(!page.contains("<script>alert(1)"));
        assert!(page.contains("&quot;&gt;&lt;script&gt;"));
    }
}
