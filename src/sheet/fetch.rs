use anyhow::{Context, Result};

/// Download the published sheet as CSV text.
pub async fn fetch_csv(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch sheet CSV")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("sheet source returned {status}: {}", truncate_body(&body, 200));
    }

    resp.text().await.context("Failed to read sheet CSV body")
}

/// Cut `body` to at most `max_bytes`, backing off to a char boundary. Keeps
/// error messages short when the upstream sends back an HTML error page.
fn truncate_body(body: &str, max_bytes: usize) -> &str {
    if body.len() <= max_bytes {
        return body;
    }
    let mut end = max_bytes;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
