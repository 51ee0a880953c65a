//! Webpage fetching and text extraction

use scraper::Html;

use crate::error::{Error, Result};
use crate::types::Document;

/// Fetch a URL and extract its visible text content
pub async fn load_url(client: &reqwest::Client, url: &str) -> Result<Vec<Document>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::load(url, format!("Fetch failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::load(url, format!("HTTP {}", response.status())));
    }

    let html = response
        .text()
        .await
        .map_err(|e| Error::load(url, format!("Failed to read body: {}", e)))?;

    let text = extract_text(&html);
    if text.is_empty() {
        return Err(Error::load(url, "Page contains no readable text"));
    }

    Ok(vec![Document::new(text, url)])
}

/// Extract readable text from HTML, skipping script/style/head content
fn extract_text(html: &str) -> String {
    const SKIPPED: &[&str] = &["script", "style", "noscript", "head", "template"];

    let document = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();

    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let in_skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map(|el| SKIPPED.contains(&el.name()))
                .unwrap_or(false)
        });
        if in_skipped {
            continue;
        }

        let fragment = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !fragment.is_empty() {
            lines.push(fragment);
        }
    }

    lines.join("\n")
}
