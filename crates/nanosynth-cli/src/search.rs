//! Paper discovery via the Serper web search API.

use crate::error::{CliError, Result};
use nanosynth_domain::MaterialCategory;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

const SERPER_URL: &str = "https://google.serper.dev/search";
const MAX_RESULTS: usize = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One search hit: a candidate paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperHit {
    /// Result title, "Untitled" when the API omits it
    pub title: String,
    /// Link to the document
    pub url: String,
}

#[derive(Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperResult>,
}

#[derive(Deserialize)]
struct SerperResult {
    title: Option<String>,
    link: String,
}

/// Search the web for PDFs of synthesis papers in the given category.
///
/// Requires `SERPER_API_KEY` in the environment. Results are capped at 10
/// regardless of `num_results`.
pub fn search_papers(category: MaterialCategory, num_results: usize) -> Result<Vec<PaperHit>> {
    let api_key = std::env::var("SERPER_API_KEY")
        .map_err(|_| CliError::Config("SERPER_API_KEY environment variable not set".to_string()))?;

    let query = format!("{} synthesis parameters filetype:pdf", category.as_str());
    let num = num_results.min(MAX_RESULTS);

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| CliError::Search(e.to_string()))?;

    let response = client
        .post(SERPER_URL)
        .header("X-API-KEY", &api_key)
        .json(&serde_json::json!({ "q": query, "num": num }))
        .send()
        .map_err(|e| CliError::Search(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CliError::Search(format!(
            "Serper returned HTTP {}",
            response.status()
        )));
    }

    let body: SerperResponse = response
        .json()
        .map_err(|e| CliError::Search(format!("malformed search response: {}", e)))?;

    let hits: Vec<PaperHit> = body
        .organic
        .into_iter()
        .take(num)
        .map(|r| PaperHit {
            title: r.title.unwrap_or_else(|| "Untitled".to_string()),
            url: r.link,
        })
        .collect();

    info!(%category, results = hits.len(), "Paper search complete");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_defaults_title() {
        let body: SerperResponse = serde_json::from_str(
            r#"{"organic": [
                {"title": "ZnO nanorod growth", "link": "https://example.org/a.pdf"},
                {"link": "https://example.org/b.pdf"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(body.organic.len(), 2);
        assert_eq!(body.organic[0].title.as_deref(), Some("ZnO nanorod growth"));
        assert!(body.organic[1].title.is_none());
    }

    #[test]
    fn test_response_without_organic_section() {
        let body: SerperResponse = serde_json::from_str("{}").unwrap();
        assert!(body.organic.is_empty());
    }
}
