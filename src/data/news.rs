//! Weather news client
//!
//! Fetches a handful of recent weather and climate headlines from NewsAPI.
//! News is strictly auxiliary: the client only exists when the user passed
//! an API key, and any failure leaves the news panel empty without
//! touching the weather flow.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL for the NewsAPI "everything" endpoint
const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2/everything";

/// Search query for weather-related articles
const NEWS_QUERY: &str = "weather OR climate";

/// Number of headlines to request
const PAGE_SIZE: usize = 6;

/// Errors that can occur when fetching news
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A single news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article headline
    pub title: String,
    /// Short description or teaser, if provided
    pub description: Option<String>,
    /// Link to the full article
    pub url: String,
    /// Cover image URL, if provided
    #[serde(rename = "urlToImage")]
    pub image_url: Option<String>,
    /// Publication timestamp as reported by the source
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// NewsAPI response envelope
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsItem>,
}

/// Client for fetching weather news headlines
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
}

impl NewsClient {
    /// Creates a new NewsClient with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetches the latest weather-related headlines.
    ///
    /// # Returns
    /// * `Ok(Vec<NewsItem>)` - Up to six articles, newest first
    /// * `Err(NewsError)` - If the request or parsing fails
    pub async fn fetch_headlines(&self) -> Result<Vec<NewsItem>, NewsError> {
        let url = format!(
            "{}?q={}&language=en&sortBy=publishedAt&pageSize={}&apiKey={}",
            NEWSAPI_BASE_URL, NEWS_QUERY, PAGE_SIZE, self.api_key
        );

        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let parsed: NewsResponse = serde_json::from_str(&text)?;

        Ok(parsed.articles)
    }
}
