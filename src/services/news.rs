//! NewsAPI client.

use async_trait::async_trait;
use serde::Deserialize;

use super::{NewsFeed, ServiceError};

const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// How many articles go into a digest.
const DIGEST_ARTICLES: usize = 5;

/// Longest article-content excerpt included per article.
const CONTENT_EXCERPT: usize = 1000;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// reqwest-backed [`NewsFeed`] implementation against newsapi.org.
pub struct NewsApiClient {
    http: reqwest::Client,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl NewsFeed for NewsApiClient {
    async fn current_news(&self, search_term: &str) -> Result<String, ServiceError> {
        let response = self
            .http
            .get(NEWS_API_URL)
            .query(&[("q", search_term), ("apiKey", &self.api_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Http(response.status().as_u16()));
        }
        let body: NewsResponse = response.json().await?;
        Ok(format_digest(&body.articles))
    }
}

fn format_digest(articles: &[Article]) -> String {
    articles
        .iter()
        .take(DIGEST_ARTICLES)
        .map(|article| {
            let content = article.content.as_deref().unwrap_or_default();
            let excerpt: String = content.chars().take(CONTENT_EXCERPT).collect();
            format!(
                "{}\n{}\n{}\n{}",
                article.title.as_deref().unwrap_or_default(),
                article.description.as_deref().unwrap_or_default(),
                article.url.as_deref().unwrap_or_default(),
                excerpt
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_caps_article_count_and_excerpt() {
        let articles: Vec<Article> = (0..8)
            .map(|i| Article {
                title: Some(format!("title {i}")),
                description: Some("desc".to_string()),
                url: Some("https://example.com".to_string()),
                content: Some("x".repeat(2000)),
            })
            .collect();

        let digest = format_digest(&articles);
        assert_eq!(digest.matches("title ").count(), 5);
        assert!(!digest.contains("title 5"));
        // Excerpt is capped per article.
        let longest_run = digest.split('\n').map(str::len).max().unwrap_or(0);
        assert!(longest_run <= CONTENT_EXCERPT);
    }

    #[test]
    fn digest_of_nothing_is_empty() {
        assert_eq!(format_digest(&[]), "");
    }
}
