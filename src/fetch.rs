//! News-search API client.
//!
//! One request per topic: results sorted by publish time, English only,
//! truncated to the most recent [`MAX_ARTICLES_PER_TOPIC`] entries in the
//! order the API returned them. Topics flagged for disambiguation get a
//! post-fetch keyword co-occurrence filter on top.
//!
//! Fetch failures are logged and yield an empty topic — a dead search API
//! must never take the whole digest down.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::error::FetchError;
use crate::models::{Article, Disambiguation, Topic};

/// Upper bound on articles per topic, counted before disambiguation
/// filtering.
pub const MAX_ARTICLES_PER_TOPIC: usize = 5;

/// Wire shape of the search response: a list under an `articles` key.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// One wire-level search result. Everything is optional; entries without a
/// URL are unusable and get dropped.
#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

impl RawArticle {
    fn into_article(self) -> Option<Article> {
        let url = self.url?;
        Some(Article {
            title: self.title.unwrap_or_default(),
            url,
            description: self.description,
            content: self.content,
        })
    }
}

/// Client for the news-search API.
pub struct NewsClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl NewsClient {
    pub fn new(http: Client, api_key: String, endpoint: String) -> Self {
        Self {
            http,
            api_key,
            endpoint,
        }
    }

    /// Fetch recent articles for one topic.
    ///
    /// Any failure (transport, non-success status, malformed body) is logged
    /// and the topic comes back empty; the run continues.
    #[instrument(level = "info", skip_all, fields(topic = %topic.label))]
    pub async fn fetch_topic(&self, topic: &Topic) -> Vec<Article> {
        match self.search(topic).await {
            Ok(articles) => {
                info!(count = articles.len(), "Fetched articles for topic");
                articles
            }
            Err(e) => {
                error!(error = %e, query = %topic.query, "Fetch failed; topic renders empty");
                Vec::new()
            }
        }
    }

    async fn search(&self, topic: &Topic) -> Result<Vec<Article>, FetchError> {
        if topic.query.trim().is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("q", &topic.query)
            .append_pair("sortBy", "publishedAt")
            .append_pair("language", "en")
            .append_pair("apiKey", &self.api_key);

        let response: SearchResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(returned = response.articles.len(), "Search response decoded");
        Ok(shape_results(response.articles, topic))
    }
}

/// Truncate to the most recent entries, drop unusable ones, and apply the
/// topic's disambiguation filter if it has one.
fn shape_results(raw: Vec<RawArticle>, topic: &Topic) -> Vec<Article> {
    let articles = raw
        .into_iter()
        .take(MAX_ARTICLES_PER_TOPIC)
        .filter_map(|entry| match entry.into_article() {
            Some(article) => Some(article),
            None => {
                warn!(topic = %topic.label, "Dropping search result without a URL");
                None
            }
        });

    match &topic.disambiguation {
        Some(filter) => articles
            .filter(|article| passes_disambiguation(article, filter))
            .collect(),
        None => articles.collect(),
    }
}

/// Case-folded co-occurrence check over title + description + content.
fn passes_disambiguation(article: &Article, filter: &Disambiguation) -> bool {
    let haystack = format!(
        "{} {} {}",
        article.title,
        article.description.as_deref().unwrap_or_default(),
        article.content.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    haystack.contains(&filter.phrase.to_lowercase())
        && haystack.contains(&filter.qualifier.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, url: Option<&str>, description: Option<&str>) -> RawArticle {
        RawArticle {
            title: Some(title.to_string()),
            url: url.map(str::to_string),
            description: description.map(str::to_string),
            content: None,
        }
    }

    #[test]
    fn test_search_response_parses_api_shape() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "A", "url": "https://example.com/a", "description": "d", "content": null},
                {"title": null, "url": "https://example.com/b"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].title.as_deref(), Some("A"));
        assert!(response.articles[1].title.is_none());
    }

    #[test]
    fn test_search_response_missing_articles_key() {
        let response: SearchResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn test_shape_results_truncates_preserving_order() {
        let raw_articles: Vec<RawArticle> = (0..8)
            .map(|i| {
                raw(
                    &format!("Story {i}"),
                    Some(&format!("https://example.com/{i}")),
                    None,
                )
            })
            .collect();

        let shaped = shape_results(raw_articles, &Topic::phrase("Delridge"));
        assert_eq!(shaped.len(), MAX_ARTICLES_PER_TOPIC);
        let titles: Vec<&str> = shaped.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Story 0", "Story 1", "Story 2", "Story 3", "Story 4"]);
    }

    #[test]
    fn test_shape_results_drops_entries_without_url() {
        let raw_articles = vec![
            raw("Kept", Some("https://example.com/kept"), None),
            raw("Dropped", None, None),
        ];
        let shaped = shape_results(raw_articles, &Topic::phrase("Delridge"));
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].title, "Kept");
    }

    #[test]
    fn test_disambiguation_requires_both_terms() {
        let topic = Topic::disambiguated("Highland Park", "Seattle");
        let raw_articles = vec![
            raw(
                "Highland Park shooting in Illinois",
                Some("https://example.com/il"),
                Some("Highland Park, a suburb of Chicago"),
            ),
            raw(
                "New trail opens",
                Some("https://example.com/wa"),
                Some("The HIGHLAND PARK neighborhood of seattle gets a new trail"),
            ),
        ];

        let shaped = shape_results(raw_articles, &topic);
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].url, "https://example.com/wa");
    }

    #[test]
    fn test_disambiguation_searches_all_text_fields() {
        let filter = Disambiguation {
            phrase: "White Center".to_string(),
            qualifier: "Seattle".to_string(),
        };
        let a = Article {
            title: "White Center library reopens".to_string(),
            url: "https://example.com/wc".to_string(),
            description: None,
            content: Some("Just south of Seattle city limits".to_string()),
        };
        assert!(passes_disambiguation(&a, &filter));

        let b = Article {
            title: "White Center library reopens".to_string(),
            url: "https://example.com/wc2".to_string(),
            description: None,
            content: None,
        };
        assert!(!passes_disambiguation(&b, &filter));
    }

    #[tokio::test]
    async fn test_empty_query_never_hits_the_wire() {
        let client = NewsClient::new(
            Client::new(),
            "key".to_string(),
            "https://example.invalid/v2/everything".to_string(),
        );
        let topic = Topic {
            query: "   ".to_string(),
            label: "Blank".to_string(),
            disambiguation: None,
        };
        let err = client.search(&topic).await.unwrap_err();
        assert!(matches!(err, FetchError::EmptyQuery));
    }
}
