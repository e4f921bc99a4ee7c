//! Data models for topics, fetched articles, and the assembled digest.
//!
//! This module defines the core data structures flowing through the pipeline:
//! - [`Topic`]: A configured search query driving one digest section
//! - [`Article`]: A raw article as returned by the news-search API
//! - [`Summary`]: The outcome of summarizing one article
//! - [`TopicSection`] / [`Digest`]: The assembled report, ready to render
//!
//! Data flows strictly forward: topics produce articles, articles produce
//! summaries, and the digest owns the ordered result of both.

use chrono::NaiveDate;

/// A keyword co-occurrence requirement for ambiguous topic names.
///
/// Some neighborhood names match unrelated stories unless they co-occur with
/// their city name (e.g. "Highland Park" exists in several states). Articles
/// that don't mention both `phrase` and `qualifier` are discarded after
/// fetching.
#[derive(Debug, Clone)]
pub struct Disambiguation {
    /// The phrase that must appear in the article text.
    pub phrase: String,
    /// The qualifier word that must co-occur with the phrase.
    pub qualifier: String,
}

/// A named search query driving one digest section.
///
/// Topics are defined once at configuration time; their order is preserved
/// through fetching and summarization into the rendered digest.
#[derive(Debug, Clone)]
pub struct Topic {
    /// The query string sent to the news-search API. May be a quoted phrase
    /// or a compound boolean expression (`"A" AND "B"`).
    pub query: String,
    /// Human-readable label used for the section heading and subject line.
    pub label: String,
    /// Optional post-fetch co-occurrence filter for ambiguous names.
    pub disambiguation: Option<Disambiguation>,
}

impl Topic {
    /// A topic whose query is the exact-phrase form of its label.
    pub fn phrase(label: &str) -> Self {
        Self {
            query: format!("\"{label}\""),
            label: label.to_string(),
            disambiguation: None,
        }
    }

    /// A topic that additionally requires `qualifier` to co-occur with the
    /// label phrase, both in the search query and in the fetched text.
    pub fn disambiguated(label: &str, qualifier: &str) -> Self {
        Self {
            query: format!("\"{label}\" AND \"{qualifier}\""),
            label: label.to_string(),
            disambiguation: Some(Disambiguation {
                phrase: label.to_string(),
                qualifier: qualifier.to_string(),
            }),
        }
    }
}

/// A news article as returned by the search API.
///
/// `description` and `content` are optional on the wire; [`Article::body_text`]
/// resolves the text that gets summarized.
#[derive(Debug, Clone)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// Canonical URL of the article.
    pub url: String,
    /// Short description, when the source provides one.
    pub description: Option<String>,
    /// Leading body content, when the source provides it.
    pub content: Option<String>,
}

impl Article {
    /// The text sent to the summarizer: the first non-empty of
    /// description, content, and title.
    pub fn body_text(&self) -> &str {
        if let Some(description) = self.description.as_deref() {
            if !description.trim().is_empty() {
                return description;
            }
        }
        if let Some(content) = self.content.as_deref() {
            if !content.trim().is_empty() {
                return content;
            }
        }
        &self.title
    }
}

/// The outcome of summarizing one article.
///
/// Summarization failures are carried in-band rather than dropping the
/// article; the renderer decides how a failure is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// The trimmed synopsis returned by the summarizer.
    Ready(String),
    /// The summarizer failed; carries the error description.
    Failed(String),
}

/// One article paired with its summary. One-to-one with fetched articles.
#[derive(Debug, Clone)]
pub struct SummarizedArticle {
    pub article: Article,
    pub summary: Summary,
}

/// One topic's slice of the digest, in fetch order.
///
/// A section with zero articles still renders its heading.
#[derive(Debug, Clone)]
pub struct TopicSection {
    /// Heading label, from [`Topic::label`].
    pub label: String,
    pub articles: Vec<SummarizedArticle>,
}

/// The full report for one run: ordered topic sections, optionally prefixed
/// by a mortgage-rate statistic. Built once, rendered once, discarded.
#[derive(Debug, Clone)]
pub struct Digest {
    /// The run date shown under the header.
    pub date: NaiveDate,
    /// Latest 30-year fixed mortgage rate, when the lookup ran and succeeded.
    pub mortgage_rate: Option<f64>,
    pub sections: Vec<TopicSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: Option<&str>, content: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            url: "https://example.com/story".to_string(),
            description: description.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn test_body_text_prefers_description() {
        let a = article("Title", Some("The description"), Some("The content"));
        assert_eq!(a.body_text(), "The description");
    }

    #[test]
    fn test_body_text_falls_back_to_content() {
        let a = article("Title", None, Some("The content"));
        assert_eq!(a.body_text(), "The content");

        let blank = article("Title", Some("   "), Some("The content"));
        assert_eq!(blank.body_text(), "The content");
    }

    #[test]
    fn test_body_text_falls_back_to_title() {
        let a = article("Just a headline", None, None);
        assert_eq!(a.body_text(), "Just a headline");

        let empties = article("Just a headline", Some(""), Some(""));
        assert_eq!(empties.body_text(), "Just a headline");
    }

    #[test]
    fn test_phrase_topic_quotes_query() {
        let t = Topic::phrase("West Seattle");
        assert_eq!(t.query, "\"West Seattle\"");
        assert_eq!(t.label, "West Seattle");
        assert!(t.disambiguation.is_none());
    }

    #[test]
    fn test_disambiguated_topic_builds_compound_query() {
        let t = Topic::disambiguated("White Center", "Seattle");
        assert_eq!(t.query, "\"White Center\" AND \"Seattle\"");
        let d = t.disambiguation.expect("disambiguation record");
        assert_eq!(d.phrase, "White Center");
        assert_eq!(d.qualifier, "Seattle");
    }

}
