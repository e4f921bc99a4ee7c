//! # Daily News Digest
//!
//! A one-shot pipeline that fetches recent news for a fixed set of
//! neighborhood search topics, summarizes each article through a
//! chat-completion API, assembles an HTML digest (optionally topped with the
//! latest 30-year mortgage rate), and emails it to a single recipient.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... OPENAI_API_KEY=... EMAIL_USER=... EMAIL_PASS=... \
//!     TO_EMAIL=... daily_news_digest
//! ```
//!
//! ## Architecture
//!
//! A single linear pipeline, run to completion once per invocation:
//! 1. **Configuration**: Resolve secrets and transport settings, report
//!    secret presence (masked)
//! 2. **Enrichment**: Optionally fetch the latest mortgage-rate observation
//! 3. **Fetching**: Query the news-search API per topic (at most 5 articles
//!    each, disambiguation-filtered where configured)
//! 4. **Summarization**: One 2-sentence synopsis per article; failures become
//!    in-band placeholders
//! 5. **Delivery**: Render the HTML digest and send it over SMTP
//!
//! Fetch and summarization failures degrade the affected item only; delivery
//! failures (and rate-lookup failures under `--rate-required`) abort the run
//! with a non-zero exit so a scheduler can flag it.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod fetch;
mod mailer;
mod models;
mod outputs;
mod rates;
mod summarize;
mod utils;

use cli::Cli;
use config::{report_secrets, Settings};
use fetch::NewsClient;
use mailer::Mailer;
use models::{Digest, Summary, SummarizedArticle, TopicSection};
use outputs::html::render_digest;
use rates::RateClient;
use summarize::Summarizer;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_news_digest starting up");

    let args = Cli::parse();
    let settings = Settings::from_cli(args);

    let empty_secrets = report_secrets(&settings);
    if !empty_secrets.is_empty() {
        warn!(
            names = ?empty_secrets,
            "Empty secrets present; the affected API calls will fail"
        );
    }

    let http = reqwest::Client::new();
    let news = NewsClient::new(
        http.clone(),
        settings.newsapi_key.clone(),
        settings.newsapi_endpoint.clone(),
    );
    let mut summarizer = Summarizer::new(&settings.openai_api_key, settings.model.clone())?;

    // Validates addresses and transport config before any API spend.
    let mailer = Mailer::new(&settings.mail)?;

    // ---- Optional rate enrichment ----
    let mortgage_rate = match &settings.rate {
        Some(rate_settings) => {
            let rate_client = RateClient::new(http.clone(), rate_settings.clone());
            match rate_client.latest_rate().await {
                Ok(rate) => Some(rate),
                Err(e) if rate_settings.required => {
                    error!(error = %e, "Rate lookup failed and is required; aborting");
                    return Err(e.into());
                }
                Err(e) => {
                    warn!(error = %e, "Rate lookup failed; omitting rate line");
                    None
                }
            }
        }
        None => None,
    };

    // ---- Fetch and summarize, topic by topic, article by article ----
    let mut sections = Vec::with_capacity(settings.topics.len());
    let mut total_articles = 0usize;
    let mut failed_summaries = 0usize;

    for topic in &settings.topics {
        let articles = news.fetch_topic(topic).await;
        total_articles += articles.len();

        let mut summarized = Vec::with_capacity(articles.len());
        for article in articles {
            let summary = match summarizer.summarize(article.body_text()).await {
                Ok(text) => Summary::Ready(text),
                Err(e) => {
                    warn!(error = %e, url = %article.url, "Summarization failed; using placeholder");
                    failed_summaries += 1;
                    Summary::Failed(e.to_string())
                }
            };
            summarized.push(SummarizedArticle { article, summary });
        }

        sections.push(TopicSection {
            label: topic.label.clone(),
            articles: summarized,
        });
    }

    info!(
        topics = sections.len(),
        articles = total_articles,
        failed_summaries,
        "Digest assembled"
    );

    // ---- Render and deliver ----
    let digest = Digest {
        date: Local::now().date_naive(),
        mortgage_rate,
        sections,
    };
    let body = render_digest(&digest);
    let subject = settings.subject();

    mailer.send(&subject, &body).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        "Execution complete"
    );

    Ok(())
}
