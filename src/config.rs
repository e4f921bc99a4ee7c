//! Run configuration: settings struct, topic list, and secret reporting.
//!
//! All configuration is resolved once at startup from the parsed CLI and
//! passed by reference into each component. Nothing below `main` reads the
//! process environment.

use itertools::Itertools;
use tracing::{error, info};

use crate::cli::Cli;
use crate::models::Topic;
use crate::utils::mask_secret;

/// SMTP transport settings.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub host: String,
    pub port: u16,
    /// SMTP username; also used as the From address.
    pub username: String,
    pub password: String,
    /// The single recipient of the digest.
    pub recipient: String,
}

/// Economic-data lookup settings. Present only when a rate API key was
/// configured.
#[derive(Debug, Clone)]
pub struct RateSettings {
    pub api_key: String,
    pub endpoint: String,
    pub series_id: String,
    /// When true, a failed lookup aborts the run; otherwise the rate line is
    /// omitted.
    pub required: bool,
}

/// Everything one run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub newsapi_key: String,
    pub newsapi_endpoint: String,
    pub openai_api_key: String,
    /// Chat model used for summarization.
    pub model: String,
    pub mail: MailSettings,
    pub rate: Option<RateSettings>,
    /// Ordered topic list; section order in the digest follows this.
    pub topics: Vec<Topic>,
}

impl Settings {
    /// Build settings from parsed CLI arguments and the default topic list.
    pub fn from_cli(cli: Cli) -> Self {
        let rate = cli.fred_api_key.map(|api_key| RateSettings {
            api_key,
            endpoint: cli.fred_endpoint,
            series_id: cli.rate_series,
            required: cli.rate_required,
        });

        Self {
            newsapi_key: cli.newsapi_key,
            newsapi_endpoint: cli.newsapi_endpoint,
            openai_api_key: cli.openai_api_key,
            model: cli.model,
            mail: MailSettings {
                host: cli.smtp_host,
                port: cli.smtp_port,
                username: cli.email_user,
                password: cli.email_pass,
                recipient: cli.to_email,
            },
            rate,
            topics: default_topics(),
        }
    }

    /// Subject line for the digest email, derived from the topic labels.
    pub fn subject(&self) -> String {
        let labels = self.topics.iter().map(|t| t.label.as_str()).join(" + ");
        format!("Your Daily {labels} News")
    }
}

/// The configured neighborhood topics, in rendering order.
///
/// White Center and Highland Park are ambiguous outside Seattle, so they
/// carry a disambiguation record as well as a compound query.
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::phrase("West Seattle"),
        Topic::phrase("Delridge"),
        Topic::disambiguated("White Center", "Seattle"),
        Topic::disambiguated("Highland Park", "Seattle"),
    ]
}

/// Log the presence of each secret, masked to its first 4 characters.
///
/// Absent environment variables never get this far (clap rejects them at
/// parse time); this reports values that are present but empty, which the
/// run survives until the affected API call fails. Returns the names of
/// the empty secrets so callers wanting strict validation can add their own
/// gate.
pub fn report_secrets(settings: &Settings) -> Vec<&'static str> {
    info!("Verifying configured secrets");

    let mut secrets: Vec<(&'static str, &str)> = vec![
        ("NEWSAPI_KEY", &settings.newsapi_key),
        ("OPENAI_API_KEY", &settings.openai_api_key),
        ("EMAIL_USER", &settings.mail.username),
        ("EMAIL_PASS", &settings.mail.password),
        ("TO_EMAIL", &settings.mail.recipient),
    ];
    if let Some(rate) = &settings.rate {
        secrets.push(("FRED_API_KEY", &rate.api_key));
    }

    let mut empty = Vec::new();
    for (name, value) in secrets {
        if value.is_empty() {
            error!(name, "secret is not set");
            empty.push(name);
        } else {
            info!(name, value = %mask_secret(value), "secret is set");
        }
    }
    empty
}
