//! Command-line interface definitions for the daily news digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every secret and transport parameter is an env-backed argument, so the
//! binary runs unmodified from a scheduler that only sets environment
//! variables. Required arguments with no value fail fast at startup with a
//! per-name diagnostic from clap.

use clap::Parser;

/// Command-line arguments for the daily news digest.
///
/// Secrets are usually provided via the environment; transport parameters
/// default to the values the digest has always used and only need flags when
/// substituting fake services in tests.
///
/// # Examples
///
/// ```sh
/// # Usual invocation: everything from the environment
/// NEWSAPI_KEY=... OPENAI_API_KEY=... EMAIL_USER=... EMAIL_PASS=... \
///     TO_EMAIL=... daily_news_digest
///
/// # With the mortgage-rate line, and aborting if the lookup fails
/// FRED_API_KEY=... daily_news_digest --rate-required
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News-search API key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: String,

    /// Summarization API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// SMTP username; also the From address
    #[arg(long, env = "EMAIL_USER")]
    pub email_user: String,

    /// SMTP password
    #[arg(long, env = "EMAIL_PASS", hide_env_values = true)]
    pub email_pass: String,

    /// Recipient address for the digest
    #[arg(long, env = "TO_EMAIL")]
    pub to_email: String,

    /// Economic-data API key; enables the mortgage-rate line when set
    #[arg(long, env = "FRED_API_KEY", hide_env_values = true)]
    pub fred_api_key: Option<String>,

    /// Abort the run if the mortgage-rate lookup fails instead of omitting
    /// the rate line
    #[arg(long, env = "RATE_REQUIRED")]
    pub rate_required: bool,

    /// Chat model used for summarization
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4")]
    pub model: String,

    /// SMTP submission host
    #[arg(long, env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub smtp_host: String,

    /// SMTP submission port (implicit TLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = 465)]
    pub smtp_port: u16,

    /// News-search endpoint
    #[arg(
        long,
        env = "NEWSAPI_ENDPOINT",
        default_value = "https://newsapi.org/v2/everything"
    )]
    pub newsapi_endpoint: String,

    /// Economic-data observations endpoint
    #[arg(
        long,
        env = "FRED_ENDPOINT",
        default_value = "https://api.stlouisfed.org/fred/series/observations"
    )]
    pub fred_endpoint: String,

    /// Economic time series to report
    #[arg(long, env = "FRED_SERIES_ID", default_value = "MORTGAGE30US")]
    pub rate_series: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "daily_news_digest",
            "--newsapi-key",
            "news-key",
            "--openai-api-key",
            "openai-key",
            "--email-user",
            "sender@example.com",
            "--email-pass",
            "hunter2hunter2",
            "--to-email",
            "reader@example.com",
        ]
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(base_args());

        assert_eq!(cli.newsapi_key, "news-key");
        assert_eq!(cli.to_email, "reader@example.com");
        assert_eq!(cli.model, "gpt-4");
        assert_eq!(cli.smtp_host, "smtp.gmail.com");
        assert_eq!(cli.smtp_port, 465);
        assert_eq!(cli.rate_series, "MORTGAGE30US");
        assert!(cli.fred_api_key.is_none());
        assert!(!cli.rate_required);
    }

    #[test]
    fn test_cli_rate_flags() {
        let mut args = base_args();
        args.extend(["--fred-api-key", "fred-key", "--rate-required"]);
        let cli = Cli::parse_from(args);

        assert_eq!(cli.fred_api_key.as_deref(), Some("fred-key"));
        assert!(cli.rate_required);
    }

    #[test]
    fn test_cli_transport_overrides() {
        let mut args = base_args();
        args.extend([
            "--smtp-host",
            "localhost",
            "--smtp-port",
            "2465",
            "--newsapi-endpoint",
            "http://localhost:9999/v2/everything",
        ]);
        let cli = Cli::parse_from(args);

        assert_eq!(cli.smtp_host, "localhost");
        assert_eq!(cli.smtp_port, 2465);
        assert_eq!(cli.newsapi_endpoint, "http://localhost:9999/v2/everything");
    }
}
