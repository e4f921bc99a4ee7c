//! Mortgage-rate lookup against the economic-data API.
//!
//! Requests the configured time series and reports the most recent
//! observation as a percentage. Whether a failure here aborts the run is the
//! caller's policy decision, not this module's.

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};
use url::Url;

use crate::config::RateSettings;
use crate::error::RateError;

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<Observation>,
}

/// One observation in the series. The value arrives as a decimal string.
#[derive(Debug, Deserialize)]
struct Observation {
    value: String,
}

/// Client for the economic-data API.
pub struct RateClient {
    http: Client,
    settings: RateSettings,
}

impl RateClient {
    pub fn new(http: Client, settings: RateSettings) -> Self {
        Self { http, settings }
    }

    /// Fetch the most recent observation of the configured series.
    #[instrument(level = "info", skip_all, fields(series = %self.settings.series_id))]
    pub async fn latest_rate(&self) -> Result<f64, RateError> {
        let mut url = Url::parse(&self.settings.endpoint)?;
        url.query_pairs_mut()
            .append_pair("series_id", &self.settings.series_id)
            .append_pair("api_key", &self.settings.api_key)
            .append_pair("file_type", "json");

        let response: ObservationsResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rate = latest_value(&response)?;
        info!(rate, "Fetched latest rate observation");
        Ok(rate)
    }
}

/// The last observation's value, parsed as a percentage.
fn latest_value(response: &ObservationsResponse) -> Result<f64, RateError> {
    let latest = response
        .observations
        .last()
        .ok_or(RateError::NoObservations)?;
    latest
        .value
        .parse::<f64>()
        .map_err(|source| RateError::BadValue {
            value: latest.value.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_value_takes_last_observation() {
        let json = r#"{
            "observations": [
                {"realtime_start": "2025-01-02", "value": "6.91"},
                {"realtime_start": "2025-01-09", "value": "6.93"},
                {"realtime_start": "2025-01-16", "value": "7.04"}
            ]
        }"#;
        let response: ObservationsResponse = serde_json::from_str(json).unwrap();
        let rate = latest_value(&response).unwrap();
        assert!((rate - 7.04).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latest_value_empty_series() {
        let response: ObservationsResponse =
            serde_json::from_str(r#"{"observations": []}"#).unwrap();
        assert!(matches!(
            latest_value(&response),
            Err(RateError::NoObservations)
        ));
    }

    #[test]
    fn test_latest_value_unparseable() {
        // FRED reports missing data points as "."
        let response: ObservationsResponse =
            serde_json::from_str(r#"{"observations": [{"value": "."}]}"#).unwrap();
        let err = latest_value(&response).unwrap_err();
        assert!(matches!(err, RateError::BadValue { ref value, .. } if value == "."));
    }
}
