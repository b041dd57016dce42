use crate::config::DirectionsConfig;
use crate::TrafficInfoAppError;
use reqwest::blocking::Client;
use trafficinfo_core::directions::{DirectionsQuery, DirectionsSource};
use trafficinfo_core::TrafficInfoError;
use url::Url;

/// blocking client for the Google Maps Directions api. sends one GET per
/// query with no retry and the http client's default timeout.
#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    base_url: Url,
    api_key: Option<String>,
    client: Client,
}

impl GoogleDirectionsClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, TrafficInfoAppError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            TrafficInfoAppError::ConfigurationError(format!(
                "invalid directions base url '{base_url}': {e}"
            ))
        })?;
        let client = Client::builder()
            .build()
            .map_err(|e| TrafficInfoAppError::HttpClientError(format!("{e}")))?;
        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn try_from_config(
        config: &DirectionsConfig,
        api_key: Option<String>,
    ) -> Result<Self, TrafficInfoAppError> {
        Self::new(&config.base_url, api_key)
    }

    /// full request url including the api key. fails when no key is configured.
    pub fn request_url(&self, query: &DirectionsQuery) -> Result<Url, TrafficInfoError> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TrafficInfoError::FetchError(String::from("no directions api key configured"))
            })?;
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query.query_pairs() {
                pairs.append_pair(name, &value);
            }
            pairs.append_pair("key", key);
        }
        Ok(url)
    }
}

impl DirectionsSource for GoogleDirectionsClient {
    fn fetch_directions(&self, query: &DirectionsQuery) -> Result<String, TrafficInfoError> {
        let url = self.request_url(query)?;
        log::debug!(
            "requesting directions from {} -> {} at {}",
            query.origin,
            query.destination,
            self.base_url
        );

        // errors are stripped of the url so the api key is never logged
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| {
                TrafficInfoError::FetchError(format!("GET request failed: {}", e.without_url()))
            })?;
        let status = response.status();
        let body = response.text().map_err(|e| {
            TrafficInfoError::FetchError(format!("reading response failed: {}", e.without_url()))
        })?;
        if !status.is_success() {
            return Err(TrafficInfoError::FetchError(format!(
                "directions api responded with HTTP {status}: {body}"
            )));
        }
        Ok(body)
    }
}
