use crate::models::country::{CountryRecord, CountrySummary, ProviderCountry, ProviderSummary};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const SUMMARY_FIELDS: &str = "name,population";
const DETAIL_FIELDS: &str = "name,capital,population,flags,currencies,region";

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("No country matches '{0}'")]
    NotFound(String),
    #[error("Provider answered with HTTP {0}")]
    UpstreamStatus(StatusCode),
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

/// Read-only client of the country information provider.
pub struct CountryService {
    client: Client,
    base_url: Url,
}

impl CountryService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CountryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| CountryError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CountryError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str], fields: &str) -> Result<Url, CountryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CountryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("fields", fields);
        Ok(url)
    }

    /// The `n` most populous countries, largest first. Equal populations keep
    /// the provider's order.
    pub async fn top_by_population(&self, n: usize) -> Result<Vec<CountrySummary>, CountryError> {
        let url = self.endpoint(&["all"], SUMMARY_FIELDS)?;
        debug!("Fetching country summaries from {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CountryError::UpstreamStatus(response.status()));
        }

        let mut summaries: Vec<ProviderSummary> = response.json().await?;
        summaries.sort_by(|a, b| b.population.cmp(&a.population));

        Ok(summaries
            .into_iter()
            .take(n)
            .map(CountrySummary::from)
            .collect())
    }

    /// Countries whose name matches `name`; matching is left to the provider.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, CountryError> {
        let url = self.endpoint(&["name", name], DETAIL_FIELDS)?;
        debug!("Searching countries at {}", url);

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(CountryError::NotFound(name.to_string())),
            status if !status.is_success() => return Err(CountryError::UpstreamStatus(status)),
            _ => {}
        }

        let countries: Vec<ProviderCountry> = response.json().await?;
        if countries.is_empty() {
            return Err(CountryError::NotFound(name.to_string()));
        }

        Ok(countries.into_iter().map(CountryRecord::from).collect())
    }
}
