//! Reverse geocoding: convert coordinates to address parts.

use crate::types::{Address, Coordinates, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://us1.locationiq.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "stratus/0.1 (weather widget)";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: RawAddress,
}

#[derive(Debug, Deserialize)]
struct RawAddress {
    city: Option<String>,
    road: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// Client for the reverse-geocoding endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ReverseGeocoder {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Point the geocoder at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve coordinates to address parts.
    pub async fn fetch(&self, coords: &Coordinates) -> Result<Address, WeatherError> {
        let url = format!(
            "{}/v1/reverse.php?key={}&lat={}&lon={}&format=json",
            self.base_url, self.api_key, coords.latitude, coords.longitude
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let address = Address {
            city: body.address.city,
            road: body.address.road,
            state: body.address.state.unwrap_or_default(),
            country: body.address.country.unwrap_or_default(),
        };

        tracing::info!(
            place = address.place().unwrap_or("<unknown>"),
            state = %address.state,
            "Reverse geocoded coordinates"
        );

        Ok(address)
    }
}
