//! Current-conditions client for the weather-by-coordinates endpoint.

use crate::types::{Coordinates, CurrentConditions, TemperatureBundle, WeatherDescriptor, WeatherError};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "stratus/0.1 (weather widget)";

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReading,
    weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    description: String,
    icon: String,
}

/// Client for the current-weather endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
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

    /// Point the provider at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions for the given coordinates, metric units.
    ///
    /// The first entry of the response's weather-conditions list wins;
    /// an empty list is a parse error.
    pub async fn fetch(&self, coords: &Coordinates) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coords.latitude, coords.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("empty weather-conditions list".to_string()))?;

        tracing::info!(
            temp = body.main.temp,
            condition = %condition.description,
            "Fetched current conditions"
        );

        Ok(CurrentConditions {
            temps: TemperatureBundle {
                current: body.main.temp,
                max: body.main.temp_max,
                min: body.main.temp_min,
            },
            weather: WeatherDescriptor {
                description: condition.description,
                icon_code: condition.icon,
            },
            fetched_at: Utc::now(),
        })
    }
}
