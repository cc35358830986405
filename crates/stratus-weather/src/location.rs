//! Location acquisition via IP geolocation.
//!
//! The widget has no access to a GPS-style positioning API, so the user's
//! approximate position comes from an IP geolocation service. The
//! [`LocationSource`] trait is the seam the widget controller is tested
//! through.

use crate::types::{Coordinates, LocationError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://ip-api.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "stratus/0.1 (weather widget)";

/// Something that can produce the user's current coordinates.
#[allow(async_fn_in_trait)]
pub trait LocationSource {
    /// Whether the capability exists at all on this system.
    fn is_available(&self) -> bool {
        true
    }

    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// IP geolocation client (ip-api.com JSON endpoint).
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    base_url: String,
}

impl IpLocator {
    pub fn new(base_url: &str) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

impl LocationSource for IpLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let url = format!("{}/json", self.base_url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Parse(e.to_string()))?;

        if body.status != "success" {
            let reason = body.message.unwrap_or(body.status);
            tracing::warn!(%reason, "IP geolocation lookup rejected");
            return Err(LocationError::Rejected(reason));
        }

        let coords = Coordinates::new(body.lat, body.lon);
        tracing::info!(
            lat = coords.latitude,
            lon = coords.longitude,
            "Resolved approximate location"
        );
        Ok(coords)
    }
}
