use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host serving the weather condition icons
const ICON_HOST: &str = "https://openweathermap.org";

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Fallback coordinates (New Delhi) used whenever a real location
    /// is unavailable or denied.
    pub const FALLBACK: Coordinates = Coordinates {
        latitude: 28.6139,
        longitude: 77.209,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are usable: finite, non-zero and in range.
    pub fn is_plausible(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude != 0.0
            && self.longitude != 0.0
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Current, max and min temperature in degrees Celsius, as received
/// from the weather API. Immutable once fetched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBundle {
    pub current: f64,
    pub max: f64,
    pub min: f64,
}

/// Human-readable weather condition plus its icon code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescriptor {
    pub description: String,
    pub icon_code: String,
}

impl WeatherDescriptor {
    /// URL of the condition icon on the external image host.
    /// Consumed only as an image source, never parsed.
    pub fn icon_url(&self) -> String {
        format!("{}/img/wn/{}@2x.png", ICON_HOST, self.icon_code)
    }
}

/// Complete fetch result for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temps: TemperatureBundle,
    pub weather: WeatherDescriptor,
    pub fetched_at: DateTime<Utc>,
}

/// Reverse-geocoded address parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub road: Option<String>,
    pub state: String,
    pub country: String,
}

impl Address {
    /// The primary place name: city preferred over road, first
    /// non-empty one wins.
    pub fn place(&self) -> Option<&str> {
        self.city
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.road.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Location acquisition errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location lookup rejected: {0}")]
    Rejected(String),
    #[error("Location parse error: {0}")]
    Parse(String),
}

/// Weather and geocoding fetch errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}
