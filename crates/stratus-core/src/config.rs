use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather endpoint settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Reverse-geocoding endpoint settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Location acquisition settings
    #[serde(default)]
    pub location: LocationConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// The widget always starts in Celsius; Fahrenheit is a re-render on top.
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key passed as the `appid` query parameter
    pub api_key: String,

    /// Base URL of the weather-by-coordinates endpoint
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: "2ef97685757078b208fcd0cca5d8a280".to_string(),
            base_url: "https://api.openweathermap.org".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,

    /// Base URL of the reverse-geocoding endpoint
    pub base_url: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: "pk.4d2c3a1a382ce556a038444de6378789".to_string(),
            base_url: "https://us1.locationiq.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fallback latitude when no real location is available (New Delhi)
    pub default_latitude: f64,

    /// Fallback longitude when no real location is available
    pub default_longitude: f64,

    /// Delay before falling back to the default coordinates after a
    /// failed location lookup
    pub fallback_delay_secs: u64,

    /// Base URL of the IP geolocation service
    pub locator_base_url: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_latitude: 28.6139,
            default_longitude: 77.209,
            fallback_delay_secs: 2,
            locator_base_url: "http://ip-api.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Temperature unit preference
    pub temperature_unit: TemperatureUnit,
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stratus");

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            geocoding: GeocodingConfig::default(),
            location: LocationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating default if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);
        self.validate_url(&self.geocoding.base_url, "geocoding.base_url", &mut result);
        self.validate_url(
            &self.location.locator_base_url,
            "location.locator_base_url",
            &mut result,
        );

        // Static tokens are passed through as-is; an empty one will just
        // produce rejected requests, so only warn.
        if self.weather.api_key.is_empty() {
            result.add_warning("weather.api_key", "Weather API key is empty");
        }
        if self.geocoding.api_key.is_empty() {
            result.add_warning("geocoding.api_key", "Geocoding API key is empty");
        }

        let lat = self.location.default_latitude;
        if !(-90.0..=90.0).contains(&lat) {
            result.add_error(
                "location.default_latitude",
                format!("Latitude must be in [-90, 90], got {lat}"),
            );
        }

        let lon = self.location.default_longitude;
        if !(-180.0..=180.0).contains(&lon) {
            result.add_error(
                "location.default_longitude",
                format!("Longitude must be in [-180, 180], got {lon}"),
            );
        }

        if self.location.fallback_delay_secs == 0 {
            result.add_warning(
                "location.fallback_delay_secs",
                "Fallback fires immediately (0 seconds)",
            );
        } else if self.location.fallback_delay_secs > 60 {
            result.add_warning(
                "location.fallback_delay_secs",
                "Fallback delay is more than a minute",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("stratus");

        Ok(config_dir.join("config.toml"))
    }
}
