//! Weather data access for Stratus
//!
//! Provides current conditions via a weather-by-coordinates API, a reverse
//! geocoder for human-readable addresses, and IP-based location detection.

pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;

pub use geocode::ReverseGeocoder;
pub use location::{IpLocator, LocationSource};
pub use provider::WeatherProvider;
pub use types::*;
