//! Maps weather-crate errors to `stratus_core::AppError` for consistent
//! user-facing messages at the application boundary.

use stratus_core::error::ReqwestErrorExt;
use stratus_core::{AppError, LocationError as CoreLocationError, WeatherError as CoreWeatherError};
use stratus_weather::{LocationError, WeatherError};

pub fn map_weather_error(e: WeatherError) -> AppError {
    match e {
        WeatherError::Network(e) => AppError::Network(e.into_network_error()),
        WeatherError::Parse(msg) => AppError::Weather(CoreWeatherError::ApiError(msg)),
    }
}

pub fn map_location_error(e: LocationError) -> AppError {
    match e {
        LocationError::ServiceUnavailable => {
            AppError::Location(CoreLocationError::ServiceUnavailable)
        }
        LocationError::Network(e) => AppError::Network(e.into_network_error()),
        LocationError::Rejected(msg) | LocationError::Parse(msg) => {
            AppError::Location(CoreLocationError::LookupFailed(msg))
        }
    }
}
