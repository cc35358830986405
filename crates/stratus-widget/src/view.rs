//! Pure view-model computation: fetched data plus a unit selector in,
//! display strings out. No side effects, testable without a surface.

use crate::units::to_fahrenheit;
use stratus_core::TemperatureUnit;
use stratus_weather::{Address, TemperatureBundle, WeatherDescriptor};

/// Display strings for one render of the data panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    pub description: String,
    pub current: String,
    pub max: String,
    pub min: String,
    pub icon_url: String,
}

impl WeatherView {
    /// Compose the display strings for a temperature bundle and weather
    /// descriptor in the given unit. Conversion happens here; the bundle
    /// itself stays in Celsius.
    pub fn compose(
        temps: &TemperatureBundle,
        weather: &WeatherDescriptor,
        unit: TemperatureUnit,
    ) -> Self {
        Self {
            description: weather.description.clone(),
            current: format_temperature(temps.current, unit),
            max: format_temperature(temps.max, unit),
            min: format_temperature(temps.min, unit),
            icon_url: weather.icon_url(),
        }
    }
}

/// Format a Celsius reading as `"<value>  °C"` or `"<value>  °F"`.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{}  °C", celsius),
        TemperatureUnit::Fahrenheit => format!("{}  °F", to_fahrenheit(celsius)),
    }
}

/// Status line for a reverse-geocoded address.
///
/// `own_location` selects the prefix: the user's real position reads
/// "Your location is at", the fallback reads "Showing results for".
pub fn status_line(address: &Address, own_location: bool) -> String {
    let prefix = if own_location {
        "Your location is at"
    } else {
        "Showing results for"
    };

    let mut parts: Vec<&str> = Vec::new();
    if let Some(place) = address.place() {
        parts.push(place);
    }
    if !address.state.is_empty() {
        parts.push(&address.state);
    }
    if !address.country.is_empty() {
        parts.push(&address.country);
    }

    format!("{} {}", prefix, parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bundle() -> TemperatureBundle {
        TemperatureBundle {
            current: 20.0,
            max: 25.0,
            min: 15.0,
        }
    }

    fn sample_descriptor() -> WeatherDescriptor {
        WeatherDescriptor {
            description: "scattered clouds".into(),
            icon_code: "03d".into(),
        }
    }

    #[test]
    fn test_celsius_view() {
        let view = WeatherView::compose(
            &sample_bundle(),
            &sample_descriptor(),
            TemperatureUnit::Celsius,
        );
        assert_eq!(view.current, "20  °C");
        assert_eq!(view.max, "25  °C");
        assert_eq!(view.min, "15  °C");
        assert_eq!(view.description, "scattered clouds");
        assert_eq!(view.icon_url, "https://openweathermap.org/img/wn/03d@2x.png");
    }

    #[test]
    fn test_fahrenheit_view() {
        let view = WeatherView::compose(
            &sample_bundle(),
            &sample_descriptor(),
            TemperatureUnit::Fahrenheit,
        );
        assert_eq!(view.current, "68  °F");
        assert_eq!(view.max, "77  °F");
        assert_eq!(view.min, "59  °F");
    }

    #[test]
    fn test_fractional_temperature_keeps_decimals() {
        assert_eq!(
            format_temperature(20.5, TemperatureUnit::Celsius),
            "20.5  °C"
        );
    }

    #[test]
    fn test_status_line_own_location() {
        let address = Address {
            city: Some("Delhi".into()),
            road: None,
            state: "Delhi".into(),
            country: "India".into(),
        };
        assert_eq!(
            status_line(&address, true),
            "Your location is at Delhi, Delhi, India"
        );
    }

    #[test]
    fn test_status_line_fallback_road() {
        let address = Address {
            city: None,
            road: Some("MG Road".into()),
            state: "Karnataka".into(),
            country: "India".into(),
        };
        assert_eq!(
            status_line(&address, false),
            "Showing results for MG Road, Karnataka, India"
        );
    }

    #[test]
    fn test_status_line_skips_missing_parts() {
        let address = Address {
            city: None,
            road: None,
            state: "Karnataka".into(),
            country: "India".into(),
        };
        assert_eq!(status_line(&address, false), "Showing results for Karnataka, India");
    }
}
