//! Integration tests for the widget controller: one acquisition pass
//! against mock endpoints, the failure fallback, and the unit toggle.

use std::time::Duration;

use stratus_core::{Config, TemperatureUnit};
use stratus_weather::{Coordinates, LocationError, LocationSource};
use stratus_widget::{AcquisitionState, Surface, WeatherWidget};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Surface that records every mutation for assertions.
#[derive(Debug, Default)]
struct RecordingSurface {
    statuses: Vec<String>,
    alerts: Vec<String>,
    panel_visible: bool,
    description: String,
    temperatures: Vec<(String, String, String)>,
    icon_url: String,
}

impl Surface for RecordingSurface {
    fn set_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn reveal_data_panel(&mut self) {
        self.panel_visible = true;
    }

    fn set_weather(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn set_temperatures(&mut self, current: &str, max: &str, min: &str) {
        self.temperatures
            .push((current.to_string(), max.to_string(), min.to_string()));
    }

    fn set_icon(&mut self, url: &str) {
        self.icon_url = url.to_string();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

struct FixedLocator(Coordinates);

impl LocationSource for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

struct FailingLocator;

impl LocationSource for FailingLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Rejected("no usable network path".into()))
    }
}

struct UnavailableLocator;

impl LocationSource for UnavailableLocator {
    fn is_available(&self) -> bool {
        false
    }

    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

fn test_config(server_uri: &str) -> Config {
    let mut config = Config::default();
    config.weather.api_key = "test-key".into();
    config.weather.base_url = server_uri.into();
    config.geocoding.api_key = "test-token".into();
    config.geocoding.base_url = server_uri.into();
    config
}

fn weather_body() -> serde_json::Value {
    serde_json::json!({
        "main": { "temp": 20.0, "temp_max": 25.0, "temp_min": 15.0 },
        "weather": [
            { "description": "clear sky", "icon": "01d" }
        ]
    })
}

async fn mount_weather(server: &MockServer, lat: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", lat))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_geocode(server: &MockServer, lat: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/reverse.php"))
        .and(query_param("lat", lat))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_successful_pass_renders_and_reports_own_location() {
    let server = MockServer::start().await;
    mount_weather(&server, "51.5074", weather_body()).await;
    mount_geocode(
        &server,
        "51.5074",
        serde_json::json!({
            "address": { "city": "London", "state": "England", "country": "United Kingdom" }
        }),
    )
    .await;

    let locator = FixedLocator(Coordinates::new(51.5074, -0.1278));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget.run().await;

    assert_eq!(widget.state(), AcquisitionState::Succeeded);
    let surface = widget.surface();
    assert_eq!(surface.statuses.first().map(String::as_str), Some("Locating..."));
    assert!(surface
        .statuses
        .contains(&"Your location is at London, England, United Kingdom".to_string()));
    assert!(surface.panel_visible);
    assert_eq!(surface.description, "clear sky");
    assert_eq!(
        surface.temperatures.last().cloned(),
        Some(("20  °C".into(), "25  °C".into(), "15  °C".into()))
    );
    assert_eq!(
        surface.icon_url,
        "https://openweathermap.org/img/wn/01d@2x.png"
    );
}

#[tokio::test]
async fn test_unit_toggle_rerenders_without_refetch() {
    let server = MockServer::start().await;
    // expect(1) on both mocks doubles as proof that toggling never re-fetches
    mount_weather(&server, "51.5074", weather_body()).await;
    mount_geocode(
        &server,
        "51.5074",
        serde_json::json!({
            "address": { "city": "London", "state": "England", "country": "United Kingdom" }
        }),
    )
    .await;

    let locator = FixedLocator(Coordinates::new(51.5074, -0.1278));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget.run().await;

    widget.set_unit(TemperatureUnit::Fahrenheit);
    assert_eq!(
        widget.surface().temperatures.last().cloned(),
        Some(("68  °F".into(), "77  °F".into(), "59  °F".into()))
    );

    widget.set_unit(TemperatureUnit::Celsius);
    assert_eq!(
        widget.surface().temperatures.last().cloned(),
        Some(("20  °C".into(), "25  °C".into(), "15  °C".into()))
    );

    server.verify().await;
}

#[tokio::test]
async fn test_unit_toggle_before_fetch_is_a_noop() {
    let server = MockServer::start().await;
    let locator = FixedLocator(Coordinates::new(51.5074, -0.1278));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget.set_unit(TemperatureUnit::Fahrenheit);
    assert!(widget.surface().temperatures.is_empty());
    assert!(!widget.surface().panel_visible);
}

#[tokio::test]
async fn test_location_failure_falls_back_to_default_coordinates() {
    let server = MockServer::start().await;
    // The fallback must hit the DEFAULT coordinates, exactly once each.
    mount_weather(&server, "28.6139", weather_body()).await;
    mount_geocode(
        &server,
        "28.6139",
        serde_json::json!({
            "address": { "city": "Delhi", "state": "Delhi", "country": "India" }
        }),
    )
    .await;

    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        FailingLocator,
    )
    .unwrap()
    .with_fallback_delay(Duration::from_millis(25));

    widget.run().await;

    assert_eq!(widget.state(), AcquisitionState::Failed);
    let statuses = &widget.surface().statuses;
    assert_eq!(statuses[0], "Locating...");
    assert_eq!(statuses[1], "Unable to retrieve your location...");
    assert_eq!(statuses[2], "Showing results for Delhi, Delhi, India");
    assert!(widget.surface().panel_visible);

    server.verify().await;
}

#[tokio::test]
async fn test_unavailable_capability_alerts_and_uses_defaults() {
    let server = MockServer::start().await;
    mount_weather(&server, "28.6139", weather_body()).await;
    mount_geocode(
        &server,
        "28.6139",
        serde_json::json!({
            "address": { "city": "Delhi", "state": "Delhi", "country": "India" }
        }),
    )
    .await;

    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        UnavailableLocator,
    )
    .unwrap();

    widget.run().await;

    let surface = widget.surface();
    assert_eq!(surface.alerts.len(), 1);
    assert!(!surface.statuses.iter().any(|s| s == "Locating..."));
    assert!(surface
        .statuses
        .contains(&"Showing results for Delhi, Delhi, India".to_string()));
    assert!(surface.panel_visible);

    server.verify().await;
}

#[tokio::test]
async fn test_weather_fetch_failure_leaves_panel_hidden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_geocode(
        &server,
        "51.5074",
        serde_json::json!({
            "address": { "city": "London", "state": "England", "country": "United Kingdom" }
        }),
    )
    .await;

    let locator = FixedLocator(Coordinates::new(51.5074, -0.1278));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget.run().await;

    // Geocoding still lands; the data panel stays in its prior state.
    let surface = widget.surface();
    assert!(surface
        .statuses
        .contains(&"Your location is at London, England, United Kingdom".to_string()));
    assert!(!surface.panel_visible);
    assert!(surface.temperatures.is_empty());
}

#[tokio::test]
async fn test_show_weather_renders_celsius_and_retains_conditions() {
    let server = MockServer::start().await;
    mount_weather(&server, "12.9716", weather_body()).await;

    let locator = FixedLocator(Coordinates::new(12.9716, 77.5946));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget
        .show_weather(Coordinates::new(12.9716, 77.5946))
        .await
        .unwrap();

    assert!(widget.surface().panel_visible);
    assert_eq!(
        widget.surface().temperatures.last().cloned(),
        Some(("20  °C".into(), "25  °C".into(), "15  °C".into()))
    );

    // The retained bundle feeds the toggle without another request.
    widget.set_unit(TemperatureUnit::Fahrenheit);
    assert_eq!(
        widget.surface().temperatures.last().cloned(),
        Some(("68  °F".into(), "77  °F".into(), "59  °F".into()))
    );

    server.verify().await;
}

#[tokio::test]
async fn test_show_address_writes_status_line() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        "12.9716",
        serde_json::json!({
            "address": { "road": "MG Road", "state": "Karnataka", "country": "India" }
        }),
    )
    .await;

    let locator = FixedLocator(Coordinates::new(12.9716, 77.5946));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget
        .show_address(Coordinates::new(12.9716, 77.5946), false)
        .await
        .unwrap();

    assert_eq!(
        widget.surface().statuses.last().map(String::as_str),
        Some("Showing results for MG Road, Karnataka, India")
    );

    server.verify().await;
}

#[tokio::test]
async fn test_implausible_coordinates_leave_ui_at_locating() {
    let server = MockServer::start().await;

    let locator = FixedLocator(Coordinates::new(0.0, 0.0));
    let mut widget = WeatherWidget::new(
        &test_config(&server.uri()),
        RecordingSurface::default(),
        locator,
    )
    .unwrap();

    widget.run().await;

    assert_eq!(widget.state(), AcquisitionState::Failed);
    assert_eq!(widget.surface().statuses.last().map(String::as_str), Some("Locating..."));
    assert!(!widget.surface().panel_visible);
}
