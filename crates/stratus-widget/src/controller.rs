//! Widget controller: one location-resolution pass driving the weather
//! and geocoding clients, plus the unit toggle over retained data.

use std::time::Duration;

use stratus_core::{Config, TemperatureUnit};
use stratus_weather::{
    Coordinates, CurrentConditions, LocationSource, ReverseGeocoder, WeatherError, WeatherProvider,
};

use crate::surface::{render, Surface};
use crate::view::{status_line, WeatherView};

const STATUS_LOCATING: &str = "Locating...";
const STATUS_LOCATION_FAILED: &str = "Unable to retrieve your location...";
const ALERT_NO_CAPABILITY: &str = "Location detection is not supported on this system";

/// Where a location-resolution pass currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionState {
    Idle,
    Locating,
    Succeeded,
    Failed,
}

/// The widget: owns the clients, the surface, the unit selector and the
/// last fetched conditions (so a unit toggle never re-fetches).
pub struct WeatherWidget<S: Surface, L: LocationSource> {
    provider: WeatherProvider,
    geocoder: ReverseGeocoder,
    locator: L,
    surface: S,
    defaults: Coordinates,
    fallback_delay: Duration,
    unit: TemperatureUnit,
    conditions: Option<CurrentConditions>,
    state: AcquisitionState,
}

impl<S: Surface, L: LocationSource> WeatherWidget<S, L> {
    pub fn new(config: &Config, surface: S, locator: L) -> Result<Self, WeatherError> {
        let provider = WeatherProvider::new(config.weather.api_key.clone())?
            .with_base_url(config.weather.base_url.clone());
        let geocoder = ReverseGeocoder::new(config.geocoding.api_key.clone())?
            .with_base_url(config.geocoding.base_url.clone());

        Ok(Self {
            provider,
            geocoder,
            locator,
            surface,
            defaults: Coordinates::new(
                config.location.default_latitude,
                config.location.default_longitude,
            ),
            fallback_delay: Duration::from_secs(config.location.fallback_delay_secs),
            unit: TemperatureUnit::Celsius,
            conditions: None,
            state: AcquisitionState::Idle,
        })
    }

    /// Override the delay before the default-coordinate fallback fires.
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    pub fn state(&self) -> AcquisitionState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// One full acquisition pass.
    ///
    /// Capability absent: alert, then fetch against the default
    /// coordinates. Available: "Locating...", then on success fetch with
    /// the resolved coordinates, on failure set the failure status and,
    /// after the configured delay, fetch against the DEFAULT coordinates.
    /// The fallback deliberately does not re-attempt the failed lookup.
    pub async fn run(&mut self) {
        if !self.locator.is_available() {
            self.surface.alert(ALERT_NO_CAPABILITY);
            let defaults = self.defaults;
            self.fetch_both(defaults, false).await;
            return;
        }

        self.state = AcquisitionState::Locating;
        self.surface.set_status(STATUS_LOCATING);

        match self.locator.locate().await {
            Ok(coords) if coords.is_plausible() => {
                self.state = AcquisitionState::Succeeded;
                self.fetch_both(coords, true).await;
            }
            Ok(coords) => {
                // Zero or out-of-range components; leave the UI as-is.
                self.state = AcquisitionState::Failed;
                tracing::warn!(
                    lat = coords.latitude,
                    lon = coords.longitude,
                    "Discarding implausible coordinates"
                );
            }
            Err(e) => {
                self.state = AcquisitionState::Failed;
                tracing::warn!(error = %e, "Location lookup failed, falling back to defaults");
                self.surface.set_status(STATUS_LOCATION_FAILED);
                tokio::time::sleep(self.fallback_delay).await;
                let defaults = self.defaults;
                self.fetch_both(defaults, false).await;
            }
        }
    }

    /// Fetch weather for the given coordinates, render in Celsius and
    /// retain the conditions for later unit toggles.
    pub async fn show_weather(&mut self, coords: Coordinates) -> Result<(), WeatherError> {
        let conditions = self.provider.fetch(&coords).await?;
        self.apply_conditions(conditions);
        Ok(())
    }

    /// Fetch the address for the given coordinates and write the status
    /// line.
    pub async fn show_address(
        &mut self,
        coords: Coordinates,
        own_location: bool,
    ) -> Result<(), WeatherError> {
        let address = self.geocoder.fetch(&coords).await?;
        self.surface.set_status(&status_line(&address, own_location));
        Ok(())
    }

    /// Re-render the retained conditions in the given unit, without
    /// re-fetching. Before any successful fetch this is a no-op.
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
        match &self.conditions {
            Some(conditions) => {
                let view = WeatherView::compose(&conditions.temps, &conditions.weather, unit);
                render(&mut self.surface, &view);
            }
            None => {
                tracing::debug!("No fetched conditions yet, unit applies to the next render");
            }
        }
    }

    /// Run both fetches concurrently; neither outcome gates the other.
    /// Failures are logged and leave the surface in its prior state.
    async fn fetch_both(&mut self, coords: Coordinates, own_location: bool) {
        let (address, conditions) = tokio::join!(
            self.geocoder.fetch(&coords),
            self.provider.fetch(&coords)
        );

        match address {
            Ok(address) => self
                .surface
                .set_status(&status_line(&address, own_location)),
            Err(e) => tracing::error!(error = %e, "Reverse geocoding failed"),
        }

        match conditions {
            Ok(conditions) => self.apply_conditions(conditions),
            Err(e) => tracing::error!(error = %e, "Weather fetch failed"),
        }
    }

    fn apply_conditions(&mut self, conditions: CurrentConditions) {
        // Fresh data always renders in Celsius first.
        self.unit = TemperatureUnit::Celsius;
        let view = WeatherView::compose(&conditions.temps, &conditions.weather, self.unit);
        render(&mut self.surface, &view);
        self.conditions = Some(conditions);
    }
}
