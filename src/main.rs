use anyhow::Result;
use stratus_core::{Config, TemperatureUnit};
use stratus_weather::IpLocator;
use stratus_widget::error_mapping::{map_location_error, map_weather_error};
use stratus_widget::{TerminalSurface, WeatherWidget};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core (tracing)
    stratus_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Stratus widget started");

    let locator = IpLocator::new(&config.location.locator_base_url).map_err(map_location_error)?;
    let surface = TerminalSurface::new();
    let mut widget = WeatherWidget::new(&config, surface, locator).map_err(map_weather_error)?;

    // One acquisition pass per run. The widget always comes up in Celsius;
    // a configured Fahrenheit preference is applied on top of the fetched data.
    widget.run().await;

    if config.ui.temperature_unit == TemperatureUnit::Fahrenheit {
        widget.set_unit(TemperatureUnit::Fahrenheit);
    }

    Ok(())
}
