//! Widget layer for Stratus
//!
//! Pure view-model computation (temperatures and unit to display strings),
//! a pluggable render surface, and the controller that wires location
//! acquisition to the weather and geocoding clients.

pub mod controller;
pub mod error_mapping;
pub mod surface;
pub mod units;
pub mod view;

pub use controller::{AcquisitionState, WeatherWidget};
pub use surface::{render, Surface, TerminalSurface};
pub use units::to_fahrenheit;
pub use view::{status_line, WeatherView};
