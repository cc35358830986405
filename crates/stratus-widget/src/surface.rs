//! Render surfaces: the UI targets the widget writes into.
//!
//! A [`Surface`] is passed explicitly to the controller instead of being
//! a shared module-level binding, so the widget can be instantiated and
//! tested in isolation.

use crate::view::WeatherView;

/// The set of UI targets the widget mutates. Implementations decide
/// what "showing the panel" or "an alert" mean for their medium.
pub trait Surface {
    /// Write the location/status text.
    fn set_status(&mut self, text: &str);

    /// Make the data panel visible and drop any loading placeholder.
    /// Idempotent; called on every render.
    fn reveal_data_panel(&mut self);

    /// Write the weather description text.
    fn set_weather(&mut self, description: &str);

    /// Write the current/max/min temperature strings.
    fn set_temperatures(&mut self, current: &str, max: &str, min: &str);

    /// Point the icon at an image URL.
    fn set_icon(&mut self, url: &str);

    /// Interrupt the user with a message (capability problems only).
    fn alert(&mut self, message: &str);

    /// Called once all targets of a render pass have been written.
    fn flush(&mut self) {}
}

/// Apply a view to a surface. The first call reveals the data panel.
pub fn render<S: Surface>(surface: &mut S, view: &WeatherView) {
    surface.reveal_data_panel();
    surface.set_weather(&view.description);
    surface.set_temperatures(&view.current, &view.max, &view.min);
    surface.set_icon(&view.icon_url);
    surface.flush();
}

/// Plain-terminal surface: status lines as they arrive, the data panel
/// as a small block redrawn per render pass.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    panel_visible: bool,
    description: String,
    current: String,
    max: String,
    min: String,
    icon_url: String,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TerminalSurface {
    fn set_status(&mut self, text: &str) {
        println!("{text}");
    }

    fn reveal_data_panel(&mut self) {
        self.panel_visible = true;
    }

    fn set_weather(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn set_temperatures(&mut self, current: &str, max: &str, min: &str) {
        self.current = current.to_string();
        self.max = max.to_string();
        self.min = min.to_string();
    }

    fn set_icon(&mut self, url: &str) {
        self.icon_url = url.to_string();
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }

    fn flush(&mut self) {
        if !self.panel_visible {
            return;
        }
        println!();
        println!("  {}", self.description);
        println!("  now {}   high {}   low {}", self.current, self.max, self.min);
        println!("  icon: {}", self.icon_url);
        println!();
    }
}
