use weather_lookup_core::{WeatherReport, WeatherView};

/// Renders the lookup lifecycle to the terminal.
///
/// Progress and errors go to stderr; the result card goes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView;

impl WeatherView for TerminalView {
    fn set_city(&self, city: &str) {
        eprintln!("Looking up weather for {city}...");
    }

    // A one-shot run has no spinner to toggle; the lookup notice covers it.
    fn set_loading(&self, _visible: bool) {}

    fn set_error(&self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("error: {message}");
        }
    }

    fn set_report(&self, report: Option<&WeatherReport>) {
        let Some(report) = report else { return };

        println!("{}, {}", report.city, report.country);
        println!("  {}", report.description);
        println!(
            "  Temperature: {}°C (feels like {}°C)",
            report.temperature_display(),
            report.feels_like_display()
        );
        println!("  Humidity:    {}%", report.humidity);
        println!("  Pressure:    {} hPa", report.pressure);
        println!("  Wind:        {} m/s", report.wind_speed_display());
        println!("  Cloud cover: {}%", report.cloud_cover);
        if let Some(url) = report.icon_url() {
            println!("  Icon:        {url}");
        }
    }
}
