use crate::model::WeatherReport;

/// View binding for the lookup lifecycle.
///
/// The controller drives these setters instead of touching any concrete UI,
/// so the same lifecycle renders to a terminal, a test recorder, or anything
/// else. `None` means "hide/clear that region".
pub trait WeatherView: Send + Sync {
    /// Echo of the trimmed city a submission was issued for.
    fn set_city(&self, city: &str);

    fn set_loading(&self, visible: bool);

    fn set_error(&self, message: Option<&str>);

    /// A report repaints the whole result region; a report without an icon
    /// code therefore renders without one, never with a stale icon.
    fn set_report(&self, report: Option<&WeatherReport>);
}
