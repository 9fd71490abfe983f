use crate::SessionReport;

/// Renders the structured session report. These types serialize
/// infallibly in practice; an empty object is the fallback.
pub fn render_json(report: &SessionReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
