//! Printable report export: paginated plain text, Latin-1 encoded.
//!
//! Each record prints as `Key: Value` lines in a fixed field order with
//! a blank line between records. Pages are separated by form feeds and
//! carry a `Page N of M` footer.

use time::format_description::well_known::Rfc3339;

use kinesio_core::config::ReportConfig;
use kinesio_core::{CoreError, ResultRecord};

use crate::{latin1, SessionReport};

pub const LINE_WIDTH: usize = 72;

/// Footer needs a blank line plus the page number.
const FOOTER_LINES: usize = 2;
const MIN_PAGE_LINES: usize = 10;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub page_lines: usize,
    pub substitute: u8,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Muscle Testing Report".to_string(),
            page_lines: 48,
            substitute: latin1::SUBSTITUTE,
        }
    }
}

impl ReportOptions {
    pub fn from_config(config: &ReportConfig) -> Self {
        let substitute = if u32::from(config.substitute_char) <= 0xFF {
            config.substitute_char as u8
        } else {
            latin1::SUBSTITUTE
        };
        Self {
            title: config.title.clone(),
            page_lines: config.page_lines.max(MIN_PAGE_LINES),
            substitute,
        }
    }
}

/// Renders the session log as a paginated Latin-1 report.
pub fn render_report(report: &SessionReport, options: &ReportOptions) -> Vec<u8> {
    let started = report
        .meta
        .started_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let mut lines: Vec<String> = Vec::new();
    lines.push(center(&options.title));
    lines.push(format!("Subject: {}", report.subject));
    lines.push(format!(
        "Session {} started {}",
        report.meta.session_id, started
    ));
    lines.push(String::new());

    for record in &report.records {
        lines.push(format!("Name: {}", record.subject));
        lines.push(format!("Intention: {}", record.intention));
        lines.push(format!("Item: {}", record.item));
        lines.push(format!("Timing: {}", record.timing));
        lines.push(format!("Score: {}", record.score));
        lines.push(format!("Interpretation: {}", record.interpretation.label()));
        lines.push(format!("Hash: {}", record.digest));
        lines.push(String::new());
    }

    let body_lines = options.page_lines.saturating_sub(FOOTER_LINES).max(1);
    let total_pages = lines.len().div_ceil(body_lines);
    let mut pages = Vec::with_capacity(total_pages);
    for (index, chunk) in lines.chunks(body_lines).enumerate() {
        let mut page = chunk.join("\n");
        page.push('\n');
        page.push('\n');
        page.push_str(&center(&format!("Page {} of {}", index + 1, total_pages)));
        pages.push(page);
    }

    let text = pages.join("\u{0c}\n");
    latin1::encode_lossy(&text, options.substitute)
}

/// Scans the user-supplied fields of the records for characters the
/// report encoding will substitute. The interpretation labels are not
/// scanned: their dash always substitutes and that is expected.
pub fn unencodable_fields(records: &[ResultRecord]) -> Vec<(&'static str, CoreError)> {
    let mut findings = Vec::new();
    for record in records {
        let fields = [
            ("Name", record.subject.as_str()),
            ("Intention", record.intention.as_str()),
            ("Item", record.item.as_str()),
            ("Timing", record.timing.as_str()),
        ];
        for (key, value) in fields {
            if let Err(err) = latin1::ensure_encodable(value) {
                findings.push((key, err));
            }
        }
    }
    findings
}

fn center(text: &str) -> String {
    let width = text.chars().count();
    if width >= LINE_WIDTH {
        return text.to_string();
    }
    let pad = (LINE_WIDTH - width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinesio_core::Session;

    fn sample_report() -> SessionReport {
        let mut session = Session::new();
        session.set_subject("Alice").unwrap();
        session.evaluate("feel energetic", "banana").unwrap();
        session
            .evaluate_timed("feel energetic", "egg", "at breakfast")
            .unwrap();
        SessionReport::from_session(&session)
    }

    fn render_to_text(report: &SessionReport, options: &ReportOptions) -> String {
        // Test inputs are ASCII after substitution, so UTF-8 reads back.
        String::from_utf8(render_report(report, options)).unwrap()
    }

    #[test]
    fn fields_print_in_fixed_order() {
        let text = render_to_text(&sample_report(), &ReportOptions::default());
        let keys: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_once(": ").map(|(key, _)| key.trim()))
            .collect();
        let record_keys = [
            "Name",
            "Intention",
            "Item",
            "Timing",
            "Score",
            "Interpretation",
            "Hash",
        ];
        let start = keys.iter().position(|key| *key == "Name").unwrap();
        assert_eq!(&keys[start..start + 7], &record_keys);
        assert_eq!(&keys[start + 7..start + 14], &record_keys);
    }

    #[test]
    fn blank_line_between_records() {
        let text = render_to_text(&sample_report(), &ReportOptions::default());
        let after_first_hash = text
            .split("Hash: ")
            .nth(1)
            .and_then(|rest| rest.split_once('\n'))
            .map(|(_, rest)| rest)
            .unwrap();
        assert!(after_first_hash.starts_with('\n'));
    }

    #[test]
    fn label_dash_is_substituted() {
        let text = render_to_text(&sample_report(), &ReportOptions::default());
        assert!(text.contains("Interpretation: Strong ? Beneficial"));
        assert!(!text.contains('–'));
    }

    #[test]
    fn pagination_adds_form_feeds_and_footers() {
        let options = ReportOptions {
            page_lines: MIN_PAGE_LINES,
            ..ReportOptions::default()
        };
        let text = render_to_text(&sample_report(), &options);
        // 4 header lines + 2 records of 8 lines on 8-line bodies -> 3 pages.
        let pages: Vec<&str> = text.split('\u{0c}').collect();
        assert_eq!(pages.len(), 3);
        for (index, page) in pages.iter().enumerate() {
            assert!(page.trim_end().ends_with(&format!("Page {} of 3", index + 1)));
        }
    }

    #[test]
    fn unencodable_fields_flags_user_text_only() {
        let mut session = Session::new();
        session.set_subject("Alice").unwrap();
        session.evaluate("feel – energetic", "水").unwrap();
        let report = SessionReport::from_session(&session);
        let findings = unencodable_fields(&report.records);
        let keys: Vec<&str> = findings.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["Intention", "Item"]);
        assert!(matches!(findings[0].1, CoreError::Encoding('–')));
    }

    #[test]
    fn options_from_config_guard_the_substitute() {
        let mut config = kinesio_core::Config::default_config().report;
        config.substitute_char = '水';
        let options = ReportOptions::from_config(&config);
        assert_eq!(options.substitute, latin1::SUBSTITUTE);
        config.substitute_char = '#';
        assert_eq!(ReportOptions::from_config(&config).substitute, b'#');
    }
}
