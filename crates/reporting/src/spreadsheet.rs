//! Spreadsheet export: one row per result, in log order.

use kinesio_core::ResultRecord;

/// Column order is a fixed contract shared with the batch intake
/// dialect; downstream sheets key on these exact names.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Intention",
    "Item",
    "Timing",
    "Score",
    "Interpretation",
    "Hash",
];

/// Renders the records as UTF-8 comma-separated rows under the fixed
/// header. Fields containing a comma, quote, or line break are quoted.
pub fn render_csv(records: &[ResultRecord]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for record in records {
        let score = record.score.to_string();
        let fields = [
            record.subject.as_str(),
            record.intention.as_str(),
            record.item.as_str(),
            record.timing.as_str(),
            score.as_str(),
            record.interpretation.label(),
            record.digest.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|field| escape(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
