use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use batch_intake::{run_batch, Table};
use kinesio_core::{ResultRecord, Session};
use reporting::{json, report, spreadsheet, ReportOptions, SessionReport};

#[derive(Debug)]
pub struct BatchInputs {
    pub config_path: Option<PathBuf>,
    pub input: PathBuf,
    pub name: String,
    pub intention: String,
    pub timing: String,
    pub csv: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

pub fn execute(inputs: BatchInputs) -> Result<()> {
    let config = super::config::load_effective(inputs.config_path)?;
    let contents = fs::read_to_string(&inputs.input)
        .with_context(|| format!("read item table {}", inputs.input.display()))?;
    let table = Table::parse(&contents)?;

    let mut session = Session::new();
    session.set_subject(&inputs.name)?;
    let timing = if inputs.timing.is_empty() {
        config.session.default_timing.clone()
    } else {
        inputs.timing
    };
    let records = run_batch(&mut session, &table, &inputs.intention, &timing)?;
    println!("Batch testing completed: {} item(s) scored.", records.len());

    let session_report = SessionReport::from_session(&session);
    let mut wrote_file = false;

    if let Some(path) = &inputs.csv {
        fs::write(path, spreadsheet::render_csv(session.log().records()))
            .with_context(|| format!("write spreadsheet {}", path.display()))?;
        println!("Spreadsheet written to {}", path.display());
        wrote_file = true;
    }
    if let Some(path) = &inputs.report {
        warn_substitutions(session.log().records());
        let options = ReportOptions::from_config(&config.report);
        fs::write(path, report::render_report(&session_report, &options))
            .with_context(|| format!("write report {}", path.display()))?;
        println!("Report written to {}", path.display());
        wrote_file = true;
    }
    if let Some(path) = &inputs.json {
        fs::write(path, json::render_json(&session_report))
            .with_context(|| format!("write JSON report {}", path.display()))?;
        println!("JSON report written to {}", path.display());
        wrote_file = true;
    }

    if !wrote_file {
        for record in session.log().records() {
            println!(
                "{:>3}  {:<28} {}",
                record.score,
                record.interpretation.label(),
                record.item
            );
        }
    }
    println!("{}", session_report.human_summary());
    Ok(())
}

pub(crate) fn warn_substitutions(records: &[ResultRecord]) {
    for (field, err) in report::unencodable_fields(records) {
        log::warn!("{field}: {err}; it will print substituted in the report");
    }
}
