//! Interactive testing session: name once, then single tests, batch
//! loads, and exports against one in-memory result log. The log lives
//! exactly as long as this command runs.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use batch_intake::{run_batch, Table};
use kinesio_core::{Config, Session};
use reporting::{json, report, spreadsheet, ReportOptions, SessionReport};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::config::load_effective(config_path)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = Session::new();
    println!("Muscle testing session {}", session.meta().session_id);

    while !session.subject().is_set() {
        let Some(name) = prompt(&mut input, "Enter your full name: ")? else {
            return Ok(());
        };
        if let Err(err) = session.set_subject(&name) {
            println!("{err}");
        }
    }
    println!("Welcome, {}", session.subject().name().unwrap_or_default());
    print_help();

    loop {
        let Some(line) = prompt(&mut input, "> ")? else {
            break;
        };
        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        if matches!(command, "quit" | "exit") {
            break;
        }
        let result = match command {
            "" => Ok(()),
            "help" => {
                print_help();
                Ok(())
            }
            "test" => run_test(&mut input, &mut session),
            "batch" => run_batch_interactive(&mut input, &mut session, &config),
            "list" => {
                list(&session);
                Ok(())
            }
            "summary" => {
                println!("{}", SessionReport::from_session(&session).human_summary());
                Ok(())
            }
            "export" => export_csv(&session, argument),
            "report" => export_report(&session, &config, argument),
            "json" => export_json(&session, argument),
            other => {
                println!("Unknown command: {other} (try help)");
                Ok(())
            }
        };
        // Failed evaluations and exports leave the session usable.
        if let Err(err) = result {
            println!("{err}");
        }
    }

    println!("{}", SessionReport::from_session(&session).human_summary());
    println!("Session ended; the result log is discarded.");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  test             score a single item");
    println!("  batch            score every item row of a CSV file");
    println!("  list             show all results so far");
    println!("  summary          show session totals");
    println!("  export <path>    write the results as a spreadsheet (CSV)");
    println!("  report <path>    write the printable report");
    println!("  json <path>      write the structured session report");
    println!("  quit             end the session");
}

fn run_test(input: &mut impl BufRead, session: &mut Session) -> Result<()> {
    let Some(intention) = prompt(input, "What is your inquiry/intention? ")? else {
        return Ok(());
    };
    let Some(item) = prompt(input, "What item or idea do you want to test? ")? else {
        return Ok(());
    };
    let record = session.evaluate(&intention, &item)?;
    println!("Score: {} - {}", record.score, record.interpretation.label());
    println!("Hash: {}", record.digest);
    Ok(())
}

fn run_batch_interactive(
    input: &mut impl BufRead,
    session: &mut Session,
    config: &Config,
) -> Result<()> {
    let Some(path) = prompt(input, "Path to CSV file with items: ")? else {
        return Ok(());
    };
    let Some(intention) = prompt(input, "What is your inquiry/intention? ")? else {
        return Ok(());
    };
    let Some(timing) = prompt(input, "Optional timing note: ")? else {
        return Ok(());
    };
    let timing = if timing.is_empty() {
        config.session.default_timing.clone()
    } else {
        timing
    };

    let path = path.trim();
    let contents =
        fs::read_to_string(path).with_context(|| format!("read item table {path}"))?;
    let table = Table::parse(&contents)?;
    let records = run_batch(session, &table, &intention, &timing)?;
    println!("Batch testing completed: {} item(s) scored.", records.len());
    Ok(())
}

fn list(session: &Session) {
    if session.log().is_empty() {
        println!("No results yet.");
        return;
    }
    for (index, record) in session.log().records().iter().enumerate() {
        println!(
            "{:>3}. {:>2}  {:<28} {}",
            index + 1,
            record.score,
            record.interpretation.label(),
            record.item
        );
    }
}

fn export_csv(session: &Session, argument: &str) -> Result<()> {
    if argument.is_empty() {
        println!("Usage: export <path>");
        return Ok(());
    }
    fs::write(argument, spreadsheet::render_csv(session.log().records()))
        .with_context(|| format!("write spreadsheet {argument}"))?;
    println!("Spreadsheet written to {argument}");
    Ok(())
}

fn export_report(session: &Session, config: &Config, argument: &str) -> Result<()> {
    if argument.is_empty() {
        println!("Usage: report <path>");
        return Ok(());
    }
    super::batch::warn_substitutions(session.log().records());
    let options = ReportOptions::from_config(&config.report);
    let session_report = SessionReport::from_session(session);
    fs::write(argument, report::render_report(&session_report, &options))
        .with_context(|| format!("write report {argument}"))?;
    println!("Report written to {argument}");
    Ok(())
}

fn export_json(session: &Session, argument: &str) -> Result<()> {
    if argument.is_empty() {
        println!("Usage: json <path>");
        return Ok(());
    }
    let session_report = SessionReport::from_session(session);
    fs::write(argument, json::render_json(&session_report))
        .with_context(|| format!("write JSON report {argument}"))?;
    println!("JSON report written to {argument}");
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
