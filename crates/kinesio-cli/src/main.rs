use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "kinesio",
    version,
    about = "Deterministic muscle testing with a session log and exports"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default config file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    /// Score a single item
    Score {
        #[arg(long)]
        name: String,
        #[arg(long)]
        intention: String,
        #[arg(long)]
        item: String,
        #[arg(long, default_value = "")]
        timing: String,
        #[arg(long)]
        json: bool,
    },
    /// Look up the interpretation band for a score
    Interpret { score: u8 },
    /// Score every item row of a CSV file
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        intention: String,
        #[arg(long, default_value = "")]
        timing: String,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Run an interactive testing session
    Session,
    Config {
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => init_config(path, force),
        Commands::Score {
            name,
            intention,
            item,
            timing,
            json,
        } => commands::score::execute(commands::score::ScoreInputs {
            name,
            intention,
            item,
            timing,
            json,
        }),
        Commands::Interpret { score } => commands::interpret::execute(score),
        Commands::Batch {
            input,
            name,
            intention,
            timing,
            csv,
            report,
            json,
        } => commands::batch::execute(commands::batch::BatchInputs {
            config_path: cli.config,
            input,
            name,
            intention,
            timing,
            csv,
            report,
            json,
        }),
        Commands::Session => commands::session::execute(cli.config),
        Commands::Config { print } => {
            if print {
                commands::config::print_effective(cli.config)
            } else {
                Ok(())
            }
        }
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = kinesio_core::config::ConfigPaths::resolve()?;
    let config_path = path.unwrap_or(paths.config_path);
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    let config = kinesio_core::config::Config::default_config();
    config.save(&config_path)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
