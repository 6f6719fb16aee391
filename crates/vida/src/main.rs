use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vida_config::{get_config_path, Config};

mod prompt;
mod session;

use session::Session;

const MAIN_HELP: &str = r#"Vida+ is the front-desk patient registry of the clinic. It runs an
interactive menu to register patients (name, age, phone), show statistics,
search by name and list everyone registered so far.

Records are kept in memory only and are discarded when the program exits."#;

#[derive(Parser)]
#[command(name = "vida")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Read configuration from this file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Log filter, e.g. 'debug' (overrides RUST_LOG)")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print config file location and contents.")]
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(get_config_path);

    match cli.command {
        Some(Commands::Config) => handle_config(&config_path),
        None => {
            let config = Config::load_from(&config_path)?;
            init_logging(cli.log_level.as_deref(), &config);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), config.display);
            session.run()?;
            Ok(())
        }
    }
}

fn init_logging(flag: Option<&str>, config: &Config) {
    let filter = match flag {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn handle_config(config_path: &Path) -> Result<()> {
    println!("{}", describe_config(config_path)?);
    Ok(())
}

fn describe_config(config_path: &Path) -> Result<String> {
    let mut lines = vec![format!("Config file: {}", config_path.display())];

    if !config_path.exists() {
        lines.push("Status: not found, using defaults".to_string());
        return Ok(lines.join("\n"));
    }

    let content = std::fs::read_to_string(config_path)?;
    match Config::load_from(config_path) {
        Ok(config) => lines.push(format!(
            "Status: valid (clinic \"{}\", rule width {}, log level \"{}\")",
            config.display.clinic_name, config.display.rule_width, config.logging.level
        )),
        Err(e) => lines.push(format!("Status: invalid, {}", e)),
    }
    lines.push(String::new());
    lines.push(content.trim_end().to_string());
    Ok(lines.join("\n"))
}
