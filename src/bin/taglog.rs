//! One-shot command-line logger: emits a single line through the library
//! pipeline so scripts share the exact format and sink behavior of embedded
//! users.
//!
//! Usage:
//!   taglog "Service started"
//!   taglog -l warning -t BACKUP "Snapshot skipped"
//!   taglog -l error -f today.log --no-console "Disk full"

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use taglog::{ConfigFile, Level, SharedConfig};

#[derive(Parser)]
#[command(name = "taglog", version, about = "Emit one tagged log line")]
struct Cli {
    /// Level name (debug, information, warning, error)
    #[arg(short, long, default_value = "information")]
    level: String,

    /// Tag shown in the emitted line
    #[arg(short, long, default_value = "cli")]
    tag: String,

    /// Append the line to this file in addition to the console
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Suppress console output
    #[arg(long)]
    no_console: bool,

    /// Read settings from this config file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Message text
    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.level.parse::<Level>() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("taglog: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Config file first, command-line flags on top of it
    let file_config = match cli.config.as_deref() {
        Some(path) => ConfigFile::load_from(path),
        None => ConfigFile::load(),
    };
    let file_config = match file_config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("taglog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = SharedConfig::new();
    if let Err(e) = file_config.apply(&config) {
        eprintln!("taglog: {e}");
        return ExitCode::FAILURE;
    }

    if cli.no_console {
        config.set_console_enabled(false);
    }
    if let Some(path) = &cli.file {
        config.set_file_enabled(true);
        if let Err(e) = config.set_file_path(&path.to_string_lossy()) {
            eprintln!("taglog: {e}");
            return ExitCode::FAILURE;
        }
    }

    config.logger(&cli.tag).log(level, &cli.message.join(" "));
    ExitCode::SUCCESS
}
