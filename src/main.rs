// src/main.rs

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod commands;
mod config;
mod convert;
mod errors;
mod input;
mod types;
mod utils;

use config::AppConfig;
use types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = config::APP_NAME, version, about = "Convert an Earth time of day to Roketin Planet time")]
struct Cli {
    /// Output rendering for the conversion result
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read one "H M S" line from stdin and convert it (the default)
    Convert,
    /// Convert the current local wall-clock time instead of reading stdin
    Now,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let app_config = AppConfig {
        output_format: cli.format,
    };

    let result = match cli.command.unwrap_or(Command::Convert) {
        Command::Convert => commands::convert::execute(&app_config),
        Command::Now => commands::now::execute(&app_config),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
