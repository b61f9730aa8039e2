//! Command-line interface entry point for `gangnamapt`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gangnam_apt::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once; CLI overrides apply to this run only
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag > config logging.level > warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Calc { input, animate } => commands::calc::run(&input, animate, &config),
        Command::Export {
            input,
            format,
            output,
        } => commands::export::run(&input, format, output.as_deref(), &config),
        Command::Share { input } => commands::share::run(&input, &config),
        Command::Regions => commands::regions::run(),
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}
