//! Config command handler

use crate::args::ConfigSubcommand;
use gangnam_apt::config::Config;
use logger::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole configuration when no key is given
fn handle_config_get(config: &Config, key: Option<&str>) {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        println!("# {}", Config::get_config_file_path().display());
        print!("{config}");
        return;
    };

    match config.get(key) {
        Some(value) => println!("{value}"),
        None => eprintln!("Unknown config key: '{key}'"),
    }
}

/// Save the config or exit with an error
fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Validate and store a value
fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    persist(config);

    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    info!("Config {key} set to {stored}");
    println!("✓ Set {key} = {stored}");
}

/// Restore one value from the compiled-in defaults
fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    persist(config);

    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation
fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
