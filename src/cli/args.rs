//! CLI argument definitions for `gangnamapt`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gangnam_apt::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Card output format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CardFormatArg {
    /// Self-contained HTML page
    Html,
    /// Markdown
    #[value(alias = "markdown")]
    Md,
    /// Plain text
    #[value(alias = "text")]
    Txt,
}

/// Inputs shared by every command that runs a calculation
#[derive(Debug, Clone, Default, Args)]
pub struct CalcArgs {
    /// Monthly take-home pay in 만원. Non-digits are ignored ("3,000" is 3000).
    #[arg(value_name = "INCOME")]
    pub income: Option<String>,

    /// Region identifier or name (gangnam, seocho, mayongseong, songpa, pangyo, local).
    /// Defaults to the configured region.
    #[arg(short, long, value_name = "REGION")]
    pub region: Option<String>,

    /// Share of income saved each month, 10-100 (%). Defaults to the configured rate.
    #[arg(short = 's', long = "rate", value_name = "PERCENT")]
    pub savings_rate: Option<u32>,

    /// Take the income from a share link (its `s` parameter) when INCOME is omitted
    #[arg(long, value_name = "URL")]
    pub from_link: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `region`, `savings_rate`, `origin`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate how long it takes to buy an apartment.
    ///
    /// Prints the result card and a share link that reproduces the calculation.
    Calc {
        #[command(flatten)]
        input: CalcArgs,

        /// Roll the duration up like the on-screen counter before printing the card
        #[arg(long)]
        animate: bool,
    },
    /// Save the result card to a file.
    ///
    /// Defaults to `강남아파트_계산결과.<ext>` in the configured exports directory.
    Export {
        #[command(flatten)]
        input: CalcArgs,

        /// Card format
        #[arg(short, long, value_enum, default_value_t = CardFormatArg::Html)]
        format: CardFormatArg,

        /// Output file path (optional; defaults to the exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Share the result.
    ///
    /// Uses the configured share command, else the clipboard command, else prints
    /// the link for manual copying.
    Share {
        #[command(flatten)]
        input: CalcArgs,
    },
    /// List regions, their reference prices, and the comparison items.
    Regions,
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gangnamapt",
    about = "내 월급으로 강남 아파트 사려면? - apartment affordability calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (this run only)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config share origin
    #[arg(long = "origin", value_name = "URL")]
    pub origin: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (`--out-dir`) take precedence over long-form flags
    /// (`--config-exports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            exports_dir: self
                .out_dir
                .as_ref()
                .or(self.config_exports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            origin: self.origin.clone(),
        }
    }
}
