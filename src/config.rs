//! Configuration module for `gangnam-apt`

use crate::core::calculator::validate_savings_rate;
use crate::core::catalog::{default_region, find_region, region_ids, Region};
use crate::core::share::parse_origin;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$GANGNAM_APT";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported result cards
    #[serde(default)]
    pub exports_dir: String,
}

/// Share configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Site the share link points at
    #[serde(default)]
    pub origin: String,
    /// Native share command; receives the share text on stdin (empty = unavailable)
    #[serde(default)]
    pub command: String,
    /// Clipboard command; receives the share text on stdin (empty = unavailable)
    #[serde(default)]
    pub clipboard_command: String,
}

/// Calculator defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Region used when none is given on the command line
    #[serde(default)]
    pub region: String,
    /// Savings rate (percent) used when none is given on the command line
    #[serde(default)]
    pub savings_rate: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Share settings
    #[serde(default)]
    pub share: ShareConfig,
    /// Calculator defaults
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override exports directory
    pub exports_dir: Option<String>,
    /// Override share origin
    pub origin: Option<String>,
}

impl Config {
    /// Get the `$GANGNAM_APT` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gangnam-apt`
    /// - macOS: `~/Library/Application Support/gangnam-apt`
    /// - Windows: `%APPDATA%\gangnam-apt`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gangnam-apt")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fills fields that are empty (or zero, for the savings rate) from
    /// `defaults`, so that config files written by older versions pick up new
    /// settings without losing user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        fn fill(field: &mut String, default: &str) -> bool {
            if field.is_empty() && !default.is_empty() {
                default.clone_into(field);
                true
            } else {
                false
            }
        }

        let mut changed = false;
        changed |= fill(&mut self.logging.level, &defaults.logging.level);
        changed |= fill(&mut self.logging.file, &defaults.logging.file);
        changed |= fill(&mut self.paths.exports_dir, &defaults.paths.exports_dir);
        changed |= fill(&mut self.share.origin, &defaults.share.origin);
        changed |= fill(&mut self.calculator.region, &defaults.calculator.region);

        if self.calculator.savings_rate == 0 && defaults.calculator.savings_rate != 0 {
            self.calculator.savings_rate = defaults.calculator.savings_rate;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file is not
    /// touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
        if let Some(origin) = &overrides.origin {
            self.share.origin.clone_from(origin);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GANGNAM_APT` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, `false`, `0`).
    /// `$GANGNAM_APT` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```
    /// use gangnam_apt::config::Config;
    ///
    /// let config = Config::from_toml(r#"
    /// [calculator]
    /// region = "pangyo"
    /// savings_rate = 50
    /// "#).unwrap();
    /// assert_eq!(config.calculator.savings_rate, 50);
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves it back when anything was added
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(e) => {
                logger::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `exports_dir`, `origin`,
    /// `share_command`, `clipboard_command`, `region`, `savings_rate`.
    /// Dashed spellings (`exports-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            "origin" => Some(self.share.origin.clone()),
            "share_command" | "share-command" => Some(self.share.command.clone()),
            "clipboard_command" | "clipboard-command" => {
                Some(self.share.clipboard_command.clone())
            }
            "region" => Some(self.calculator.region.clone()),
            "savings_rate" | "savings-rate" => Some(self.calculator.savings_rate.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated: `level` must be a log level, `verbose` a boolean,
    /// `origin` an http(s) URL, `region` a known region (stored by identifier),
    /// and `savings_rate` a whole percentage between 10 and 100.
    ///
    /// This updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value.parse::<logger::Level>()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            "origin" => {
                parse_origin(value).map_err(|e| e.to_string())?;
                self.share.origin = value.to_string();
            }
            "share_command" | "share-command" => self.share.command = value.to_string(),
            "clipboard_command" | "clipboard-command" => {
                self.share.clipboard_command = value.to_string();
            }
            "region" => {
                let region = find_region(value).ok_or_else(|| {
                    format!(
                        "Unknown region: '{value}' (expected one of {})",
                        region_ids().join(", ")
                    )
                })?;
                self.calculator.region = region.id.to_string();
            }
            "savings_rate" | "savings-rate" => {
                let rate = value
                    .trim()
                    .trim_end_matches('%')
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid savings rate: '{value}'"))?;
                self.calculator.savings_rate =
                    validate_savings_rate(rate).map_err(|e| e.to_string())?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// This updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            "origin" => self.share.origin.clone_from(&defaults.share.origin),
            "share_command" | "share-command" => {
                self.share.command.clone_from(&defaults.share.command);
            }
            "clipboard_command" | "clipboard-command" => self
                .share
                .clipboard_command
                .clone_from(&defaults.share.clipboard_command),
            "region" => self
                .calculator
                .region
                .clone_from(&defaults.calculator.region),
            "savings_rate" | "savings-rate" => {
                self.calculator.savings_rate = defaults.calculator.savings_rate;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Configured default region, falling back to 강남 when the value is unknown
    #[must_use]
    pub fn region(&self) -> &'static Region {
        find_region(&self.calculator.region).unwrap_or_else(|| {
            if !self.calculator.region.is_empty() {
                logger::warn!(
                    "Unknown region '{}' in config, using {}",
                    self.calculator.region,
                    default_region().id
                );
            }
            default_region()
        })
    }

    /// Directory exported cards are written to
    #[must_use]
    pub fn exports_dir(&self) -> PathBuf {
        if self.paths.exports_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.paths.exports_dir)
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        writeln!(f, "\n[share]")?;
        writeln!(f, "  origin = \"{}\"", self.share.origin)?;
        writeln!(f, "  command = \"{}\"", self.share.command)?;
        writeln!(f, "  clipboard_command = \"{}\"", self.share.clipboard_command)?;

        writeln!(f, "\n[calculator]")?;
        writeln!(f, "  region = \"{}\"", self.calculator.region)?;
        writeln!(f, "  savings_rate = {}", self.calculator.savings_rate)?;

        Ok(())
    }
}
