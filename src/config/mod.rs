//! Configuration module for `sap-chart`

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
    /// Directory for plan JSON files
    #[serde(default)]
    pub plans_dir: String,
    /// Directory for rendered chart output
    #[serde(default)]
    pub charts_dir: String,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Default output format (svg or png)
    #[serde(default)]
    pub format: String,
    /// Pixels per layout unit
    #[serde(default)]
    pub scale: f32,
    /// Font stack used for all chart text
    #[serde(default)]
    pub font_family: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Chart rendering settings
    #[serde(default)]
    pub chart: ChartConfig,
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
    /// Override chart output directory
    pub charts_dir: Option<String>,
}

impl Config {
    /// Get the `$SAPCHART` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/sapchart`
    /// - macOS: `~/Library/Application Support/sapchart`
    /// - Windows: `%APPDATA%\sapchart`
    #[must_use]
    pub fn get_sapchart_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sapchart")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that fields added in newer versions
    /// pick up their default values. Only fields that are empty (or zero, for
    /// `scale`) in the current config and non-empty in defaults are updated.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        // Merge logging fields - only if they're empty (use defaults for empty values)
        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // Merge paths fields
        if self.paths.plans_dir.is_empty() && !defaults.paths.plans_dir.is_empty() {
            self.paths.plans_dir.clone_from(&defaults.paths.plans_dir);
            changed = true;
        }
        if self.paths.charts_dir.is_empty() && !defaults.paths.charts_dir.is_empty() {
            self.paths.charts_dir.clone_from(&defaults.paths.charts_dir);
            changed = true;
        }

        // Merge chart fields
        if self.chart.format.is_empty() && !defaults.chart.format.is_empty() {
            self.chart.format.clone_from(&defaults.chart.format);
            changed = true;
        }
        if self.chart.scale == 0.0 && defaults.chart.scale != 0.0 {
            self.chart.scale = defaults.chart.scale;
            changed = true;
        }
        if self.chart.font_family.is_empty() && !defaults.chart.font_family.is_empty() {
            self.chart
                .font_family
                .clone_from(&defaults.chart.font_family);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without touching the persistent configuration file. Only non-`None`
    /// values replace config values.
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
        if let Some(charts_dir) = &overrides.charts_dir {
            self.paths.charts_dir.clone_from(charts_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_sapchart_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$SAPCHART` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$SAPCHART") {
            let sapchart_dir = Self::get_sapchart_dir();
            value.replace("$SAPCHART", sapchart_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.plans_dir = Self::expand_variables(&config.paths.plans_dir);
        config.paths.charts_dir = Self::expand_variables(&config.paths.charts_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
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
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "plans_dir" => Some(self.paths.plans_dir.clone()),
            "charts_dir" => Some(self.paths.charts_dir.clone()),
            "format" => Some(self.chart.format.clone()),
            "scale" => Some(self.chart.scale.to_string()),
            "font_family" => Some(self.chart.font_family.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "plans_dir" => self.paths.plans_dir = value.to_string(),
            "charts_dir" => self.paths.charts_dir = value.to_string(),
            "format" => self.chart.format = value.to_string(),
            "scale" => {
                self.chart.scale = value
                    .parse::<f32>()
                    .map_err(|_| format!("Invalid number for 'scale': '{value}'"))?;
            }
            "font_family" => self.chart.font_family = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "plans_dir" => self.paths.plans_dir.clone_from(&defaults.paths.plans_dir),
            "charts_dir" => self.paths.charts_dir.clone_from(&defaults.paths.charts_dir),
            "format" => self.chart.format.clone_from(&defaults.chart.format),
            "scale" => self.chart.scale = defaults.chart.scale,
            "font_family" => self
                .chart
                .font_family
                .clone_from(&defaults.chart.font_family),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  plans_dir = \"{}\"", self.paths.plans_dir)?;
        writeln!(f, "  charts_dir = \"{}\"", self.paths.charts_dir)?;

        writeln!(f, "\n[chart]")?;
        writeln!(f, "  format = \"{}\"", self.chart.format)?;
        writeln!(f, "  scale = {}", self.chart.scale)?;
        writeln!(f, "  font_family = \"{}\"", self.chart.font_family)?;

        Ok(())
    }
}
