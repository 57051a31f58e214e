//! Configuration module for `GradeForecast`

use crate::core::forecast::ProjectionRange;
use crate::core::report::ChartTheme;
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

/// Variable expanded to the config directory in path values
const DIR_VARIABLE: &str = "$GRADE_FORECAST";

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
    /// Directory for chart output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Default averages for projection charts
    #[serde(default)]
    pub projection: ProjectionRange,
    /// Chart colours and font
    #[serde(default)]
    pub chart: ChartTheme,
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
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GRADE_FORECAST` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradeforecast`
    /// - macOS: `~/Library/Application Support/gradeforecast`
    /// - Windows: `%APPDATA%\gradeforecast`
    #[must_use]
    pub fn get_gradeforecast_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradeforecast")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; numeric sections already fall back to their serde defaults.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs: [(&mut String, &String); 8] = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (&mut self.chart.background, &defaults.chart.background),
            (&mut self.chart.grid_color, &defaults.chart.grid_color),
            (&mut self.chart.text_color, &defaults.chart.text_color),
            (&mut self.chart.line_color, &defaults.chart.line_color),
            (&mut self.chart.font_family, &defaults.chart.font_family),
        ];

        let mut changed = false;
        for (field, default) in pairs {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; nothing is written back to disk.
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
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gradeforecast_dir`](Self::get_gradeforecast_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradeforecast_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gradeforecast_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// `$GRADE_FORECAST` in path values is expanded to the config directory.
    /// Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults are
    /// compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file has missing fields filled from defaults (and is re-saved when
    /// that changes anything). On first run the defaults are written out. Any read or
    /// parse failure falls back to defaults.
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

        let Some(mut config) = fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
        else {
            return defaults;
        };

        if config.merge_defaults(&defaults) {
            let _ = config.save();
        }
        config
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config can't be serialized, the directory can't be
    /// created, or the file can't be written.
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
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`, `start`, `stop`,
    /// `step`, `background`, `grid_color`, `text_color`, `line_color`,
    /// `font_family`, `font_size`. Dashes may be used in place of underscores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "reports_dir" => self.paths.reports_dir.clone(),
            "start" => self.projection.start.to_string(),
            "stop" => self.projection.stop.to_string(),
            "step" => self.projection.step.to_string(),
            "background" => self.chart.background.clone(),
            "grid_color" => self.chart.grid_color.clone(),
            "text_color" => self.chart.text_color.clone(),
            "line_color" => self.chart.line_color.clone(),
            "font_family" => self.chart.font_family.clone(),
            "font_size" => self.chart.font_size.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value doesn't parse
    /// (e.g. "maybe" for `verbose`, "abc" for `step`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
            value
                .parse::<T>()
                .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))
        }

        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "start" => self.projection.start = number(key, value)?,
            "stop" => self.projection.stop = number(key, value)?,
            "step" => self.projection.step = number(key, value)?,
            "background" => self.chart.background = value.to_string(),
            "grid_color" => self.chart.grid_color = value.to_string(),
            "text_color" => self.chart.text_color = value.to_string(),
            "line_color" => self.chart.line_color = value.to_string(),
            "font_family" => self.chart.font_family = value.to_string(),
            "font_size" => self.chart.font_size = number(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" => self.paths.reports_dir.clone_from(&defaults.paths.reports_dir),
            "start" => self.projection.start = defaults.projection.start,
            "stop" => self.projection.stop = defaults.projection.stop,
            "step" => self.projection.step = defaults.projection.step,
            "background" => self.chart.background.clone_from(&defaults.chart.background),
            "grid_color" => self.chart.grid_color.clone_from(&defaults.chart.grid_color),
            "text_color" => self.chart.text_color.clone_from(&defaults.chart.text_color),
            "line_color" => self.chart.line_color.clone_from(&defaults.chart.line_color),
            "font_family" => self.chart.font_family.clone_from(&defaults.chart.font_family),
            "font_size" => self.chart.font_size = defaults.chart.font_size,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load) recreates
    /// it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but can't be deleted.
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
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[projection]")?;
        writeln!(f, "  start = {}", self.projection.start)?;
        writeln!(f, "  stop = {}", self.projection.stop)?;
        writeln!(f, "  step = {}", self.projection.step)?;

        writeln!(f, "\n[chart]")?;
        writeln!(f, "  background = \"{}\"", self.chart.background)?;
        writeln!(f, "  grid_color = \"{}\"", self.chart.grid_color)?;
        writeln!(f, "  text_color = \"{}\"", self.chart.text_color)?;
        writeln!(f, "  line_color = \"{}\"", self.chart.line_color)?;
        writeln!(f, "  font_family = \"{}\"", self.chart.font_family)?;
        writeln!(f, "  font_size = {}", self.chart.font_size)?;

        Ok(())
    }
}
