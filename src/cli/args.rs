//! CLI argument definitions for `GradeForecast`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_forecast::config::ConfigOverrides;
use grade_forecast::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
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
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`, `step`)
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
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show module, year, and degree scores for a degree file.
    Score {
        /// Path to a degree TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Work out the average needed on remaining work to reach a target grade.
    ///
    /// When the target is out of reach, offers to write the projection chart instead.
    Target {
        /// Path to a degree TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Target final degree score (%)
        #[arg(value_name = "TARGET")]
        target: f64,

        /// Chart format if the projection is written: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Chart output path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Chart the final degree score against the average on remaining work.
    Project {
        /// Path to a degree TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// First average to plot (defaults to config `start`)
        #[arg(long, value_name = "PERCENT")]
        start: Option<f64>,

        /// Last average to plot, at most 100 (defaults to config `stop`)
        #[arg(long, value_name = "PERCENT")]
        stop: Option<f64>,

        /// Increment between averages (defaults to config `step`)
        #[arg(long, value_name = "PERCENT")]
        step: Option<f64>,

        /// Chart format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Chart output path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradeforecast",
    about = "GradeForecast command-line interface",
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
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut args = cli(Command::Config { subcommand: None });
        args.config_level = Some(LogLevelArg::Debug);
        args.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        args.config_verbose = Some(true);
        args.config_reports_dir = Some(PathBuf::from("/long/out"));
        args.reports_dir = Some(PathBuf::from("/short/out"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut args = cli(Command::Config { subcommand: None });
        args.config_reports_dir = Some(PathBuf::from("/long/out"));
        assert_eq!(
            args.to_config_overrides().reports_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_parse_target_command() {
        let args = Cli::try_parse_from(["gradeforecast", "target", "degree.toml", "70"]).unwrap();
        match args.command {
            Command::Target {
                input_file,
                target,
                format,
                output,
            } => {
                assert_eq!(input_file, PathBuf::from("degree.toml"));
                assert!((target - 70.0).abs() < f64::EPSILON);
                assert_eq!(format, "html");
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_project_command() {
        let args = Cli::try_parse_from([
            "gradeforecast",
            "--reports-dir",
            "out",
            "project",
            "degree.toml",
            "--stop",
            "90",
            "-f",
            "md",
        ])
        .unwrap();
        assert_eq!(args.reports_dir, Some(PathBuf::from("out")));
        match args.command {
            Command::Project {
                start, stop, step, format, ..
            } => {
                assert!(start.is_none());
                assert_eq!(stop, Some(90.0));
                assert!(step.is_none());
                assert_eq!(format, "md");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
