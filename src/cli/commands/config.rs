//! Config command handler

use super::ask_yes_no;
use crate::args::ConfigSubcommand;
use grade_forecast::config::Config;
use grade_forecast::logger::Level;

/// Dispatch config subcommands. Failures exit with status 1.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => {
            show(config, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            show(config, key.as_deref());
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    validate(config)?;
    persist(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    validate(config)?;
    persist(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if ask_yes_no("Are you sure you want to reset config to defaults?").map_err(|e| e.to_string())? {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Reject values that would only fail later, when a command runs
fn validate(config: &Config) -> Result<(), String> {
    if Level::parse(&config.logging.level).is_none() {
        return Err(format!(
            "Invalid log level '{}'. Use: error, warn, info, or debug",
            config.logging.level
        ));
    }
    config
        .projection
        .averages()
        .map(|_| ())
        .map_err(|e| format!("Invalid projection range: {e}"))
}
