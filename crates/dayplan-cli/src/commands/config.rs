//! Configuration management commands.

use clap::Subcommand;

use dayplan_core::PlannerConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the full configuration
    Show,
    /// Get a single value by key
    Get {
        /// Key: importance_threshold, urgent_days, buffer_ratio or ensure_q2
        key: String,
    },
    /// Set a value by key and persist
    Set {
        key: String,
        value: String,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = PlannerConfig::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = PlannerConfig::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = PlannerConfig::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::Path => {
            println!("{}", PlannerConfig::path()?.display());
        }
    }
    Ok(())
}
