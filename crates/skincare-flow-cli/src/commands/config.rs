use std::path::Path;

use clap::Subcommand;
use skincare_flow_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "haptics.enabled", "timer.tick_interval_ms")
        key: String,
    },
    /// List all config values as TOML
    List,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = super::load_config(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::List => {
            let config = super::load_config(path)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            let location = match path {
                Some(path) => path.to_path_buf(),
                None => Config::path()?,
            };
            println!("{}", location.display());
        }
    }
    Ok(())
}
