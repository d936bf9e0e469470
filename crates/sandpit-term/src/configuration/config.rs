#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    Language,
    OutputHeight,
    Theme,
}

impl ConfigKey {
    fn description(self) -> &'static str {
        match self {
            ConfigKey::ConfigFile => "Path to the configuration file",
            ConfigKey::Language => "Language for new buffers",
            ConfigKey::OutputHeight => "Expanded height of the output panel, in rows",
            ConfigKey::Theme => "Color theme for the editor pane",
        }
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        "".to_string()
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| path::PathBuf::from("."))
            .join("sandpit/config.toml");

        match key {
            ConfigKey::ConfigFile => config_path.to_string_lossy().into_owned(),
            ConfigKey::Language => "python".to_string(),
            ConfigKey::OutputHeight => "15".to_string(),
            ConfigKey::Theme => "dark".to_string(),
        }
    }

    /// Precedence, lowest to highest: built-in defaults, config.toml, CLI
    /// flags the user actually passed.
    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            theme = %Config::get(ConfigKey::Theme),
            language = %Config::get(ConfigKey::Language),
            output_height = %Config::get(ConfigKey::OutputHeight),
            "config"
        );

        Ok(())
    }

    pub fn serialize_default() -> String {
        ConfigKey::iter()
            .filter(|key| *key != ConfigKey::ConfigFile)
            .map(|key| {
                let val = Config::default(key);
                let entry = if val.parse::<i32>().is_ok() {
                    format!("{key} = {val}")
                } else {
                    format!("{key} = \"{val}\"")
                };
                format!("# {}\n{entry}", key.description())
            })
            .collect::<Vec<String>>()
            .join("\n\n")
    }
}
