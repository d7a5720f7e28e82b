use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_PATH_ENV_VAR: &str = "MONCAL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("moncal").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".moncal.toml"));
    }

    locations
}

fn default_mark_today() -> bool {
    true
}

fn default_today_symbol() -> char {
    '*'
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_mark_today")]
    pub mark_today: bool,
    #[serde(default = "default_today_symbol")]
    pub today_symbol: char,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mark_today: default_mark_today(),
            today_symbol: default_today_symbol(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("cannot read '{}'", path.display()))
        })?;
        Config::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Marker for the reference day, if it should be marked at all.
    pub fn marker(&self) -> Option<char> {
        if self.mark_today {
            Some(self.today_symbol)
        } else {
            None
        }
    }
}

/// Loads `path` when given, otherwise the first config file found in the
/// default locations. Without any config file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from '{}'", path.display());
        return Config::load(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(location) => {
            log::info!("Loading config from '{}'", location.display());
            Config::load(&location)
        }
        None => {
            log::warn!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.marker(), Some('*'));
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_toml(
            r#"
            mark_today = true
            today_symbol = "<"
            "#,
        )
        .unwrap();

        assert_eq!(config.marker(), Some('<'));
    }

    #[test]
    fn disabled_marker() {
        let config = Config::from_toml("mark_today = false").unwrap();
        assert_eq!(config.marker(), None);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml("colour = \"red\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/moncal.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
