use std::{env, path::PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

const ENV_PREFIX: &str = "MFM";
const CONFIG_PATH_VAR: &str = "MFM_CONFIG_PATH";

impl Settings {
    /// Layer `MFM__*` environment variables over the optional config file.
    /// Fields set in neither keep their struct defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.naming.tracknum_width == 0 {
            return Err("naming.tracknum_width must be >= 1".to_string());
        }
        Ok(())
    }
}

/// `$MFM_CONFIG_PATH`, else `mfm/config.toml` under `$XDG_CONFIG_HOME` or
/// `~/.config`.
fn config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(p));
    }

    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("mfm").join("config.toml"))
}
