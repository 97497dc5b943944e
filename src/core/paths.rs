// src/core/paths.rs

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, SAGA_CMD_ENV, SAGA_CMD_FALLBACK, SAGA_CMD_FILENAME},
    models::Config,
    system::saga_cmd::is_executable,
};
use log::debug;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while locating `saga_cmd` through configuration.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config file exists but could not be read.
    #[error("Could not read config file '{path}': {source}")]
    ConfigRead {
        /// The config file location.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`Config`].
    #[error("Could not parse config file '{path}': {source}")]
    ConfigParse {
        /// The config file location.
        path: String,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A `~` or `$VAR` in a path could not be expanded.
    #[error("Failed to expand path template '{template}': {reason}")]
    Expansion {
        /// The template as written.
        template: String,
        /// What the expansion reported.
        reason: String,
    },
}

/// Returns the path to the sagacmd configuration directory (`~/.config/sagacmd`).
/// Unlike a writable state directory, it is never created here.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Returns the path to the user's `config.toml`.
pub fn get_config_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Loads the user configuration. A missing file (or a platform without a
/// config directory) yields the default, empty configuration.
pub fn load_config() -> Result<Config, PathError> {
    match get_config_path() {
        Ok(path) => load_config_from(&path),
        Err(PathError::ConfigDirNotFound) => {
            debug!("No config directory on this platform, using defaults.");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Loads a configuration file from an explicit location.
pub fn load_config_from(path: &Path) -> Result<Config, PathError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Config file '{}' not found, using defaults.", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(PathError::ConfigRead {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    toml::from_str(&content).map_err(|e| PathError::ConfigParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Expands a path template string, resolving the home directory (`~`) and
/// environment variables (`$VAR` or `${VAR}`).
pub fn expand_path_template(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Searches every directory of a `PATH`-style variable for the `saga_cmd` executable.
/// Files without execute permission are skipped, like a shell would.
pub fn find_in_path(path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(SAGA_CMD_FILENAME))
        .find(|candidate| {
            fs::metadata(candidate).is_ok_and(|metadata| is_executable(candidate, &metadata))
        })
}

/// Picks the `saga_cmd` location from explicit inputs, in priority order:
/// environment override, config file, `PATH` search, platform fallback.
///
/// The returned path is not validated; `SagaCmd::new` does that.
pub fn resolve_saga_cmd_path(
    env_value: Option<&str>,
    config: &Config,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, PathError> {
    if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
        debug!("Using saga_cmd from ${}: '{}'", SAGA_CMD_ENV, value);
        return expand_path_template(value);
    }

    if let Some(template) = config.saga_cmd.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        debug!("Using saga_cmd from config file: '{}'", template);
        return expand_path_template(template);
    }

    if let Some(found) = path_var.and_then(find_in_path) {
        debug!("Found saga_cmd on PATH: '{}'", found.display());
        return Ok(found);
    }

    debug!("Falling back to default saga_cmd location '{}'", SAGA_CMD_FALLBACK);
    Ok(PathBuf::from(SAGA_CMD_FALLBACK))
}

/// The default path resolver: reads the process environment and the user
/// configuration, then defers to [`resolve_saga_cmd_path`].
pub fn default_saga_cmd_path() -> Result<PathBuf, PathError> {
    let env_value = env::var(SAGA_CMD_ENV).ok();
    let config = load_config()?;
    let path_var = env::var_os("PATH");
    resolve_saga_cmd_path(env_value.as_deref(), &config, path_var.as_deref())
}

// MARK: --- UNIT TESTS ---
