// src/models.rs

use serde::{Deserialize, Serialize};

// --- `config.toml` MODELS (What is read from the configuration file) ---

/// Represents the deserialized structure of the user's `config.toml`.
///
/// ```toml
/// saga_cmd = "~/opt/saga-9.3.1/bin/saga_cmd"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path template of the `saga_cmd` executable. `~` and `$VAR` are expanded.
    pub saga_cmd: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_saga_cmd() {
        let config: Config = toml::from_str("saga_cmd = \"/opt/saga/saga_cmd\"").unwrap();
        assert_eq!(config.saga_cmd.as_deref(), Some("/opt/saga/saga_cmd"));
    }

    #[test]
    fn test_config_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
