// src/constants.rs

/// Prefix that turns a raw flag (e.g. `cores=8`) into a `saga_cmd` modifier.
pub const FLAG_PREFIX: &str = "--";

/// Prefix of every keyed tool parameter (`-ELEVATION=dem.sgrd`).
pub const PARAMETER_PREFIX: &str = "-";

/// Flag understood by `saga_cmd` that prints its version and exits.
pub const VERSION_FLAG: &str = "version";

/// Environment variable that overrides every other `saga_cmd` lookup.
pub const SAGA_CMD_ENV: &str = "SAGA_CMD";

/// The name of the configuration directory (in the platform config dir).
pub const CONFIG_DIR_NAME: &str = "sagacmd";

/// The name of the configuration file (inside the configuration directory).
pub const CONFIG_FILENAME: &str = "config.toml";

/// The file name of the SAGA command-line executable on this platform.
#[cfg(windows)]
pub const SAGA_CMD_FILENAME: &str = "saga_cmd.exe";
/// The file name of the SAGA command-line executable on this platform.
#[cfg(not(windows))]
pub const SAGA_CMD_FILENAME: &str = "saga_cmd";

/// Where the SAGA installers put `saga_cmd` when nothing else points to it.
#[cfg(windows)]
pub const SAGA_CMD_FALLBACK: &str = r"C:\Program Files\SAGA\saga_cmd.exe";
/// Where the SAGA installers put `saga_cmd` when nothing else points to it.
#[cfg(target_os = "macos")]
pub const SAGA_CMD_FALLBACK: &str = "/Applications/SAGA.app/Contents/MacOS/saga_cmd";
/// Where the SAGA installers put `saga_cmd` when nothing else points to it.
#[cfg(all(not(windows), not(target_os = "macos")))]
pub const SAGA_CMD_FALLBACK: &str = "/usr/bin/saga_cmd";
