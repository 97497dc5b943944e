// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// sagacmd: run SAGA GIS tools from the command line.
///
/// The positional arguments mirror `saga_cmd` itself:
///
/// - `sagacmd --flag version`                  -> `saga_cmd --version`
/// - `sagacmd ta_morphometry`                  -> lists the library's tools
/// - `sagacmd ta_morphometry 0 elevation=dem.sgrd slope=slope.sgrd`
///                                             -> `saga_cmd ta_morphometry 0 -ELEVATION=dem.sgrd -SLOPE=slope.sgrd`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to `saga_cmd`. Defaults to $SAGA_CMD, then the config file,
    /// then PATH, then the platform's install location.
    #[arg(long, value_name = "PATH")]
    pub saga_cmd: Option<PathBuf>,

    /// Global flag, with or without the leading `--` (e.g. `cores=8`, `help`).
    #[arg(long, short, allow_hyphen_values = true)]
    pub flag: Option<String>,

    /// Print the command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// The library name (e.g. `ta_morphometry`).
    pub library: Option<String>,

    /// The tool, by index or by name (e.g. `0`).
    pub tool: Option<String>,

    /// Tool parameters as `KEY=VALUE`.
    #[arg(value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

/// Splits a `KEY=VALUE` argument at its first `=`.
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("elevation=dem.sgrd").unwrap(),
            ("elevation".to_string(), "dem.sgrd".to_string())
        );
        assert_eq!(
            parse_key_value("formula=a=b").unwrap(),
            ("formula".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_cli_full_tool_invocation() {
        let cli = Cli::try_parse_from([
            "sagacmd",
            "--flag",
            "--cores=8",
            "ta_morphometry",
            "0",
            "elevation=dem.sgrd",
            "slope=slope.sgrd",
        ])
        .unwrap();

        assert_eq!(cli.flag.as_deref(), Some("--cores=8"));
        assert_eq!(cli.library.as_deref(), Some("ta_morphometry"));
        assert_eq!(cli.tool.as_deref(), Some("0"));
        assert_eq!(cli.params.len(), 2);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_program_level() {
        let cli = Cli::try_parse_from(["sagacmd", "-f", "version", "--dry-run"]).unwrap();
        assert_eq!(cli.flag.as_deref(), Some("version"));
        assert!(cli.library.is_none());
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_rejects_malformed_parameter() {
        let result = Cli::try_parse_from(["sagacmd", "ta_morphometry", "0", "elevation"]);
        assert!(result.is_err());
    }
}
