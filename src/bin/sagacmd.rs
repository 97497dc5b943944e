// src/bin/sagacmd.rs

use anyhow::{Result, bail};
use clap::Parser;
use colored::*;
use sagacmd::{Executable, Saga, cli::Cli};

/// The main entry point of the `sagacmd` application.
/// It sets up logging, parses arguments, runs the requested level and
/// forwards the child's exit code.
fn main() {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Builds the deepest level named on the command line and runs it.
fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let saga = match cli.saga_cmd {
        Some(path) => Saga::new(Some(path))?,
        None => Saga::from_default_path()?,
    }
    .with_flag(cli.flag);

    match (cli.library, cli.tool) {
        (None, _) => execute(&saga, cli.dry_run),
        (Some(library), None) => {
            if !cli.params.is_empty() {
                bail!("Parameters were given but no tool was named.");
            }
            execute(&saga.get_library(&library), cli.dry_run)
        }
        (Some(library), Some(tool)) => {
            let tool = saga.get_tool(&library, &tool).with_params(cli.params);
            execute(&tool, cli.dry_run)
        }
    }
}

fn execute(level: &impl Executable, dry_run: bool) -> Result<i32> {
    let command = level.command();
    if dry_run {
        println!("{}", command);
        return Ok(0);
    }

    let output = level.run()?;
    print!("{}", output.text);
    if !output.stderr().is_empty() {
        eprint!("{}", output.stderr().yellow());
    }

    match output.completed_process.code() {
        Some(code) => Ok(code),
        None => {
            eprintln!("{}", "saga_cmd was terminated by a signal.".red());
            Ok(1)
        }
    }
}
