// src/core/saga.rs

use crate::{
    constants::VERSION_FLAG,
    core::{
        executable::{self, Executable},
        flag::Flag,
        library::Library,
        output::Output,
        parameters::Parameters,
        tool::Tool,
    },
    system::{
        executor::{Command, ExecutionError},
        saga_cmd::{SagaCmd, SagaCmdError},
    },
};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Div;
use std::path::Path;
use std::sync::Arc;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap();
}

/// The SAGA GIS program: the root of every `saga_cmd` call.
///
/// ```no_run
/// use sagacmd::{Executable, Saga};
///
/// let saga = Saga::new(Some("/usr/bin/saga_cmd"))?;
/// let slope = &saga / "ta_morphometry" / "0";
/// println!("{}", slope.command());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Saga {
    saga_cmd: Arc<SagaCmd>,
    flag: Flag,
}

impl Saga {
    /// Validates `saga_cmd_path`, or the default location when `None`.
    pub fn new<P: AsRef<Path>>(saga_cmd_path: Option<P>) -> Result<Self, SagaCmdError> {
        Ok(Self::from_saga_cmd(SagaCmd::locate(saga_cmd_path)?))
    }

    /// Uses the `saga_cmd` found by the default path resolver.
    pub fn from_default_path() -> Result<Self, SagaCmdError> {
        Ok(Self::from_saga_cmd(SagaCmd::default_path()?))
    }

    /// Wraps an already validated handle.
    pub fn from_saga_cmd(saga_cmd: SagaCmd) -> Self {
        Self {
            saga_cmd: Arc::new(saga_cmd),
            flag: Flag::none(),
        }
    }

    /// Builder-style variant of [`Executable::set_flag`].
    pub fn with_flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Descends to a library. Nothing is executed.
    pub fn get_library(&self, library: &str) -> Library {
        Library::from_parts(Arc::clone(&self.saga_cmd), self.flag.clone(), library)
    }

    /// Descends straight to a tool of `library`.
    pub fn get_tool(&self, library: &str, tool: &str) -> Tool {
        self.get_library(library).get_tool(tool)
    }

    /// Runs `saga_cmd --version` and extracts the `major.minor.patch` triple
    /// from its output. `Ok(None)` when the output carries no version.
    pub fn version(&self) -> Result<Option<String>, ExecutionError> {
        let probe = self.clone().with_flag(VERSION_FLAG);
        let output = probe.run()?;
        Ok(parse_version(&output.text))
    }
}

pub(crate) fn parse_version(text: &str) -> Option<String> {
    VERSION_RE.find(text).map(|m| m.as_str().to_string())
}

impl Executable for Saga {
    fn saga_cmd(&self) -> &SagaCmd {
        &self.saga_cmd
    }

    fn command(&self) -> Command {
        executable::compose_command(&self.saga_cmd, &self.flag, &[], None)
    }

    fn flag(&self) -> &Flag {
        &self.flag
    }

    fn set_flag<F: Into<Flag>>(&mut self, flag: F) {
        self.flag = flag.into();
    }

    fn clear_flag(&mut self) {
        self.flag = Flag::none();
    }

    fn run(&self) -> Result<Output, ExecutionError> {
        executable::run_command(&self.command(), Parameters::default())
    }
}

impl Div<&str> for &Saga {
    type Output = Library;

    fn div(self, library: &str) -> Library {
        self.get_library(library)
    }
}

impl Div<&str> for Saga {
    type Output = Library;

    fn div(self, library: &str) -> Library {
        self.get_library(library)
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn saga() -> Saga {
        Saga::new(Some("/bin/echo")).unwrap()
    }

    #[test]
    fn test_bare_command_is_just_the_executable() {
        assert_eq!(saga().command().args(), ["/bin/echo"]);
    }

    #[test]
    fn test_get_library_and_div_agree() {
        let saga = saga();
        let by_name = saga.get_library("ta_morphometry");
        let by_div = &saga / "ta_morphometry";
        assert_eq!(by_name.command(), by_div.command());
        assert_eq!(by_div.command().args(), ["/bin/echo", "ta_morphometry"]);
    }

    #[test]
    fn test_get_tool_and_div_agree() {
        let saga = saga();
        let by_name = saga.get_tool("ta_morphometry", "0");
        let by_div = &saga / "ta_morphometry" / "0";
        assert_eq!(by_name.command(), by_div.command());
        assert_eq!(
            by_div.command().args(),
            ["/bin/echo", "ta_morphometry", "0"]
        );
    }

    #[test]
    fn test_flag_set_then_clear_restores_command() {
        // --- Setup ---
        let mut saga = saga();
        let original = saga.command();

        // --- Execute ---
        saga.set_flag("help");
        let flagged = saga.command();
        saga.clear_flag();

        // --- Assert ---
        assert_eq!(flagged.args(), ["/bin/echo", "--help"]);
        assert_eq!(saga.command(), original);
        assert!(!saga.flag().is_set());
    }

    #[test]
    fn test_descent_copies_current_flag() {
        let mut saga = saga();
        saga.set_flag("cores=8");
        let library = saga.get_library("ta_morphometry");

        saga.set_flag("help");
        assert_eq!(*library.flag(), "--cores=8");
        assert_eq!(*saga.flag(), "--help");
    }

    #[test]
    fn test_run_program_level() {
        let output = saga().with_flag("cores=8").run().unwrap();
        assert_eq!(output.text, "--cores=8\n");
        assert!(output.parameters.is_empty());
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(
            parse_version("SAGA Version: 9.3.1\n"),
            Some("9.3.1".to_string())
        );
        assert_eq!(parse_version("no version here"), None);
    }
}
