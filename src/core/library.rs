// src/core/library.rs

use crate::{
    core::{
        executable::{self, Executable},
        flag::Flag,
        output::Output,
        parameters::Parameters,
        saga::Saga,
        tool::Tool,
    },
    system::{
        executor::{Command, ExecutionError},
        saga_cmd::SagaCmd,
    },
};
use std::fmt;
use std::ops::Div;
use std::sync::Arc;

/// A SAGA GIS tool library, e.g. `ta_morphometry`.
///
/// Running a library without a tool makes `saga_cmd` list the tools it holds.
#[derive(Debug, Clone)]
pub struct Library {
    saga_cmd: Arc<SagaCmd>,
    flag: Flag,
    name: Arc<str>,
}

impl Library {
    /// Same as [`Saga::get_library`]: starts with the program's current flag.
    pub fn new(saga: &Saga, name: &str) -> Self {
        saga.get_library(name)
    }

    pub(crate) fn from_parts(saga_cmd: Arc<SagaCmd>, flag: Flag, name: &str) -> Self {
        Self {
            saga_cmd,
            flag,
            name: Arc::from(name),
        }
    }

    /// The library name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder-style variant of [`Executable::set_flag`].
    pub fn with_flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Descends to one of the library's tools, by index (`"0"`) or by name.
    pub fn get_tool(&self, tool: &str) -> Tool {
        Tool::from_parts(
            Arc::clone(&self.saga_cmd),
            self.flag.clone(),
            Arc::clone(&self.name),
            tool,
        )
    }
}

impl Executable for Library {
    fn saga_cmd(&self) -> &SagaCmd {
        &self.saga_cmd
    }

    fn command(&self) -> Command {
        executable::compose_command(&self.saga_cmd, &self.flag, &[&*self.name], None)
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

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Div<&str> for &Library {
    type Output = Tool;

    fn div(self, tool: &str) -> Tool {
        self.get_tool(tool)
    }
}

impl Div<&str> for Library {
    type Output = Tool;

    fn div(self, tool: &str) -> Tool {
        self.get_tool(tool)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn saga() -> Saga {
        Saga::new(Some("/bin/echo")).unwrap()
    }

    #[test]
    fn test_library_inherits_program_flag() {
        let saga = saga().with_flag("--help");
        let library = Library::new(&saga, "ta_morphometry");
        assert_eq!(*library.flag(), "--help");
        assert_eq!(
            library.command().args(),
            ["/bin/echo", "--help", "ta_morphometry"]
        );
    }

    #[test]
    fn test_library_flag_is_independent() {
        let saga = saga();
        let mut library = saga.get_library("ta_morphometry");
        library.set_flag("cores=2");

        assert!(!saga.flag().is_set());
        assert_eq!(saga.command().args(), ["/bin/echo"]);
        assert_eq!(
            library.command().args(),
            ["/bin/echo", "--cores=2", "ta_morphometry"]
        );
    }

    #[test]
    fn test_command_is_recomposed_after_flag_change() {
        let mut library = saga().get_library("ta_morphometry");
        let before = library.command();
        library.set_flag("flags=s");
        let after = library.command();

        assert_eq!(before.args(), ["/bin/echo", "ta_morphometry"]);
        assert_eq!(after.get(1), Some("--flags=s"));
    }

    #[test]
    fn test_run_library_level() {
        let output = saga().get_library("ta_morphometry").run().unwrap();
        assert_eq!(output.text, "ta_morphometry\n");
        assert_eq!(output.completed_process.code(), Some(0));
    }

    #[test]
    fn test_display_is_name() {
        let library = saga() / "io_gdal";
        assert_eq!(library.to_string(), "io_gdal");
        assert_eq!(library.name(), "io_gdal");
    }
}
