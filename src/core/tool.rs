// src/core/tool.rs

use crate::{
    core::{
        executable::{self, Executable},
        flag::Flag,
        library::Library,
        output::Output,
        parameters::Parameters,
    },
    system::{
        executor::{Command, ExecutionError},
        saga_cmd::SagaCmd,
    },
};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// One tool of a SAGA library, the only level that takes parameters.
///
/// ```no_run
/// use sagacmd::Saga;
///
/// let saga = Saga::new(Some("/usr/bin/saga_cmd"))?;
/// let mut slope = &saga / "ta_morphometry" / "Slope, Aspect, Curvature";
/// let output = slope.run_with([("elevation", "dem.sgrd"), ("slope", "slope.sgrd")])?;
/// let rasters = output.get_raster("slope");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tool {
    saga_cmd: Arc<SagaCmd>,
    flag: Flag,
    library: Arc<str>,
    name: String,
    parameters: Parameters,
}

impl Tool {
    /// Same as [`Library::get_tool`]: starts with the library's current flag.
    pub fn new(library: &Library, name: &str) -> Self {
        library.get_tool(name)
    }

    pub(crate) fn from_parts(
        saga_cmd: Arc<SagaCmd>,
        flag: Flag,
        library: Arc<str>,
        name: &str,
    ) -> Self {
        Self {
            saga_cmd,
            flag,
            library,
            name: name.to_string(),
            parameters: Parameters::default(),
        }
    }

    /// The tool index or name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the library this tool was obtained from.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// The configured parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The configured value of one parameter, e.g. to feed it to the next tool.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key)
    }

    /// Builder-style variant of [`Executable::set_flag`].
    pub fn with_flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Replaces the whole parameter set.
    pub fn set_params<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        self.parameters = Parameters::new(params);
        debug!(
            "Tool '{} {}' configured with: {}",
            self.library, self.name, self.parameters
        );
    }

    /// Builder-style variant of [`Tool::set_params`].
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        self.set_params(params);
        self
    }

    /// Configures the parameters and runs the tool in one call.
    ///
    /// An empty `params` keeps the parameters configured earlier.
    pub fn run_with<I, K, V>(&mut self, params: I) -> Result<Output, ExecutionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        let params = Parameters::new(params);
        if !params.is_empty() {
            self.parameters = params;
        }
        self.run()
    }
}

impl Executable for Tool {
    fn saga_cmd(&self) -> &SagaCmd {
        &self.saga_cmd
    }

    fn command(&self) -> Command {
        executable::compose_command(
            &self.saga_cmd,
            &self.flag,
            &[&*self.library, self.name.as_str()],
            Some(&self.parameters),
        )
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
        executable::run_command(&self.command(), self.parameters.clone())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::saga::Saga;

    fn saga() -> Saga {
        Saga::new(Some("/bin/echo")).unwrap()
    }

    #[test]
    fn test_full_command_order() {
        // --- Setup ---
        let mut tool = saga().get_tool("ta_morphometry", "0");
        tool.set_flag("cores=8");
        tool.set_params([("elevation", "dem.sgrd"), ("slope", "slope.sgrd")]);

        // --- Execute ---
        let command = tool.command();

        // --- Assert ---
        assert_eq!(
            command.args(),
            [
                "/bin/echo",
                "--cores=8",
                "ta_morphometry",
                "0",
                "-ELEVATION=dem.sgrd",
                "-SLOPE=slope.sgrd",
            ]
        );
        assert!(command.iter().all(|token| !token.is_empty()));
    }

    #[test]
    fn test_tool_inherits_library_flag() {
        let mut library = saga().get_library("ta_morphometry");
        library.set_flag("--help");
        let tool = Tool::new(&library, "0");
        assert_eq!(*tool.flag(), "--help");
        assert_eq!(tool.library(), "ta_morphometry");
    }

    #[test]
    fn test_flag_set_and_clear() {
        let mut tool = saga() / "ta_morphometry" / "0";
        let original = tool.command();

        tool.set_flag("--cores=8");
        assert_eq!(*tool.flag(), "--cores=8");
        assert_eq!(tool.command().get(1), Some("--cores=8"));

        tool.set_flag(None::<String>);
        assert!(!tool.flag().is_set());
        assert_eq!(tool.command(), original);

        tool.set_flag("--cores=8");
        tool.clear_flag();
        assert!(!tool.flag().is_set());
        assert_eq!(tool.command(), original);
    }

    #[test]
    fn test_command_reflects_reconfigured_parameters() {
        let mut tool = saga().get_tool("ta_morphometry", "0");
        tool.set_params([("elevation", "a.sgrd")]);
        assert_eq!(tool.command().get(3), Some("-ELEVATION=a.sgrd"));

        tool.set_params([("dem", "b.sgrd")]);
        assert_eq!(tool.command().get(3), Some("-DEM=b.sgrd"));
        assert_eq!(tool.command().len(), 4);
        assert_eq!(tool.param("elevation"), None);
    }

    #[test]
    fn test_run_with_configures_then_runs() {
        // --- Setup ---
        let mut tool = saga().get_tool("ta_morphometry", "0");

        // --- Execute ---
        let output = tool
            .run_with([("elevation", "dem.sgrd"), ("method", "0")])
            .unwrap();

        // --- Assert ---
        assert_eq!(output.text, "ta_morphometry 0 -ELEVATION=dem.sgrd -METHOD=0\n");
        assert_eq!(output.parameters.get("elevation"), Some("dem.sgrd"));
        assert_eq!(tool.param("method"), Some("0"));
    }

    #[test]
    fn test_run_with_empty_keeps_previous_parameters() {
        let mut tool = saga()
            .get_tool("ta_morphometry", "0")
            .with_params([("elevation", "dem.sgrd")]);
        let output = tool.run_with(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(output.parameters.get("elevation"), Some("dem.sgrd"));
    }
}
