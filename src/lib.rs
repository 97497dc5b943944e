//! Build, run and read back SAGA GIS `saga_cmd` invocations.
//!
//! A call is described top-down, mirroring how `saga_cmd` itself is invoked:
//! [`Saga`] (the program) → [`Library`] → [`Tool`] with its [`Parameters`].
//! Every level implements [`Executable`], so it can show the [`Command`] it
//! stands for and run it, yielding an [`Output`].

/// Command-line arguments of the `sagacmd` binary.
pub mod cli;
/// Fixed names, prefixes and platform defaults.
pub mod constants;
/// The invocation model: program, library, tool, parameters and output.
pub mod core;
/// Serde models for the config file.
pub mod models;
/// Process spawning and `saga_cmd` validation.
pub mod system;

pub use crate::core::{
    executable::Executable,
    flag::Flag,
    library::Library,
    objects::{FromOutputPath, Raster, Vector},
    output::{Output, ParameterNames},
    parameters::Parameters,
    pipeline::{Pipeline, PipelineError},
    saga::Saga,
    tool::Tool,
};
pub use crate::system::{
    executor::{Command, CompletedProcess, ExecutionError},
    saga_cmd::{SagaCmd, SagaCmdError},
};
