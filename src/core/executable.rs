// src/core/executable.rs

//! The capability shared by every level of a `saga_cmd` call.
//!
//! `saga_cmd` can be called bare (`saga_cmd --version`), with a library
//! (`saga_cmd ta_morphometry`) or with a full tool and its parameters
//! (`saga_cmd ta_morphometry 0 -ELEVATION=dem.sgrd`). [`Saga`], [`Library`]
//! and [`Tool`] mirror those three levels; each can report the command it
//! currently stands for and run it.
//!
//! [`Saga`]: crate::Saga
//! [`Library`]: crate::Library
//! [`Tool`]: crate::Tool

use crate::{
    core::{flag::Flag, output::Output, parameters::Parameters},
    system::{
        executor::{Command, ExecutionError},
        saga_cmd::SagaCmd,
    },
};
use log::trace;

/// A level of a `saga_cmd` call that holds a flag and can be run.
pub trait Executable {
    /// The validated executable this level runs.
    fn saga_cmd(&self) -> &SagaCmd;

    /// A freshly composed command reflecting the current flag (and parameters).
    fn command(&self) -> Command;

    /// The flag currently held.
    fn flag(&self) -> &Flag;

    /// Replaces the held flag. Commands composed earlier are not affected.
    fn set_flag<F: Into<Flag>>(&mut self, flag: F)
    where
        Self: Sized;

    /// Resets the flag to unset.
    fn clear_flag(&mut self);

    /// Composes the current command and runs it to completion.
    fn run(&self) -> Result<Output, ExecutionError>;
}

/// Joins the executable, the flag, the level names and the parameter tokens,
/// in that order, into a [`Command`]. Unset and empty pieces are skipped.
pub(crate) fn compose_command(
    saga_cmd: &SagaCmd,
    flag: &Flag,
    names: &[&str],
    parameters: Option<&Parameters>,
) -> Command {
    let mut pieces = vec![saga_cmd.to_arg()];
    pieces.extend(flag.token());
    pieces.extend(names.iter().map(|name| (*name).to_string()));
    if let Some(parameters) = parameters {
        pieces.extend(parameters.iter().cloned());
    }
    trace!("Composed command pieces: {:?}", pieces);
    Command::new(pieces)
}

/// Executes `command` and pairs the result with the parameters that produced it.
pub(crate) fn run_command(
    command: &Command,
    parameters: Parameters,
) -> Result<Output, ExecutionError> {
    let completed = command.execute()?;
    Ok(Output::new(completed, parameters))
}
