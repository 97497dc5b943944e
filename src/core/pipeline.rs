// src/core/pipeline.rs

use crate::{
    core::{executable::Executable, output::Output, tool::Tool},
    system::executor::ExecutionError,
};
use log::{debug, info};
use std::ops::BitOr;
use std::process::ExitStatus;
use thiserror::Error;

/// Why a [`Pipeline`] stopped early.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A step's process could not be spawned.
    #[error("Step {step} could not be executed: {source}")]
    Execution {
        /// 1-based step number.
        step: usize,
        /// The spawn failure.
        #[source]
        source: ExecutionError,
    },
    /// A step ran but exited with a non-zero status.
    #[error("Step {step} ('{command}') exited with {status}: {stderr}")]
    StepFailed {
        /// 1-based step number.
        step: usize,
        /// The step's command line.
        command: String,
        /// The child's exit status.
        status: ExitStatus,
        /// The child's trimmed standard error.
        stderr: String,
    },
}

/// Configured tools run one after another, each usually reading files the
/// previous one wrote.
///
/// ```no_run
/// use sagacmd::Saga;
///
/// let saga = Saga::new(Some("/usr/bin/saga_cmd"))?;
/// let preprocessor = &saga / "ta_preprocessor";
/// let fill = (&preprocessor / "Sink Removal")
///     .with_params([("dem", "dem.sgrd"), ("dem_preproc", "filled.sgrd")]);
/// let flow = (&saga / "ta_hydrology" / "Flow Accumulation (Parallelizable)")
///     .with_params([("dem", fill.param("dem_preproc").unwrap_or_default()), ("flow", "flow.sgrd")]);
///
/// let outputs = (fill | flow).execute(true)?;
/// assert_eq!(outputs.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    steps: Vec<Tool>,
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a configured tool.
    pub fn then(mut self, tool: Tool) -> Self {
        self.steps.push(tool);
        self
    }

    /// The tools in execution order.
    pub fn steps(&self) -> &[Tool] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order and returns one [`Output`] per step.
    ///
    /// Stops at the first step that cannot be spawned or that exits with a
    /// non-zero status. With `verbose`, each command line is logged at `info`.
    pub fn execute(&self, verbose: bool) -> Result<Vec<Output>, PipelineError> {
        let total = self.steps.len();
        let mut outputs = Vec::with_capacity(total);

        for (index, tool) in self.steps.iter().enumerate() {
            let step = index + 1;
            let command = tool.command();
            if verbose {
                info!("[{}/{}] {}", step, total, command);
            } else {
                debug!("Pipeline step {}/{}: {}", step, total, command);
            }

            let output = tool
                .run()
                .map_err(|source| PipelineError::Execution { step, source })?;

            if !output.success() {
                return Err(PipelineError::StepFailed {
                    step,
                    command: command.to_string(),
                    status: output.completed_process.status,
                    stderr: output.stderr().trim().to_string(),
                });
            }
            outputs.push(output);
        }

        Ok(outputs)
    }
}

impl BitOr<Tool> for Tool {
    type Output = Pipeline;

    fn bitor(self, next: Tool) -> Pipeline {
        Pipeline::new().then(self).then(next)
    }
}

impl BitOr<Tool> for Pipeline {
    type Output = Self;

    fn bitor(self, next: Tool) -> Self {
        self.then(next)
    }
}

impl FromIterator<Tool> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Tool>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

// MARK: --- UNIT TESTS ---
