// src/core/output.rs

use crate::{
    core::{
        objects::{FromOutputPath, Raster, Vector},
        parameters::Parameters,
    },
    system::executor::CompletedProcess,
};

/// Parameter names to extract from an [`Output`]: a single `&str` or
/// `String`, or an array, slice or `Vec` of them.
pub trait ParameterNames {
    /// The names as owned strings.
    fn into_names(self) -> Vec<String>;
}

impl ParameterNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl ParameterNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl ParameterNames for &String {
    fn into_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>, const N: usize> ParameterNames for [S; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> ParameterNames for &[S] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> ParameterNames for Vec<S> {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

/// The result of one run, together with the parameters that produced it.
///
/// Extraction only reads the stored parameters; nothing is re-run.
#[derive(Debug, Clone)]
pub struct Output {
    /// The finished process.
    pub completed_process: CompletedProcess,
    /// The parameters the run was given.
    pub parameters: Parameters,
    /// Captured standard output, fixed at construction.
    pub text: String,
}

impl Output {
    /// Pairs a finished process with the parameters it ran with.
    pub fn new(completed_process: CompletedProcess, parameters: Parameters) -> Self {
        let text = completed_process.stdout.clone();
        Self {
            completed_process,
            parameters,
            text,
        }
    }

    /// Captured standard error.
    pub fn stderr(&self) -> &str {
        &self.completed_process.stderr
    }

    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.completed_process.success()
    }

    /// Builds one `T` per stored parameter whose name is in `names`.
    ///
    /// Results follow the parameters' insertion order, not the order of
    /// `names`. Unknown names are skipped silently.
    pub fn extract<T: FromOutputPath>(&self, names: impl ParameterNames) -> Vec<T> {
        let wanted = names.into_names();
        self.parameters
            .items()
            .filter(|(key, _)| wanted.iter().any(|name| name == key))
            .map(|(_, value)| T::from_output_path(value))
            .collect()
    }

    /// The named parameters' values as [`Raster`] handles.
    pub fn get_raster(&self, names: impl ParameterNames) -> Vec<Raster> {
        self.extract(names)
    }

    /// The named parameters' values as [`Vector`] handles.
    pub fn get_vector(&self, names: impl ParameterNames) -> Vec<Vector> {
        self.extract(names)
    }
}

// MARK: --- UNIT TESTS ---
