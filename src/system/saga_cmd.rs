// src/system/saga_cmd.rs

use crate::core::paths::{self, PathError};
use log::debug;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a `saga_cmd` path was rejected.
#[derive(Error, Debug)]
pub enum SagaCmdError {
    /// Nothing exists at the path.
    #[error("The path '{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),
    /// The path is a directory.
    #[error("The path '{}' is a directory, not the saga_cmd executable.", .0.display())]
    IsADirectory(PathBuf),
    /// The path is a file without execute permission.
    #[error("The file '{}' is not executable.", .0.display())]
    NotExecutable(PathBuf),
    /// The path exists but its metadata could not be read.
    #[error("Could not read metadata for '{}': {source}", .path.display())]
    Metadata {
        /// The path that was inspected.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The default path resolver failed.
    #[error("Could not determine the default saga_cmd location: {0}")]
    DefaultPath(#[from] PathError),
}

/// A validated handle to the `saga_cmd` executable.
///
/// Construction fails fast: the path must exist, must not be a directory and
/// must be executable. The handle is immutable afterwards and is shared by
/// every [`Saga`](crate::Saga), [`Library`](crate::Library) and
/// [`Tool`](crate::Tool) derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SagaCmd {
    path: PathBuf,
}

impl SagaCmd {
    /// Validates `path` and wraps it.
    ///
    /// # Errors
    /// `PathNotFound`, `IsADirectory` or `NotExecutable`, checked in that order.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SagaCmdError> {
        let path = dunce::simplified(path.as_ref()).to_path_buf();
        validate(&path)?;
        debug!("Using saga_cmd at '{}'", path.display());
        Ok(Self { path })
    }

    /// Locates `saga_cmd` through the default path resolver and validates it.
    pub fn default_path() -> Result<Self, SagaCmdError> {
        let path = paths::default_saga_cmd_path()?;
        Self::new(path)
    }

    /// Uses `path` when given, the default path resolver otherwise.
    pub fn locate<P: AsRef<Path>>(path: Option<P>) -> Result<Self, SagaCmdError> {
        match path {
            Some(path) => Self::new(path),
            None => Self::default_path(),
        }
    }

    /// The validated path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as a process-argument token.
    pub fn to_arg(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Display for SagaCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for SagaCmd {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<OsStr> for SagaCmd {
    fn as_ref(&self) -> &OsStr {
        self.path.as_os_str()
    }
}

fn validate(path: &Path) -> Result<(), SagaCmdError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SagaCmdError::PathNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(SagaCmdError::Metadata {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if metadata.is_dir() {
        return Err(SagaCmdError::IsADirectory(path.to_path_buf()));
    }
    if !is_executable(path, &metadata) {
        return Err(SagaCmdError::NotExecutable(path.to_path_buf()));
    }
    Ok(())
}

/// Whether `metadata` describes a regular file this platform can execute.
#[cfg(unix)]
pub(crate) fn is_executable(_path: &Path, metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path, metadata: &fs::Metadata) -> bool {
    metadata.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                ["exe", "com", "bat", "cmd"]
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
}

// MARK: --- UNIT TESTS ---
