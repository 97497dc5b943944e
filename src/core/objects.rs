// src/core/objects.rs

//! Typed handles for files a SAGA tool writes.
//!
//! They only carry the path; opening and interpreting the data is left to
//! GIS crates.

use std::fmt;
use std::path::{Path, PathBuf};

/// Builds a typed handle from the string value of an output parameter.
pub trait FromOutputPath {
    /// Wraps `path` without touching the filesystem.
    fn from_output_path(path: &str) -> Self;
}

/// A raster dataset produced by a tool (`.sgrd`, `.tif`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    path: PathBuf,
}

/// A vector dataset produced by a tool (`.shp`, `.gpkg`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    path: PathBuf,
}

macro_rules! path_handle {
    ($handle:ident) => {
        impl $handle {
            /// Wraps `path`.
            pub fn new(path: impl Into<PathBuf>) -> Self {
                Self { path: path.into() }
            }

            /// The dataset's location.
            pub fn path(&self) -> &Path {
                &self.path
            }

            /// Whether the tool actually wrote the file.
            pub fn exists(&self) -> bool {
                self.path.is_file()
            }
        }

        impl FromOutputPath for $handle {
            fn from_output_path(path: &str) -> Self {
                Self::new(path)
            }
        }

        impl AsRef<Path> for $handle {
            fn as_ref(&self) -> &Path {
                &self.path
            }
        }

        impl fmt::Display for $handle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.path.display())
            }
        }
    };
}

path_handle!(Raster);
path_handle!(Vector);
