// src/core/mod.rs

//! The invocation model, from the program down to a configured tool.

/// The behavior every invocable level shares.
pub mod executable;
/// The optional global `saga_cmd` flag.
pub mod flag;
/// A named tool library.
pub mod library;
/// Typed handles for output files.
pub mod objects;
/// Run results and output extraction.
pub mod output;
/// Keyed tool parameters and their tokens.
pub mod parameters;
/// Locating `saga_cmd` through env, config and `PATH`.
pub mod paths;
/// Sequential runs of configured tools.
pub mod pipeline;
/// The program level.
pub mod saga;
/// A tool within a library.
pub mod tool;
