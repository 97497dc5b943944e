//! # System Interaction Layer
//!
//! This module is the boundary between the command model in `core` and the
//! operating system.
//!
//! ## Modules
//!
//! - **`executor`**: The [`Command`](executor::Command) token list and its
//!   execution. Processes are spawned directly (no shell), both output
//!   streams are captured, and the exit status is handed back untouched.
//! - **`saga_cmd`**: The validated handle to the `saga_cmd` executable.

/// Command token lists and their execution.
pub mod executor;
/// The validated `saga_cmd` handle.
pub mod saga_cmd;
