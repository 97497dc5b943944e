// src/system/executor.rs

use log::{debug, warn};
use std::fmt;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Why a [`Command`] could not be run at all.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The command has no tokens.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The operating system refused to start the process.
    #[error("Command '{command}' could not be executed: {source}")]
    SpawnFailed {
        /// The rendered command line.
        command: String,
        /// The spawn error.
        #[source]
        source: std::io::Error,
    },
}

/// The raw result of one finished child process.
#[derive(Debug, Clone)]
pub struct CompletedProcess {
    /// The argument vector the process was started with.
    pub args: Vec<String>,
    /// Exit status, exactly as reported by the operating system.
    pub status: ExitStatus,
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl CompletedProcess {
    /// Exit code of the process, `None` when it was terminated by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Whether the exit status was 0.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// One full `saga_cmd` invocation as an ordered list of non-empty tokens.
///
/// Empty pieces (an unset flag, an empty name) are dropped at construction,
/// so the first token is always the program to start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    /// Builds a command from its pieces, dropping empty ones.
    pub fn new<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = pieces
            .into_iter()
            .map(Into::into)
            .filter(|piece| !piece.is_empty())
            .collect();
        Self { args }
    }

    /// All tokens, program first.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The token at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.args.iter()
    }

    /// Spawns the command without a shell, waits for it and captures both
    /// output streams.
    ///
    /// A non-zero exit status is *not* an error: it is returned inside the
    /// [`CompletedProcess`] for the caller to inspect.
    ///
    /// # Errors
    /// `EmptyCommand` if there is nothing to run, `SpawnFailed` if the
    /// operating system refuses to start the process.
    pub fn execute(&self) -> Result<CompletedProcess, ExecutionError> {
        let (program, args) = self.args.split_first().ok_or(ExecutionError::EmptyCommand)?;
        debug!("Executing: {}", self);

        let output = StdCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ExecutionError::SpawnFailed {
                command: self.to_string(),
                source: e,
            })?;

        debug!("Command finished with {}", output.status);

        Ok(CompletedProcess {
            args: self.args.clone(),
            status: output.status,
            stdout: decode(output.stdout, "stdout"),
            stderr: decode(output.stderr, "stderr"),
        })
    }
}

fn decode(bytes: Vec<u8>, stream: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        warn!("Child {} was not valid UTF-8, replacing invalid sequences.", stream);
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

/// Renders a copy-pasteable, shell-quoted command line.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match shlex::try_join(self.args.iter().map(String::as_str)) {
            Ok(line) => f.write_str(&line),
            // Only tokens with NUL bytes cannot be quoted.
            Err(_) => f.write_str(&self.args.join(" ")),
        }
    }
}

impl<'a> IntoIterator for &'a Command {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl IntoIterator for Command {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pieces_are_dropped() {
        let command = Command::new(["/usr/bin/saga_cmd", "", "ta_morphometry", "", "0"]);
        assert_eq!(command.args(), ["/usr/bin/saga_cmd", "ta_morphometry", "0"]);
        assert_eq!(command.len(), 3);
        assert_eq!(command.get(1), Some("ta_morphometry"));
        assert_eq!(command.get(3), None);
    }

    #[test]
    fn test_display_quotes_tokens_with_spaces() {
        let command = Command::new(["saga_cmd", "ta_hydrology", "Flow Accumulation (Top-Down)"]);
        let line = command.to_string();
        assert!(line.starts_with("saga_cmd ta_hydrology "));
        assert_eq!(shlex::split(&line).unwrap(), command.args());
    }

    #[test]
    fn test_execute_empty_command_is_error() {
        let result = Command::new(Vec::<String>::new()).execute();
        assert!(matches!(result, Err(ExecutionError::EmptyCommand)));
    }

    #[test]
    fn test_execute_missing_program_is_spawn_error() {
        let command = Command::new(["/definitely/not/a/real/saga_cmd", "--version"]);
        let result = command.execute();
        assert!(matches!(result, Err(ExecutionError::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_captures_output_and_status() {
        // --- Setup ---
        let command = Command::new(["/bin/sh", "-c", "echo out; echo err 1>&2; exit 3"]);

        // --- Execute ---
        let completed = command.execute().unwrap();

        // --- Assert ---
        assert_eq!(completed.stdout, "out\n");
        assert_eq!(completed.stderr, "err\n");
        assert_eq!(completed.code(), Some(3));
        assert!(!completed.success());
        assert_eq!(completed.args, command.args());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_passes_arguments_verbatim() {
        // No shell: spaces and quotes survive as a single argument.
        let command = Command::new(["/bin/echo", "a b", "'c'", "$HOME"]);
        let completed = command.execute().unwrap();
        assert_eq!(completed.stdout, "a b 'c' $HOME\n");
        assert!(completed.success());
    }
}
