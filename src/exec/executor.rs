//! The "execute and capture" primitive
//!
//! Every `gh` operation is a fixed argument vector pushed through [`run`].
//! The process itself is behind [`CommandExecutor`] so that tests can swap in
//! [`ScriptedExecutor`](super::ScriptedExecutor) instead of spawning.

use crate::error::Error;
use anyhow::Result;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Everything a finished process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Execute a program to completion and capture both output streams
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args`, writing `input` to its stdin when given.
    /// Only spawn/IO failures are errors here; a non-zero exit is reported
    /// through [`CapturedOutput::code`].
    fn execute(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> io::Result<CapturedOutput>;
}

/// Executor backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> io::Result<CapturedOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(input) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            // EPIPE: the child exited without reading stdin; its status decides
            match stdin.write_all(input.as_bytes()) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e);
                }
                _ => {}
            }
        }

        let output = child.wait_with_output()?;

        Ok(CapturedOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run a command and return its trimmed stdout
///
/// # Errors
/// - [`Error::Spawn`] if the program could not be started
/// - [`Error::CommandFailed`] on a non-zero exit, carrying the trimmed stderr
///   (or stdout when stderr is empty)
pub fn run(
    executor: &dyn CommandExecutor,
    program: &str,
    args: &[String],
    input: Option<&str>,
) -> Result<String> {
    tracing::debug!(program, ?args, stdin = input.is_some(), "executing");

    let output = executor
        .execute(program, args, input)
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    tracing::debug!(program, code = ?output.code, "finished");

    if output.success() {
        return Ok(output.stdout.trim().to_string());
    }

    let message = if output.stderr.trim().is_empty() {
        output.stdout.trim()
    } else {
        output.stderr.trim()
    };

    Err(Error::CommandFailed {
        program: program.to_string(),
        code: output.code,
        message: message.to_string(),
    }
    .into())
}
