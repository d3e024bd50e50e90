//! In-memory executor that replays scripted outputs
//!
//! Used by the test suites to drive `GhClient` and the menu without a real
//! `gh` on the PATH.

use super::executor::{CapturedOutput, CommandExecutor};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub input: Option<String>,
}

#[derive(Default)]
pub struct ScriptedExecutor {
    outputs: Mutex<VecDeque<CapturedOutput>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a zero-exit result with the given stdout
    pub fn push_success(&self, stdout: &str) {
        self.push_output(0, stdout, "");
    }

    pub fn push_output(&self, code: i32, stdout: &str, stderr: &str) {
        self.outputs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(CapturedOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            });
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Argument vectors of every call, joined with spaces
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|call| call.args.join(" "))
            .collect()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> io::Result<CapturedOutput> {
        self.invocations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
                input: input.map(str::to_string),
            });

        self.outputs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no scripted output for {} {}", program, args.join(" ")),
                )
            })
    }
}
