//! `gh` CLI client
//!
//! `GhClient` owns the executable name and a [`CommandExecutor`]. Operations
//! are split across modules that extend it with `impl` blocks:
//! - `repositories.rs` - list/create/delete repositories
//! - `secrets.rs` - Actions secrets
//! - `variables.rs` - Actions variables

use crate::constants::github::{GH_BIN, GH_BIN_ENV};
use crate::error::Error;
use crate::exec::{CommandExecutor, SystemExecutor, run};
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub struct GhClient {
    pub(crate) program: String,
    pub(crate) executor: Arc<dyn CommandExecutor>,
}

impl GhClient {
    /// Create a client for `program` using the given executor
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use opskit::exec::ScriptedExecutor;
    /// use opskit::github::GhClient;
    ///
    /// let executor = Arc::new(ScriptedExecutor::new());
    /// let client = GhClient::new("gh", executor.clone());
    /// assert_eq!(client.program(), "gh");
    /// ```
    pub fn new(program: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            program: program.into(),
            executor,
        }
    }

    /// Client spawning the real executable: `program` if given, otherwise
    /// `$GHX_GH_BIN`, otherwise `gh` from the PATH
    pub fn system(program: Option<String>) -> Self {
        let program = program
            .or_else(|| std::env::var(GH_BIN_ENV).ok())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| GH_BIN.to_string());
        Self::new(program, Arc::new(SystemExecutor))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `gh` with `args` and return trimmed stdout
    pub fn run(&self, args: &[String]) -> Result<String> {
        run(self.executor.as_ref(), &self.program, args, None)
    }

    /// Run `gh` feeding `input` on stdin
    pub fn run_with_input(&self, args: &[String], input: &str) -> Result<String> {
        run(self.executor.as_ref(), &self.program, args, Some(input))
    }

    /// Run `gh` and parse its stdout as JSON; empty output parses as `[]`
    pub fn run_json<T: DeserializeOwned>(&self, args: &[String], what: &str) -> Result<T> {
        let stdout = self.run(args)?;
        let text = if stdout.is_empty() { "[]" } else { &stdout };
        serde_json::from_str(text).map_err(|source| {
            Error::Parse {
                what: what.to_string(),
                source,
            }
            .into()
        })
    }

    /// Login of the authenticated user
    pub fn current_user(&self) -> Result<String> {
        let login = self.run(&args(&["api", "user", "--jq", ".login"]))?;
        if login.is_empty() {
            anyhow::bail!("gh did not report a login for the authenticated user");
        }
        Ok(login)
    }

    /// Turn `name` into `owner/name`, asking gh for the current user when
    /// no owner is given
    pub fn resolve_repo(&self, repo: &str) -> Result<String> {
        let repo = repo.trim();
        if repo.is_empty() {
            return Err(Error::missing("repository name").into());
        }
        if repo.contains('/') {
            return Ok(repo.to_string());
        }
        let owner = self.current_user()?;
        Ok(format!("{}/{}", owner, repo))
    }
}

/// Build an owned argument vector
pub(crate) fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
