//! Common test support utilities and fixtures
//!
//! Shared by the integration tests of the three binaries: a temporary
//! workspace, a runner for the compiled executables, a fake `gh` script and
//! in-memory clients.

#![allow(dead_code)]

use opskit::exec::ScriptedExecutor;
use opskit::github::GhClient;
use opskit_cloudflare::{ClientConfig, CloudflareClient, MemoryTransport};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::{fs, io};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A test workspace backed by a temporary directory
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn path_str(&self) -> &str {
        self.root.path().to_str().expect("Workspace path not UTF-8")
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }
}

/// Invocation of one of the compiled binaries
pub struct BinRun<'a> {
    program: &'a str,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    removed: Vec<String>,
    stdin: Option<String>,
}

impl<'a> BinRun<'a> {
    pub fn new(program: &'a str) -> Self {
        Self {
            program,
            args: Vec::new(),
            envs: Vec::new(),
            removed: Vec::new(),
            stdin: None,
        }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn env_remove(mut self, key: &str) -> Self {
        self.removed.push(key.to_string());
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn run(self) -> CliOutput {
        let mut cmd = Command::new(self.program);
        cmd.args(&self.args)
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in &self.removed {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to spawn binary");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = &self.stdin {
                stdin
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }
        let output = child.wait_with_output().expect("Failed to wait for binary");

        CliOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn dockerapp() -> BinRun<'static> {
    BinRun::new(env!("CARGO_BIN_EXE_dockerapp"))
}

pub fn ghx() -> BinRun<'static> {
    BinRun::new(env!("CARGO_BIN_EXE_ghx"))
}

pub fn cfdns() -> BinRun<'static> {
    BinRun::new(env!("CARGO_BIN_EXE_cfdns"))
}

/// Client over a [`ScriptedExecutor`]
pub fn scripted_gh() -> (Arc<ScriptedExecutor>, GhClient) {
    let executor = Arc::new(ScriptedExecutor::new());
    (executor.clone(), GhClient::new("gh", executor))
}

/// Client over a [`MemoryTransport`] for zone `zone`
pub fn memory_cloudflare() -> (Arc<MemoryTransport>, CloudflareClient) {
    let transport = Arc::new(MemoryTransport::new());
    let client = CloudflareClient::with_transport(
        ClientConfig::new("test-token", "zone").with_base_url("http://cf.test"),
        transport.clone(),
    );
    (transport, client)
}

/// Successful Cloudflare envelope around `result`
pub fn cf_ok(result: serde_json::Value) -> String {
    serde_json::json!({"success": true, "errors": [], "messages": [], "result": result}).to_string()
}

/// Fake `gh` that logs its arguments to `gh.log` and stdin to `gh.stdin`
///
/// `repo list` prints a fixed listing, `api user` prints `me`, and deleting
/// `me/locked` fails with exit code 1.
#[cfg(unix)]
pub fn fake_gh(workspace: &Workspace) -> PathBuf {
    let script = workspace.join("gh");
    let log = workspace.join("gh.log");
    let content = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1 $2" in
  "repo list")
    echo '[{{"name":"fresh","visibility":"PUBLIC","url":"https://github.com/me/fresh","updatedAt":"2099-01-01T00:00:00Z"}},{{"name":"stale","visibility":"PRIVATE","url":"https://github.com/me/stale","updatedAt":"2001-01-01T00:00:00Z"}}]'
    ;;
  "api user")
    echo "me"
    ;;
  "secret set")
    cat > "{log}.stdin"
    ;;
  "repo delete")
    if [ "$3" = "me/locked" ]; then
      echo "HTTP 403: Must have admin rights" >&2
      exit 1
    fi
    ;;
esac
exit 0
"#,
        log = log.display()
    );
    create_executable_script(&script, &content).expect("Failed to write fake gh");
    script
}

/// Lines the fake `gh` logged
pub fn gh_log(workspace: &Workspace) -> Vec<String> {
    fs::read_to_string(workspace.join("gh.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Create a script file with given content and make it executable
#[cfg(unix)]
pub fn create_executable_script(path: &Path, content: &str) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}
