//! Interactive menu for `ghx`
//!
//! A blocking read-line loop over any `BufRead`/`Write` pair. Failures of a
//! single operation are reported and the loop carries on; `0`, `q` or end of
//! input leave it.

use crate::commands::repo::render_repositories;
use crate::commands::secret::render_secrets;
use crate::commands::variable::render_variables;
use crate::github::{CreateRepoParams, GhClient, Visibility};
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use std::io::{BufRead, Write};

const ENTRIES: [(&str, &str); 8] = [
    ("1", "List repositories"),
    ("2", "Create repository"),
    ("3", "Delete repository"),
    ("4", "List secrets"),
    ("5", "Set secret"),
    ("6", "List variables"),
    ("7", "Set variable"),
    ("0", "Exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ListRepos,
    CreateRepo,
    DeleteRepo,
    ListSecrets,
    SetSecret,
    ListVariables,
    SetVariable,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::ListRepos),
            "2" => Some(Choice::CreateRepo),
            "3" => Some(Choice::DeleteRepo),
            "4" => Some(Choice::ListSecrets),
            "5" => Some(Choice::SetSecret),
            "6" => Some(Choice::ListVariables),
            "7" => Some(Choice::SetVariable),
            "0" | "q" | "Q" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    client: &'a GhClient,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(client: &'a GhClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let choice = match Choice::parse(&line) {
                Some(Choice::Exit) => return Ok(()),
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "{}", "Invalid choice".yellow())?;
                    continue;
                }
            };

            tracing::debug!(?choice, "menu selection");
            if let Err(e) = self.dispatch(choice) {
                writeln!(self.output, "{} {:#}", "Error:".red(), e)?;
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "GitHub".bold())?;
        for (key, label) in ENTRIES {
            writeln!(self.output, "  {}) {}", key, label)?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<()> {
        match choice {
            Choice::ListRepos => {
                let repos = self.client.list_repositories(None)?;
                if repos.is_empty() {
                    writeln!(self.output, "No repositories found")?;
                } else {
                    writeln!(self.output, "{}", render_repositories(&repos))?;
                    writeln!(self.output, "Total: {} repositories", repos.len())?;
                }
            }
            Choice::CreateRepo => {
                let name = self.prompt("Repository name")?;
                let visibility = self.prompt("Visibility [public/private/internal] (private)")?;
                let visibility = if visibility.is_empty() {
                    Visibility::default()
                } else {
                    Visibility::from_str(&visibility, true)
                        .map_err(|_| anyhow::anyhow!("Unknown visibility '{}'", visibility))?
                };
                let description = self.prompt("Description (optional)")?;

                let mut params = CreateRepoParams::new(name, visibility);
                if !description.is_empty() {
                    params = params.with_description(description);
                }
                let output = self.client.create_repository(&params)?;
                writeln!(self.output, "{} {}", "Created".green(), output)?;
            }
            Choice::DeleteRepo => {
                let repo = self.prompt("Repository (owner/name or name)")?;
                let repo = self.client.resolve_repo(&repo)?;
                let answer = self.prompt(&format!("Delete {}? This cannot be undone [y/N]", repo))?;
                if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                    self.client.delete_repository(&repo)?;
                    writeln!(self.output, "{} {}", "Deleted".green(), repo)?;
                } else {
                    writeln!(self.output, "Cancelled")?;
                }
            }
            Choice::ListSecrets => {
                let repo = self.prompt("Repository")?;
                let secrets = self.client.list_secrets(&repo)?;
                if secrets.is_empty() {
                    writeln!(self.output, "No secrets found")?;
                } else {
                    writeln!(self.output, "{}", render_secrets(&secrets))?;
                }
            }
            Choice::SetSecret => {
                let repo = self.prompt("Repository")?;
                let name = self.prompt("Secret name")?;
                let value = self.prompt_value("Secret value")?;
                let repo = self.client.set_secret(&repo, &name, &value)?;
                writeln!(self.output, "{} secret {} on {}", "Set".green(), name, repo)?;
            }
            Choice::ListVariables => {
                let repo = self.prompt("Repository")?;
                let variables = self.client.list_variables(&repo)?;
                if variables.is_empty() {
                    writeln!(self.output, "No variables found")?;
                } else {
                    writeln!(self.output, "{}", render_variables(&variables))?;
                }
            }
            Choice::SetVariable => {
                let repo = self.prompt("Repository")?;
                let name = self.prompt("Variable name")?;
                let value = self.prompt_value("Variable value")?;
                let repo = self.client.set_variable(&repo, &name, &value)?;
                writeln!(self.output, "{} variable {} on {}", "Set".green(), name, repo)?;
            }
            Choice::Exit => {}
        }
        Ok(())
    }

    /// Ask for one line; end of input counts as an empty answer
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Like [`prompt`](Self::prompt) but keeps surrounding whitespace
    fn prompt_value(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self.read_raw_line()?.unwrap_or_default())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.read_raw_line()?.map(|line| line.trim().to_string()))
    }

    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Remove one trailing `\n` or `\r\n`, leaving every other byte as typed
pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
