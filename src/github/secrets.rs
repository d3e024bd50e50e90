//! GitHub Actions secrets
//!
//! Secret values never appear on the command line: `gh secret set` reads
//! them from stdin.

use super::client::{GhClient, args};
use super::types::Secret;
use crate::constants::github::SECRET_JSON_FIELDS;
use crate::error::Error;
use anyhow::Result;

impl GhClient {
    pub fn list_secrets(&self, repo: &str) -> Result<Vec<Secret>> {
        let repo = self.resolve_repo(repo)?;
        self.run_json(
            &args(&["secret", "list", "--repo", &repo, "--json", SECRET_JSON_FIELDS]),
            "secret list",
        )
    }

    /// Set secret `name` on `repo`; returns the resolved `owner/name`
    pub fn set_secret(&self, repo: &str, name: &str, value: &str) -> Result<String> {
        let name = required(name, "secret name")?;
        let repo = self.resolve_repo(repo)?;
        self.run_with_input(&args(&["secret", "set", name, "--repo", &repo]), value)?;
        Ok(repo)
    }

    pub fn delete_secret(&self, repo: &str, name: &str) -> Result<String> {
        let name = required(name, "secret name")?;
        let repo = self.resolve_repo(repo)?;
        self.run(&args(&["secret", "delete", name, "--repo", &repo]))?;
        Ok(repo)
    }
}

pub(crate) fn required<'a>(value: &'a str, argument: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::missing(argument).into());
    }
    Ok(value)
}
