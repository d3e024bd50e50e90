//! Repository operations

use super::client::{GhClient, args};
use super::types::{CreateRepoParams, RepositoryDescriptor};
use crate::constants::github::{REPO_JSON_FIELDS, REPO_LIST_LIMIT};
use crate::error::Error;
use anyhow::Result;

impl GhClient {
    /// List repositories of `owner` (the authenticated user when `None`),
    /// capped at [`REPO_LIST_LIMIT`] entries
    pub fn list_repositories(&self, owner: Option<&str>) -> Result<Vec<RepositoryDescriptor>> {
        let mut argv = args(&["repo", "list"]);
        if let Some(owner) = owner.map(str::trim).filter(|o| !o.is_empty()) {
            argv.push(owner.to_string());
        }
        argv.extend(args(&["--limit", &REPO_LIST_LIMIT.to_string(), "--json", REPO_JSON_FIELDS]));

        self.run_json(&argv, "repository list")
    }

    /// Create a repository and return gh's output (the new repository URL)
    pub fn create_repository(&self, params: &CreateRepoParams) -> Result<String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(Error::missing("repository name").into());
        }

        let mut argv = args(&["repo", "create", name, params.visibility.flag()]);
        if let Some(description) = params.description.as_deref().filter(|d| !d.is_empty()) {
            argv.push("--description".to_string());
            argv.push(description.to_string());
        }

        self.run(&argv)
    }

    /// Delete a repository, returning the resolved `owner/name`
    pub fn delete_repository(&self, repo: &str) -> Result<String> {
        let full_name = self.resolve_repo(repo)?;
        self.run(&args(&["repo", "delete", &full_name, "--yes"]))?;
        Ok(full_name)
    }
}
