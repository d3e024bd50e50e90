//! GitHub Actions variables

use super::client::{GhClient, args};
use super::secrets::required;
use super::types::Variable;
use crate::constants::github::VARIABLE_JSON_FIELDS;
use anyhow::Result;

impl GhClient {
    pub fn list_variables(&self, repo: &str) -> Result<Vec<Variable>> {
        let repo = self.resolve_repo(repo)?;
        self.run_json(
            &args(&["variable", "list", "--repo", &repo, "--json", VARIABLE_JSON_FIELDS]),
            "variable list",
        )
    }

    pub fn set_variable(&self, repo: &str, name: &str, value: &str) -> Result<String> {
        let name = required(name, "variable name")?;
        let repo = self.resolve_repo(repo)?;
        self.run(&args(&["variable", "set", name, "--body", value, "--repo", &repo]))?;
        Ok(repo)
    }

    pub fn delete_variable(&self, repo: &str, name: &str) -> Result<String> {
        let name = required(name, "variable name")?;
        let repo = self.resolve_repo(repo)?;
        self.run(&args(&["variable", "delete", name, "--repo", &repo]))?;
        Ok(repo)
    }
}
