//! GitHub Actions secret commands

use super::Command;
use super::repo::format_timestamp;
use crate::exec::Logger;
use crate::github::{GhClient, Secret};
use crate::utils::table::{Column, render_table};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

const COLUMNS: [Column; 2] = [Column::new("NAME", 40), Column::new("UPDATED", 16)];

pub fn render_secrets(secrets: &[Secret]) -> String {
    let rows: Vec<Vec<String>> = secrets
        .iter()
        .map(|secret| vec![secret.name.clone(), format_timestamp(secret.updated_at)])
        .collect();
    render_table(&COLUMNS, &rows)
}

/// List secret names of a repository; values are never readable
pub struct ListSecretsCommand {
    pub repo: String,
    pub json: bool,
}

#[async_trait]
impl Command for ListSecretsCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let secrets = client.list_secrets(&self.repo)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&secrets)?);
        } else if secrets.is_empty() {
            println!("{}", "No secrets found".yellow());
        } else {
            println!("{}", render_secrets(&secrets));
        }
        Ok(())
    }
}

pub struct SetSecretCommand {
    pub repo: String,
    pub name: String,
    pub value: String,
}

#[async_trait]
impl Command for SetSecretCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let repo = client.set_secret(&self.repo, &self.name, &self.value)?;
        Logger.success(&repo, &format!("Secret {} set", self.name.trim()));
        Ok(())
    }
}

pub struct DeleteSecretCommand {
    pub repo: String,
    pub name: String,
}

#[async_trait]
impl Command for DeleteSecretCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let repo = client.delete_secret(&self.repo, &self.name)?;
        Logger.success(&repo, &format!("Secret {} deleted", self.name.trim()));
        Ok(())
    }
}
