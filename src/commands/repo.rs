//! Repository commands: list, create, delete

use super::Command;
use crate::exec::Logger;
use crate::github::{CreateRepoParams, GhClient, RepositoryDescriptor};
use crate::utils::filters::RepoQuery;
use crate::utils::table::{Column, render_table};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use colored::*;

const COLUMNS: [Column; 4] = [
    Column::new("NAME", 32),
    Column::new("VISIBILITY", 10),
    Column::new("UPDATED", 16),
    Column::new("URL", 60),
];

/// Format an optional timestamp as `YYYY-MM-DD HH:MM`, or `-`
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_repositories(repositories: &[RepositoryDescriptor]) -> String {
    let rows: Vec<Vec<String>> = repositories
        .iter()
        .map(|repo| {
            vec![
                repo.name.clone(),
                repo.visibility.to_lowercase(),
                format_timestamp(repo.updated_at),
                repo.url.clone(),
            ]
        })
        .collect();
    render_table(&COLUMNS, &rows)
}

/// List repositories with optional filtering and ordering
#[derive(Default)]
pub struct ListReposCommand {
    pub owner: Option<String>,
    pub query: RepoQuery,
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListReposCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let fetched = client.list_repositories(self.owner.as_deref())?;
        let repositories = self.query.apply(&fetched, Utc::now());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&repositories)?);
            return Ok(());
        }

        if repositories.is_empty() {
            let msg = if fetched.is_empty() {
                "No repositories found".to_string()
            } else {
                format!("No repositories match the filters ({} fetched)", fetched.len())
            };
            println!("{}", msg.yellow());
            return Ok(());
        }

        println!("{}", render_repositories(&repositories));
        println!();
        println!(
            "{}",
            format!("Total: {} repositories", repositories.len()).green()
        );
        Ok(())
    }
}

pub struct CreateRepoCommand {
    pub params: CreateRepoParams,
}

#[async_trait]
impl Command for CreateRepoCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let output = client.create_repository(&self.params)?;
        let detail = if output.is_empty() {
            format!("Created {} repository", self.params.visibility)
        } else {
            format!("Created {} repository: {}", self.params.visibility, output)
        };
        Logger.success(&self.params.name, &detail);
        Ok(())
    }
}

pub struct DeleteRepoCommand {
    pub repo: String,
}

#[async_trait]
impl Command for DeleteRepoCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let full_name = client.delete_repository(&self.repo)?;
        Logger.success(&full_name, "Repository deleted");
        Ok(())
    }
}
