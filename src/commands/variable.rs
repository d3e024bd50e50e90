//! GitHub Actions variable commands

use super::Command;
use super::repo::format_timestamp;
use crate::exec::Logger;
use crate::github::{GhClient, Variable};
use crate::utils::table::{Column, render_table};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

const COLUMNS: [Column; 3] = [
    Column::new("NAME", 32),
    Column::new("VALUE", 40),
    Column::new("UPDATED", 16),
];

pub fn render_variables(variables: &[Variable]) -> String {
    let rows: Vec<Vec<String>> = variables
        .iter()
        .map(|variable| {
            vec![
                variable.name.clone(),
                variable.value.clone(),
                format_timestamp(variable.updated_at),
            ]
        })
        .collect();
    render_table(&COLUMNS, &rows)
}

pub struct ListVariablesCommand {
    pub repo: String,
    pub json: bool,
}

#[async_trait]
impl Command for ListVariablesCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let variables = client.list_variables(&self.repo)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&variables)?);
        } else if variables.is_empty() {
            println!("{}", "No variables found".yellow());
        } else {
            println!("{}", render_variables(&variables));
        }
        Ok(())
    }
}

pub struct SetVariableCommand {
    pub repo: String,
    pub name: String,
    pub value: String,
}

#[async_trait]
impl Command for SetVariableCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let repo = client.set_variable(&self.repo, &self.name, &self.value)?;
        Logger.success(&repo, &format!("Variable {} set", self.name.trim()));
        Ok(())
    }
}

pub struct DeleteVariableCommand {
    pub repo: String,
    pub name: String,
}

#[async_trait]
impl Command for DeleteVariableCommand {
    type Context = GhClient;

    async fn execute(&self, client: &GhClient) -> Result<()> {
        let repo = client.delete_variable(&self.repo, &self.name)?;
        Logger.success(&repo, &format!("Variable {} deleted", self.name.trim()));
        Ok(())
    }
}
