//! Scaffold command implementation

use super::Command;
use crate::constants::scaffold::NAMESPACE_DIR;
use crate::exec::Logger;
use crate::scaffold::{AppKind, ScaffoldRequest, Scaffolder};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Create `<root>/dockerApp/<kind>/<name>` from a template
pub struct ScaffoldCommand {
    pub kind: AppKind,
    pub name: String,
    pub port: String,
}

#[async_trait]
impl Command for ScaffoldCommand {
    type Context = Scaffolder;

    async fn execute(&self, scaffolder: &Scaffolder) -> Result<()> {
        let request = ScaffoldRequest::new(self.kind, &self.name, &self.port)?;
        let outcome = scaffolder.scaffold(&request)?;

        let logger = Logger;
        let subject = format!("{}/{}/{}", NAMESPACE_DIR, request.kind, request.name);
        for file in &outcome.files {
            logger.info(&subject, &format!("Wrote {}", file.display()));
        }
        logger.success(&subject, "Scaffold created");
        println!(
            "{} cd {} && docker compose up -d",
            "Next:".bold(),
            outcome.directory.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_scaffold_command_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp_dir.path());
        let command = ScaffoldCommand {
            kind: AppKind::N8n,
            name: "flows".to_string(),
            port: "5678".to_string(),
        };

        command.execute(&scaffolder).await.unwrap();
        assert!(temp_dir.path().join("dockerApp/n8n/flows/compose.yaml").is_file());
        assert!(!temp_dir.path().join("dockerApp/n8n/flows/.env").exists());
    }

    #[tokio::test]
    async fn test_scaffold_command_missing_port() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp_dir.path());
        let command = ScaffoldCommand {
            kind: AppKind::Waha,
            name: "bot".to_string(),
            port: "".to_string(),
        };

        let err = command.execute(&scaffolder).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingArgument { .. })
        ));
        assert!(!temp_dir.path().join("dockerApp").exists());
    }
}
