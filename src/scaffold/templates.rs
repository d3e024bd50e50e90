//! Built-in application templates

use super::compose::{ComposeFile, Service};
use crate::constants::scaffold::{COMPOSE_FILE, ENV_FILE};
use anyhow::Result;
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fmt;

/// Images the scaffolder knows how to set up
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppKind {
    /// WAHA, a self-hosted WhatsApp HTTP API gateway
    Waha,
    /// n8n workflow automation
    N8n,
}

/// A file produced by a template, relative to the app directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: &'static str,
    pub contents: String,
}

impl AppKind {
    /// Directory under the namespace holding apps of this kind
    pub fn dir_name(&self) -> &'static str {
        match self {
            AppKind::Waha => "waha",
            AppKind::N8n => "n8n",
        }
    }

    pub fn image(&self) -> &'static str {
        match self {
            AppKind::Waha => "devlikeapro/waha:latest",
            AppKind::N8n => "docker.n8n.io/n8nio/n8n:latest",
        }
    }

    /// Port the application listens on inside the container
    pub fn container_port(&self) -> u16 {
        match self {
            AppKind::Waha => 3000,
            AppKind::N8n => 5678,
        }
    }

    /// Bind-mounted directories created next to the compose file
    pub fn data_dirs(&self) -> &'static [&'static str] {
        match self {
            AppKind::Waha => &["sessions", "media"],
            AppKind::N8n => &["local-files"],
        }
    }

    /// Render every file of the template for `name`/`port`
    pub fn render(&self, name: &str, port: u16) -> Result<Vec<RenderedFile>> {
        let mut files = vec![RenderedFile {
            file_name: COMPOSE_FILE,
            contents: self.compose(name, port).to_yaml()?,
        }];
        if let Some(env) = self.env_file(name, port) {
            files.push(RenderedFile {
                file_name: ENV_FILE,
                contents: env,
            });
        }
        Ok(files)
    }

    fn compose(&self, name: &str, port: u16) -> ComposeFile {
        let mut service = Service {
            image: self.image().to_string(),
            container_name: name.to_string(),
            restart: "unless-stopped".to_string(),
            ports: vec![format!("{}:{}", port, self.container_port())],
            env_file: Vec::new(),
            environment: BTreeMap::new(),
            volumes: Vec::new(),
        };

        match self {
            AppKind::Waha => {
                service.env_file.push(ENV_FILE.to_string());
                service.volumes = vec![
                    "./sessions:/app/.sessions".to_string(),
                    "./media:/app/.media".to_string(),
                ];
                ComposeFile::single(name, service)
            }
            AppKind::N8n => {
                let data_volume = format!("{name}_data");
                let env = [
                    ("GENERIC_TIMEZONE", "UTC".to_string()),
                    ("N8N_HOST", "localhost".to_string()),
                    ("N8N_PORT", self.container_port().to_string()),
                    ("N8N_PROTOCOL", "http".to_string()),
                    ("WEBHOOK_URL", format!("http://localhost:{port}/")),
                ];
                service.environment = env
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect();
                service.volumes = vec![
                    format!("{data_volume}:/home/node/.n8n"),
                    "./local-files:/files".to_string(),
                ];
                ComposeFile::single(name, service).with_volume(data_volume)
            }
        }
    }

    fn env_file(&self, name: &str, port: u16) -> Option<String> {
        match self {
            AppKind::Waha => {
                let lines = [
                    format!("# WAHA instance '{name}'"),
                    format!("WHATSAPP_API_PORT={}", self.container_port()),
                    "WHATSAPP_API_HOSTNAME=localhost".to_string(),
                    format!("WAHA_BASE_URL=http://localhost:{port}"),
                    "WHATSAPP_DEFAULT_ENGINE=WEBJS".to_string(),
                    "WHATSAPP_RESTART_ALL_SESSIONS=true".to_string(),
                    "WAHA_DASHBOARD_ENABLED=true".to_string(),
                    "WAHA_PRINT_QR=false".to_string(),
                    "WAHA_LOG_LEVEL=info".to_string(),
                ];
                Some(lines.join("\n") + "\n")
            }
            AppKind::N8n => None,
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
