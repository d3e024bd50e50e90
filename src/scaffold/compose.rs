//! Typed model of the compose descriptor we write
//!
//! Only the handful of keys the templates use are modelled. Maps are
//! `BTreeMap` so the rendered YAML is deterministic.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct ComposeFile {
    pub services: BTreeMap<String, Service>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub volumes: BTreeMap<String, NamedVolume>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub image: String,
    pub container_name: String,
    pub restart: String,
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env_file: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

/// Top-level named volume with default driver settings (`{}`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct NamedVolume {}

impl ComposeFile {
    /// A descriptor holding a single service
    pub fn single(name: &str, service: Service) -> Self {
        let mut services = BTreeMap::new();
        services.insert(name.to_string(), service);
        Self {
            services,
            volumes: BTreeMap::new(),
        }
    }

    pub fn with_volume(mut self, name: impl Into<String>) -> Self {
        self.volumes.insert(name.into(), NamedVolume::default());
        self
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
