//! Compose project scaffolding
//!
//! Lays out `<root>/dockerApp/<kind>/<name>/` with the files of an
//! [`AppKind`] template. The root defaults to the user's home directory.
//! An existing target directory is never touched.

pub mod compose;
pub mod templates;

pub use templates::{AppKind, RenderedFile};

use crate::commands::validators::{validate_app_name, validate_port};
use crate::constants::scaffold::NAMESPACE_DIR;
use crate::error::Error;
use crate::utils::{ensure_directory_exists, write_new_file};
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// A validated scaffolding request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub kind: AppKind,
    pub name: String,
    pub port: u16,
}

impl ScaffoldRequest {
    /// Validate raw `name`/`port` values; both must be present and non-empty
    pub fn new(kind: AppKind, name: &str, port: &str) -> Result<Self> {
        Ok(Self {
            kind,
            name: validate_app_name(name)?,
            port: validate_port(port)?,
        })
    }
}

/// What a successful scaffold produced
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scaffolder rooted at the current user's home directory
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(Self::new(home))
    }

    /// `<root>/dockerApp/<kind>/<name>`
    pub fn target_dir(&self, request: &ScaffoldRequest) -> PathBuf {
        self.root
            .join(NAMESPACE_DIR)
            .join(request.kind.dir_name())
            .join(&request.name)
    }

    /// Create the app directory and write the template files
    ///
    /// # Errors
    /// [`Error::DirectoryExists`] when the target is already present, in which
    /// case nothing is written. Any filesystem failure is returned as is.
    pub fn scaffold(&self, request: &ScaffoldRequest) -> Result<ScaffoldOutcome> {
        let directory = self.target_dir(request);
        if directory.exists() {
            return Err(Error::DirectoryExists { path: directory }.into());
        }

        // Render before touching the filesystem
        let rendered = request.kind.render(&request.name, request.port)?;

        tracing::info!(path = %directory.display(), kind = %request.kind, "scaffolding");
        ensure_directory_exists(&directory)?;

        let mut files = Vec::with_capacity(rendered.len());
        for file in rendered {
            let path = directory.join(file.file_name);
            write_new_file(&path, &file.contents)?;
            files.push(path);
        }

        for dir in request.kind.data_dirs() {
            ensure_directory_exists(&directory.join(dir))?;
        }

        Ok(ScaffoldOutcome { directory, files })
    }
}
