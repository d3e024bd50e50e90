//! GitHub operations through the `gh` command-line tool
//!
//! Every operation is a fixed argument vector for `gh`, executed through
//! [`crate::exec::run`]; structured output is requested with `--json` and
//! parsed into the types in [`types`].
//!
//! - [`client`]: `GhClient`, owner resolution, JSON helpers
//! - [`repositories`]: list/create/delete repositories
//! - [`secrets`], [`variables`]: Actions secrets and variables
//! - [`types`]: data structures

pub mod client;
pub mod repositories;
pub mod secrets;
pub mod types;
pub mod variables;

// Re-export commonly used items for convenience
pub use client::GhClient;
pub use types::{
    CreateRepoParams, RepositoryDescriptor, Secret, SortOrder, Variable, Visibility,
};
