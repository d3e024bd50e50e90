//! opskit - small command-line utilities for routine DevOps chores
//!
//! - `dockerapp` scaffolds a compose project for a pre-selected image
//! - `ghx` manages repositories, secrets and variables through `gh`
//! - `cfdns` manages the DNS records of a Cloudflare zone

pub mod cli;
pub mod commands;
pub mod constants;
pub mod dns;
pub mod error;
pub mod exec;
pub mod github;
pub mod logging;
pub mod menu;
pub mod scaffold;
pub mod utils;

// Re-export commonly used types
pub use commands::Command;
pub use error::Error;
pub use exec::{CommandExecutor, SystemExecutor};
pub use github::{GhClient, RepositoryDescriptor};
