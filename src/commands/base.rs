//! Base trait for the command pattern

use anyhow::Result;

/// Trait that all commands implement
///
/// Each utility has its own context: the [`Scaffolder`](crate::scaffold::Scaffolder)
/// for `dockerapp`, the [`GhClient`](crate::github::GhClient) for `ghx` and the
/// Cloudflare client for `cfdns`.
#[async_trait::async_trait]
pub trait Command {
    type Context: Sync;

    /// Execute the command with the given context
    async fn execute(&self, context: &Self::Context) -> Result<()>;
}
