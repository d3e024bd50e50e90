//! External command execution
//!
//! ## Sub-modules
//!
//! - [`executor`]: the [`CommandExecutor`] capability, its process-backed
//!   implementation and the [`run`] contract built on top of it
//! - [`memory`]: scripted in-memory executor for tests
//! - [`common`]: `Logger` for consistent user-facing output

pub mod common;
pub mod executor;
pub mod memory;

pub use common::Logger;
pub use executor::{CapturedOutput, CommandExecutor, SystemExecutor, run};
pub use memory::{Invocation, ScriptedExecutor};
