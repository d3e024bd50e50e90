//! Command implementations for the three utilities

pub mod base;
pub mod dns;
pub mod repo;
pub mod scaffold;
pub mod secret;
pub mod validators;
pub mod variable;

pub use base::Command;
pub use dns::{
    AddRecordCommand, DeleteRecordCommand, GetRecordCommand, ListRecordsCommand,
    UpdateRecordCommand,
};
pub use repo::{CreateRepoCommand, DeleteRepoCommand, ListReposCommand};
pub use scaffold::ScaffoldCommand;
pub use secret::{DeleteSecretCommand, ListSecretsCommand, SetSecretCommand};
pub use variable::{DeleteVariableCommand, ListVariablesCommand, SetVariableCommand};
