//! Cloudflare DNS record management
//!
//! - [`config`]: credentials and zone, resolved once by the binary
//! - [`patch`]: `key=value` update arguments
//! - [`records`]: create/update merge rules and table rendering

pub mod config;
pub mod patch;
pub mod records;

pub use config::DnsConfig;
pub use patch::parse_assignments;
pub use records::{NewRecord, add_record, merge_patch, render_records, update_record};
