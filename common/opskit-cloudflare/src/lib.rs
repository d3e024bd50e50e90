//! Cloudflare DNS API client library
//!
//! This library wraps the parts of Cloudflare's v4 REST API needed to manage
//! the DNS records of a single zone.
//!
//! ## Modules
//!
//! - [`client`]: Authenticated client and envelope handling
//! - [`records`]: DNS record operations
//! - [`transport`]: HTTP transport trait, reqwest and in-memory implementations
//! - [`types`]: Envelope and record types

mod client;
mod error;
mod records;
mod transport;
mod types;

/// Base URL of Cloudflare's v4 API
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Page size used when listing DNS records
pub const RECORDS_PER_PAGE: u32 = 100;

// Re-export public API
pub use client::{ClientConfig, CloudflareClient};
pub use error::{Error, Result};
pub use records::DeletedRecord;
pub use reqwest::Method;
pub use transport::{HttpRequest, HttpResponse, MemoryTransport, ReqwestTransport, Transport};
pub use types::{ApiMessage, DnsRecord, Envelope, RecordType, ResultInfo};
