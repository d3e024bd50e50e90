//! Error type for Cloudflare API calls

use crate::types::ApiMessage;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The envelope came back with `success: false`
    Api { status: u16, errors: Vec<ApiMessage> },
    /// The request never produced a response
    Network(String),
    /// The response body was not a valid envelope
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    /// A successful envelope carried no `result`
    MissingResult,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api { status, errors } => {
                write!(f, "Cloudflare API request failed (HTTP {status})")?;
                if errors.is_empty() {
                    return write!(f, ": no error details returned");
                }
                for error in errors {
                    write!(f, "\n  [{}] {}", error.code, error.message)?;
                }
                Ok(())
            }
            Error::Network(msg) => write!(f, "Network error: {msg}"),
            Error::Decode { status, source } => {
                write!(f, "Failed to parse Cloudflare response (HTTP {status}): {source}")
            }
            Error::MissingResult => write!(f, "Cloudflare response is missing the result field"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
