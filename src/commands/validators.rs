//! Command argument validation utilities
//!
//! Domain rules that go beyond what clap checks while parsing. Failures are
//! reported as [`Error::MissingArgument`] or [`Error::InvalidArgument`].

use crate::error::Error;
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

fn app_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("app name pattern is valid")
    })
}

/// Validate a scaffolded application name
///
/// The name becomes a directory and a compose service name, so it must be a
/// single path component made of letters, digits, `.`, `_` and `-`.
pub fn validate_app_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::missing("--name").into());
    }
    if !app_name_pattern().is_match(name) {
        return Err(Error::invalid(
            "--name",
            name,
            "use letters, digits, '.', '_' or '-', starting with a letter or digit",
        )
        .into());
    }
    Ok(name.to_string())
}

/// Validate a host port
pub fn validate_port(port: &str) -> Result<u16> {
    let port = port.trim();
    if port.is_empty() {
        return Err(Error::missing("--port").into());
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(Error::invalid("--port", port, "expected a number between 1 and 65535").into()),
        Ok(value) => Ok(value),
    }
}

/// Validate the month count of an update-time window
pub fn validate_months(argument: &str, months: Option<u32>) -> Result<()> {
    if months == Some(0) {
        return Err(Error::invalid(argument, "0", "month count must be at least 1").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_missing(result: Result<impl std::fmt::Debug>) -> bool {
        matches!(
            result.unwrap_err().downcast_ref::<Error>(),
            Some(Error::MissingArgument { .. })
        )
    }

    fn is_invalid(result: Result<impl std::fmt::Debug>) -> bool {
        matches!(
            result.unwrap_err().downcast_ref::<Error>(),
            Some(Error::InvalidArgument { .. })
        )
    }

    #[test]
    fn test_validate_app_name() {
        assert_eq!(validate_app_name("my-bot").unwrap(), "my-bot");
        assert_eq!(validate_app_name(" flows_2 ").unwrap(), "flows_2");
        assert!(is_missing(validate_app_name("")));
        assert!(is_missing(validate_app_name("   ")));
        assert!(is_invalid(validate_app_name("../escape")));
        assert!(is_invalid(validate_app_name("a/b")));
        assert!(is_invalid(validate_app_name(".hidden")));
    }

    #[test]
    fn test_validate_port() {
        assert_eq!(validate_port("3000").unwrap(), 3000);
        assert_eq!(validate_port("65535").unwrap(), 65535);
        assert!(is_missing(validate_port("")));
        assert!(is_invalid(validate_port("0")));
        assert!(is_invalid(validate_port("70000")));
        assert!(is_invalid(validate_port("http")));
    }

    #[test]
    fn test_validate_months() {
        assert!(validate_months("--updated-within", None).is_ok());
        assert!(validate_months("--updated-within", Some(6)).is_ok());
        assert!(validate_months("--updated-within", Some(0)).is_err());
    }
}
