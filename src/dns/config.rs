//! Credentials and zone for the DNS wrapper

use crate::constants::dns::{TOKEN_ENV, ZONE_ENV};
use crate::error::Error;
use anyhow::Result;
use opskit_cloudflare::ClientConfig;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct DnsConfig {
    pub api_token: String,
    pub zone_id: String,
}

impl DnsConfig {
    pub fn new(api_token: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            zone_id: zone_id.into(),
        }
    }

    /// Flags first, then the process environment
    pub fn resolve(token: Option<String>, zone: Option<String>) -> Result<Self> {
        Self::resolve_with(token, zone, |key| std::env::var(key).ok())
    }

    /// Flags first, then `lookup`; empty values count as absent
    pub fn resolve_with(
        token: Option<String>,
        zone: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let pick = |flag: Option<String>, key: &str, flag_name: &str| {
            flag.or_else(|| lookup(key))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing(format!("{key} (or {flag_name})")))
        };

        let api_token = pick(token, TOKEN_ENV, "--token")?;
        let zone_id = pick(zone, ZONE_ENV, "--zone")?;
        Ok(Self { api_token, zone_id })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_token.clone(), self.zone_id.clone())
    }
}

impl fmt::Debug for DnsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsConfig")
            .field("api_token", &"***")
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_from_lookup() {
        let vars = env(&[(TOKEN_ENV, "tok"), (ZONE_ENV, "zone")]);
        let config = DnsConfig::resolve_with(None, None, |k| vars.get(k).cloned()).unwrap();
        assert_eq!(config, DnsConfig::new("tok", "zone"));
    }

    #[test]
    fn test_flags_take_precedence() {
        let vars = env(&[(TOKEN_ENV, "env-tok"), (ZONE_ENV, "env-zone")]);
        let config = DnsConfig::resolve_with(
            Some("flag-tok".to_string()),
            None,
            |k| vars.get(k).cloned(),
        )
        .unwrap();
        assert_eq!(config.api_token, "flag-tok");
        assert_eq!(config.zone_id, "env-zone");
    }

    #[test]
    fn test_missing_zone_is_reported() {
        let vars = env(&[(TOKEN_ENV, "tok"), (ZONE_ENV, "  ")]);
        let err = DnsConfig::resolve_with(None, None, |k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains(ZONE_ENV));
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = DnsConfig::new("super-secret", "zone");
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
