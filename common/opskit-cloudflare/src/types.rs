//! Cloudflare API types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Response wrapper returned by every Cloudflare endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMessage {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
}

/// DNS record as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// Record types this toolkit creates; anything else the zone holds is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Txt,
    Mx,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
            RecordType::Mx => "MX",
            RecordType::Other(other) => other,
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::Aaaa,
            "CNAME" => RecordType::Cname,
            "TXT" => RecordType::Txt,
            "MX" => RecordType::Mx,
            _ => RecordType::Other(value),
        }
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing: only the supported types are accepted
impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match RecordType::from(s.to_string()) {
            RecordType::Other(other) => Err(format!(
                "unsupported record type '{other}' (expected one of A, AAAA, CNAME, TXT, MX)"
            )),
            known => Ok(known),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_parse_is_case_insensitive() {
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::Cname);
        assert_eq!("AAAA".parse::<RecordType>().unwrap(), RecordType::Aaaa);
        assert!("SRV".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_unknown_record_type_deserializes_as_other() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"id":"r1","type":"SRV","name":"_sip._tcp.example.com","content":"sip.example.com","ttl":300}"#,
        )
        .unwrap();
        assert_eq!(record.record_type, RecordType::Other("SRV".to_string()));
        assert_eq!(record.proxied, None);
    }

    #[test]
    fn test_record_type_serializes_uppercase() {
        let value = serde_json::to_value(RecordType::Mx).unwrap();
        assert_eq!(value, serde_json::json!("MX"));
    }

    #[test]
    fn test_envelope_defaults_missing_lists() {
        let envelope: Envelope<Vec<DnsRecord>> =
            serde_json::from_str(r#"{"success":true,"result":[]}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.errors.is_empty());
        assert!(envelope.result_info.is_none());
    }
}
