//! DNS record operations on top of the Cloudflare client
//!
//! Creation merges caller fields over defaults; updates fetch the current
//! record and send back the merged full record (PUT), so fields the patch
//! does not name keep their current values.

use crate::constants::dns::{DEFAULT_PROXIED, DEFAULT_TTL};
use crate::utils::table::{Column, render_table};
use anyhow::Result;
use opskit_cloudflare::{CloudflareClient, DnsRecord, RecordType};
use serde_json::{Map, Value, json};

const COLUMNS: [Column; 6] = [
    Column::new("ID", 32),
    Column::new("TYPE", 6),
    Column::new("NAME", 32),
    Column::new("CONTENT", 32),
    Column::new("TTL", 6),
    Column::new("PROXY", 5),
];

/// Fields of a record to create, as given on the command line
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub proxied: Option<bool>,
    pub priority: Option<u16>,
}

impl NewRecord {
    /// Only the fields that were actually supplied
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("type".to_string(), json!(self.record_type));
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("content".to_string(), json!(self.content));
        if let Some(ttl) = self.ttl {
            fields.insert("ttl".to_string(), json!(ttl));
        }
        if let Some(proxied) = self.proxied {
            fields.insert("proxied".to_string(), json!(proxied));
        }
        if let Some(priority) = self.priority {
            fields.insert("priority".to_string(), json!(priority));
        }
        fields
    }
}

/// Creation payload: `ttl: 1` and `proxied: false` with `fields` merged over
pub fn creation_payload(fields: Map<String, Value>) -> Value {
    let mut payload = Map::new();
    payload.insert("ttl".to_string(), json!(DEFAULT_TTL));
    payload.insert("proxied".to_string(), json!(DEFAULT_PROXIED));
    payload.extend(fields);
    Value::Object(payload)
}

/// Replacement payload: the current record's fields with `patch` merged over
pub fn merge_patch(current: &DnsRecord, patch: &Map<String, Value>) -> Value {
    let mut merged = Map::new();
    merged.insert("type".to_string(), json!(current.record_type));
    merged.insert("name".to_string(), json!(current.name));
    merged.insert("content".to_string(), json!(current.content));
    merged.insert("ttl".to_string(), json!(current.ttl));
    if let Some(proxied) = current.proxied {
        merged.insert("proxied".to_string(), json!(proxied));
    }
    if let Some(priority) = current.priority {
        merged.insert("priority".to_string(), json!(priority));
    }
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    Value::Object(merged)
}

pub async fn add_record(client: &CloudflareClient, fields: Map<String, Value>) -> Result<DnsRecord> {
    let payload = creation_payload(fields);
    Ok(client.create_record(&payload).await?)
}

/// Fetch record `id`, merge `patch` over it and replace it
pub async fn update_record(
    client: &CloudflareClient,
    id: &str,
    patch: &Map<String, Value>,
) -> Result<DnsRecord> {
    let current = client.get_record(id).await?;
    let payload = merge_patch(&current, patch);
    Ok(client.replace_record(id, &payload).await?)
}

/// Records as a fixed-width table
pub fn render_records(records: &[DnsRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.id.clone(),
                record.record_type.to_string(),
                record.name.clone(),
                record.content.clone(),
                ttl_label(record.ttl),
                proxy_label(record.proxied).to_string(),
            ]
        })
        .collect();
    render_table(&COLUMNS, &rows)
}

fn ttl_label(ttl: u32) -> String {
    if ttl == DEFAULT_TTL {
        "auto".to_string()
    } else {
        ttl.to_string()
    }
}

fn proxy_label(proxied: Option<bool>) -> &'static str {
    match proxied {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}
