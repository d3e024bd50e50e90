//! DNS record commands: list, get, add, update, delete

use super::Command;
use crate::dns::{NewRecord, add_record, parse_assignments, render_records, update_record};
use crate::error::Error;
use crate::exec::Logger;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use opskit_cloudflare::{CloudflareClient, DnsRecord, RecordType};

/// List every record of the zone, optionally only those of one type
#[derive(Default)]
pub struct ListRecordsCommand {
    pub record_type: Option<RecordType>,
    pub json: bool,
}

impl ListRecordsCommand {
    /// Records to show, in API order
    pub async fn fetch(&self, client: &CloudflareClient) -> Result<Vec<DnsRecord>> {
        let mut records = client.list_records().await?;
        if let Some(wanted) = &self.record_type {
            records.retain(|record| &record.record_type == wanted);
        }
        Ok(records)
    }
}

#[async_trait]
impl Command for ListRecordsCommand {
    type Context = CloudflareClient;

    async fn execute(&self, client: &CloudflareClient) -> Result<()> {
        let records = self.fetch(client).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            println!("{}", "No DNS records found".yellow());
            return Ok(());
        }

        println!("{}", render_records(&records));
        println!();
        println!("{}", format!("Total: {} records", records.len()).green());
        Ok(())
    }
}

pub struct GetRecordCommand {
    pub id: String,
}

#[async_trait]
impl Command for GetRecordCommand {
    type Context = CloudflareClient;

    async fn execute(&self, client: &CloudflareClient) -> Result<()> {
        let record = client.get_record(&self.id).await?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}

/// Create a record and print its id
pub struct AddRecordCommand {
    pub record: NewRecord,
}

#[async_trait]
impl Command for AddRecordCommand {
    type Context = CloudflareClient;

    async fn execute(&self, client: &CloudflareClient) -> Result<()> {
        let created = add_record(client, self.record.clone().into_fields()).await?;
        tracing::info!(id = %created.id, name = %created.name, "record created");
        println!("{}", created.id);
        Ok(())
    }
}

/// Apply `key=value` fields to an existing record
pub struct UpdateRecordCommand {
    pub id: String,
    pub fields: Vec<String>,
}

#[async_trait]
impl Command for UpdateRecordCommand {
    type Context = CloudflareClient;

    async fn execute(&self, client: &CloudflareClient) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::missing("at least one key=value field").into());
        }
        let patch = parse_assignments(&self.fields)?;
        let updated = update_record(client, &self.id, &patch).await?;
        Logger.success(
            &updated.id,
            &format!(
                "Updated {} {} -> {}",
                updated.record_type, updated.name, updated.content
            ),
        );
        Ok(())
    }
}

pub struct DeleteRecordCommand {
    pub id: String,
}

#[async_trait]
impl Command for DeleteRecordCommand {
    type Context = CloudflareClient;

    async fn execute(&self, client: &CloudflareClient) -> Result<()> {
        let deleted = client.delete_record(&self.id).await?;
        println!("{}", deleted.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opskit_cloudflare::{ClientConfig, MemoryTransport, Method};
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryTransport>, CloudflareClient) {
        let transport = Arc::new(MemoryTransport::new());
        let client = CloudflareClient::with_transport(
            ClientConfig::new("token", "zone").with_base_url("http://cf.test"),
            transport.clone(),
        );
        (transport, client)
    }

    fn ok(result: serde_json::Value) -> String {
        json!({"success": true, "result": result}).to_string()
    }

    #[tokio::test]
    async fn test_add_record_command_posts_defaults() {
        let (transport, client) = setup();
        transport.push_response(
            200,
            ok(json!({"id": "abc123", "type": "A", "name": "test.domain.com", "content": "1.1.1.1", "ttl": 1, "proxied": true})),
        );

        let command = AddRecordCommand {
            record: NewRecord {
                record_type: RecordType::A,
                name: "test.domain.com".to_string(),
                content: "1.1.1.1".to_string(),
                ttl: None,
                proxied: Some(true),
                priority: None,
            },
        };
        command.execute(&client).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].json_body().unwrap(),
            json!({"type": "A", "name": "test.domain.com", "content": "1.1.1.1", "ttl": 1, "proxied": true})
        );
    }

    #[tokio::test]
    async fn test_update_record_command_gets_then_puts_merged() {
        let (transport, client) = setup();
        transport.push_response(
            200,
            ok(json!({"id": "abc123", "type": "A", "name": "test.domain.com", "content": "1.1.1.1", "ttl": 1, "proxied": false})),
        );
        transport.push_response(
            200,
            ok(json!({"id": "abc123", "type": "A", "name": "test.domain.com", "content": "8.8.8.8", "ttl": 1, "proxied": true})),
        );

        let command = UpdateRecordCommand {
            id: "abc123".to_string(),
            fields: vec!["content=8.8.8.8".to_string(), "proxied=true".to_string()],
        };
        command.execute(&client).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].method, Method::PUT);
        assert!(requests[1].url.ends_with("/zones/zone/dns_records/abc123"));
        assert_eq!(
            requests[1].json_body().unwrap(),
            json!({"type": "A", "name": "test.domain.com", "content": "8.8.8.8", "ttl": 1, "proxied": true})
        );
    }

    #[tokio::test]
    async fn test_update_record_command_without_fields() {
        let (transport, client) = setup();
        let command = UpdateRecordCommand {
            id: "abc123".to_string(),
            fields: vec![],
        };
        assert!(command.execute(&client).await.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_record_command_api_failure() {
        let (transport, client) = setup();
        transport.push_response(
            404,
            json!({"success": false, "result": null, "errors": [{"code": 81044, "message": "Record not found"}]})
                .to_string(),
        );

        let command = DeleteRecordCommand {
            id: "missing".to_string(),
        };
        let err = command.execute(&client).await.unwrap_err();
        assert!(err.to_string().contains("Record not found"));
        assert_eq!(transport.requests()[0].method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_list_records_command_filters_by_type() {
        let (transport, client) = setup();
        transport.push_response(
            200,
            json!({
                "success": true,
                "result": [
                    {"id": "r1", "type": "A", "name": "a.example.com", "content": "1.1.1.1", "ttl": 1, "proxied": false},
                    {"id": "r2", "type": "TXT", "name": "example.com", "content": "v=spf1 -all", "ttl": 300}
                ],
                "result_info": {"page": 1, "per_page": 100, "total_pages": 1, "count": 2, "total_count": 2}
            })
            .to_string(),
        );

        let command = ListRecordsCommand {
            record_type: Some(RecordType::Txt),
            json: true,
        };
        let records = command.fetch(&client).await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2"]);
    }

    #[tokio::test]
    async fn test_list_records_command_without_type_keeps_all() {
        let (transport, client) = setup();
        transport.push_response(
            200,
            json!({
                "success": true,
                "result": [
                    {"id": "r1", "type": "A", "name": "a.example.com", "content": "1.1.1.1", "ttl": 1, "proxied": false},
                    {"id": "r2", "type": "TXT", "name": "example.com", "content": "v=spf1 -all", "ttl": 300}
                ],
                "result_info": {"page": 1, "per_page": 100, "total_pages": 1, "count": 2, "total_count": 2}
            })
            .to_string(),
        );

        let records = ListRecordsCommand::default().fetch(&client).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_get_record_command() {
        let (transport, client) = setup();
        transport.push_response(
            200,
            ok(json!({"id": "r1", "type": "CNAME", "name": "www.example.com", "content": "example.com", "ttl": 1, "proxied": true})),
        );

        let command = GetRecordCommand {
            id: "r1".to_string(),
        };
        assert!(command.execute(&client).await.is_ok());
        assert!(transport.requests()[0].url.ends_with("/dns_records/r1"));
    }
}
