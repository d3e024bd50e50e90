//! DNS record operations

use crate::RECORDS_PER_PAGE;
use crate::client::CloudflareClient;
use crate::error::Result;
use crate::types::DnsRecord;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// Result of a delete call
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
}

impl CloudflareClient {
    /// List every record in the zone, following `result_info` paging
    pub async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let path = format!(
                "{}?page={}&per_page={}",
                self.records_path(),
                page,
                RECORDS_PER_PAGE
            );
            let (batch, info): (Vec<DnsRecord>, _) =
                self.request_with_info(Method::GET, &path, None).await?;
            let fetched = batch.len();
            records.extend(batch);

            let Some(info) = info else { break };
            let total_pages = info
                .total_pages
                .unwrap_or_else(|| info.total_count.div_ceil(info.per_page.max(1)));
            if fetched == 0 || page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(records)
    }

    pub async fn get_record(&self, id: &str) -> Result<DnsRecord> {
        let path = format!("{}/{}", self.records_path(), id);
        self.request(Method::GET, &path, None).await
    }

    pub async fn create_record(&self, payload: &Value) -> Result<DnsRecord> {
        self.request(Method::POST, &self.records_path(), Some(payload))
            .await
    }

    /// Replace a record wholesale (PUT)
    pub async fn replace_record(&self, id: &str, payload: &Value) -> Result<DnsRecord> {
        let path = format!("{}/{}", self.records_path(), id);
        self.request(Method::PUT, &path, Some(payload)).await
    }

    pub async fn delete_record(&self, id: &str) -> Result<DeletedRecord> {
        let path = format!("{}/{}", self.records_path(), id);
        self.request(Method::DELETE, &path, None).await
    }
}
