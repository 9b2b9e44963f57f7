//! Spaceship DnsRecordProvider trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::normalize_domain_name;
use crate::traits::DnsRecordProvider;
use crate::types::Record;

use super::convert::{record_to_wire, wire_to_record};
use super::{ListResponse, PROVIDER_NAME, SpaceshipProvider, UpsertRequest, WireRecord};

impl SpaceshipProvider {
    /// 校验凭证并规范化 zone
    fn prepare(&self, zone: &str) -> Result<String> {
        self.ensure_credentials()?;
        Ok(normalize_domain_name(zone))
    }

    /// 单页记录（已解码、已转换），以及本页原始条数和 total
    async fn list_page(&self, zone: &str, skip: u64) -> Result<(Vec<Record>, u64, u64)> {
        let url = format!(
            "{}?take={}&skip={skip}",
            self.records_url(zone),
            self.page_size
        );
        let response = self.request(Method::GET, url, None).await?;
        let page: ListResponse = HttpUtils::parse_json(&response.body, PROVIDER_NAME)?;
        let items = page.items.unwrap_or_default();
        let count = u64::try_from(items.len()).unwrap_or(u64::MAX);

        let mut records = Vec::with_capacity(items.len());
        for item in &items {
            let decoded = WireRecord::decode(item)?;
            if !decoded.skipped.is_empty() {
                let fields: Vec<String> =
                    decoded.skipped.iter().map(ToString::to_string).collect();
                log::warn!(
                    "[{PROVIDER_NAME}] Skipped fields in {} record '{}': {}",
                    decoded.value.record_type(),
                    decoded.value.name,
                    fields.join("; ")
                );
            }
            let record_type = decoded.value.record_type().to_string();
            let name = decoded.value.name.clone();
            match wire_to_record(decoded.value) {
                Some(record) => records.push(record),
                None => log::debug!(
                    "[{PROVIDER_NAME}] Ignoring unsupported {record_type} record '{name}'"
                ),
            }
        }

        Ok((records, count, page.total))
    }

    /// append / set 共用：丢弃无法表示的记录后发送一次 PUT
    async fn upsert(&self, zone: &str, records: &[Record], force: bool) -> Result<Vec<Record>> {
        let zone = self.prepare(zone)?;

        let items: Vec<WireRecord> = records
            .iter()
            .filter_map(|record| {
                let wire = record_to_wire(record, &zone);
                if wire.is_none() {
                    log::warn!(
                        "[{PROVIDER_NAME}] Dropping {} record '{}': not supported by Spaceship",
                        record.record_type(),
                        record.name
                    );
                }
                wire
            })
            .collect();

        let body = Self::encode_body(&UpsertRequest {
            force,
            items: &items,
        })?;
        self.request(Method::PUT, self.records_url(&zone), Some(body))
            .await?;

        Ok(items.into_iter().filter_map(wire_to_record).collect())
    }
}

#[async_trait]
impl DnsRecordProvider for SpaceshipProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = self.prepare(zone)?;
        let take = u64::from(self.page_size);

        let mut records = Vec::new();
        let mut skip = 0u64;
        loop {
            let (mut page, count, total) = self.list_page(&zone, skip).await?;
            records.append(&mut page);

            // total 偏大时服务端会返回空页
            if count == 0 || skip.saturating_add(count) >= total {
                break;
            }
            skip = skip.saturating_add(take);
        }

        log::debug!(
            "[{PROVIDER_NAME}] Fetched {} records for zone {zone}",
            records.len()
        );
        Ok(records)
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        self.upsert(zone, records, false).await
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        self.upsert(zone, records, true).await
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let zone = self.prepare(zone)?;

        let items = records
            .iter()
            .map(|record| {
                record_to_wire(record, &zone).ok_or_else(|| ProviderError::UnsupportedRecordType {
                    provider: PROVIDER_NAME.to_string(),
                    record_type: record.record_type().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let body = Self::encode_body(&items)?;
        self.request(Method::DELETE, self.records_url(&zone), Some(body))
            .await?;

        Ok(records.to_vec())
    }
}
