//! Route53 client — zone name lookup and A record upserts.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_route53 as route53;
use route53::types::{Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType};

use crate::propagate::DnsSink;

/// Instance tag carrying the id of the zone records are upserted into.
pub const ZONE_TAG_KEY: &str = "massive:DNS-SD:Route53:zone";

/// Route53 API wrapper for the two calls this tool makes.
pub struct Route53Dns {
    client: route53::Client,
}

impl Route53Dns {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: route53::Client::new(config),
        }
    }
}

#[async_trait]
impl DnsSink for Route53Dns {
    async fn zone_name(&self, zone_id: &str) -> Result<String, String> {
        let resp = self
            .client
            .get_hosted_zone()
            .id(zone_id)
            .send()
            .await
            .map_err(|e| format!("get-hosted-zone {} failed: {}", zone_id, e))?;
        let zone = resp
            .hosted_zone()
            .ok_or_else(|| format!("hosted zone {} has no zone data", zone_id))?;
        Ok(zone.name().to_string())
    }

    async fn upsert_a_record(
        &self,
        zone_id: &str,
        fqdn: &str,
        address: &str,
        ttl: i64,
    ) -> Result<(), String> {
        let record = ResourceRecord::builder()
            .value(address)
            .build()
            .map_err(|e| format!("record for {}: {}", fqdn, e))?;
        let record_set = ResourceRecordSet::builder()
            .name(fqdn)
            .r#type(RrType::A)
            .ttl(ttl)
            .resource_records(record)
            .build()
            .map_err(|e| format!("record set for {}: {}", fqdn, e))?;
        let change = Change::builder()
            .action(ChangeAction::Upsert)
            .resource_record_set(record_set)
            .build()
            .map_err(|e| format!("change for {}: {}", fqdn, e))?;
        let batch = ChangeBatch::builder()
            .changes(change)
            .build()
            .map_err(|e| format!("change batch for {}: {}", fqdn, e))?;

        self.client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| format!("upsert {} in zone {} failed: {}", fqdn, zone_id, e))?;
        Ok(())
    }
}
