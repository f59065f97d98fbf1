//! EC2 client — instance description and tag upserts.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2 as ec2;

use crate::identity::TagSet;
use crate::propagate::TagSink;

/// Tags and address for a described instance.
#[derive(Debug, Clone)]
pub struct DescribedInstance {
    pub tags: TagSet,
    pub private_address: String,
}

/// EC2 API wrapper for the two calls this tool makes.
pub struct Ec2Api {
    client: ec2::Client,
}

impl Ec2Api {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: ec2::Client::new(config),
        }
    }

    /// Describe the instance: its tag set and private IPv4 address.
    /// One `DescribeInstances` call, looked up by instance id.
    pub async fn describe_instance(&self, instance_id: &str) -> Result<DescribedInstance, String> {
        let resp = self
            .client
            .describe_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| format!("describe-instances {} failed: {}", instance_id, e))?;

        let instance = resp
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .next()
            .ok_or_else(|| format!("instance {} not found", instance_id))?;

        let private_address = instance
            .private_ip_address()
            .ok_or_else(|| format!("instance {} has no private IPv4 address", instance_id))?
            .to_string();

        Ok(DescribedInstance {
            tags: tags_to_map(instance.tags()),
            private_address,
        })
    }
}

/// Flatten SDK tag structs into a key/value map.
fn tags_to_map(tags: &[ec2::types::Tag]) -> TagSet {
    tags.iter()
        .filter_map(|t| {
            let key = t.key()?;
            let value = t.value()?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[async_trait]
impl TagSink for Ec2Api {
    async fn upsert_tag(&self, instance_id: &str, key: &str, value: &str) -> Result<(), String> {
        let tag = ec2::types::Tag::builder().key(key).value(value).build();
        self.client
            .create_tags()
            .resources(instance_id)
            .tags(tag)
            .send()
            .await
            .map_err(|e| format!("create-tags {} failed: {}", instance_id, e))?;
        Ok(())
    }
}
