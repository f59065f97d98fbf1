//! Propagation sequencer — push a derived hostname through its sinks.
//!
//! Fixed order: disk → tag → DNS → OS apply. Each step is gated by its
//! selection flag and the first failure aborts the rest. OS apply replaces
//! the process image, so it runs last: every earlier sink's outcome has to
//! be observable before the process disappears.

use async_trait::async_trait;

use crate::identity::InstanceIdentity;

/// TTL for upserted A records, in seconds.
pub const RECORD_TTL: i64 = 60;

/// Which sinks a run writes to.
#[derive(Debug, Clone)]
pub struct SinkSelection {
    pub write_disk: bool,
    pub write_tag: bool,
    pub apply_os_hostname: bool,
    pub write_dns: bool,
}

impl Default for SinkSelection {
    fn default() -> Self {
        Self {
            write_disk: true,
            write_tag: true,
            apply_os_hostname: true,
            write_dns: true,
        }
    }
}

/// Inputs for one propagation run.
pub struct PropagateConfig<'a> {
    /// The derived hostname, computed exactly once before the run
    pub hostname: &'a str,

    pub identity: &'a InstanceIdentity,

    /// Tag the hostname is written to
    pub tag_key: &'a str,

    pub selection: &'a SinkSelection,

    /// Zone id from the instance's zone tag, when present
    pub dns_zone: Option<&'a str>,
}

/// Upsert a tag on the instance resource.
#[async_trait]
pub trait TagSink: Send + Sync {
    async fn upsert_tag(&self, instance_id: &str, key: &str, value: &str) -> Result<(), String>;
}

/// Look up a zone's name and upsert address records into it.
#[async_trait]
pub trait DnsSink: Send + Sync {
    async fn zone_name(&self, zone_id: &str) -> Result<String, String>;

    async fn upsert_a_record(
        &self,
        zone_id: &str,
        fqdn: &str,
        address: &str,
        ttl: i64,
    ) -> Result<(), String>;
}

/// The local machine: hostname file plus kernel apply.
pub trait HostSink: Send + Sync {
    /// Overwrite the hostname file with exactly `hostname`.
    fn write_hostname(&self, hostname: &str) -> Result<(), String>;

    /// Apply the hostname file to the kernel. Replaces the process image
    /// on success; returns only when the apply could not be invoked.
    fn apply_hostname(&self) -> Result<(), String>;
}

/// Run the sink sequence for a derived hostname.
///
/// Sequential, fail-fast: nothing after the first error runs, nothing
/// already applied is rolled back. A missing zone tag with DNS enabled
/// fails before any DNS call is made.
pub async fn propagate<T, D, H>(
    cfg: &PropagateConfig<'_>,
    tags: &T,
    dns: &D,
    host: &H,
) -> Result<(), String>
where
    T: TagSink,
    D: DnsSink,
    H: HostSink,
{
    if cfg.selection.write_disk {
        host.write_hostname(cfg.hostname)?;
    }

    if cfg.selection.write_tag {
        tags.upsert_tag(&cfg.identity.instance_id, cfg.tag_key, cfg.hostname)
            .await?;
    }

    if cfg.selection.write_dns {
        let zone_id = cfg
            .dns_zone
            .ok_or_else(|| "instance has no Route53 zone tag".to_string())?;
        let zone = dns.zone_name(zone_id).await?;
        let fqdn = format!("{}.{}", cfg.hostname, zone);
        dns.upsert_a_record(zone_id, &fqdn, &cfg.identity.private_address, RECORD_TTL)
            .await?;
    }

    if cfg.selection.apply_os_hostname {
        // Does not return on success; the process image is replaced.
        host.apply_hostname()?;
    }

    Ok(())
}
