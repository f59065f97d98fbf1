//! Identity resolver — derive a hostname from an instance's address and tags.

use std::collections::HashMap;

/// Tags attached to the instance, flattened to a key/value map.
pub type TagSet = HashMap<String, String>;

/// The cloud-assigned identity of the running instance.
#[derive(Debug, Clone)]
pub struct InstanceIdentity {
    /// Instance id (e.g. `i-0123456789abcdef0`)
    pub instance_id: String,

    /// Private dotted-quad IPv4 address
    pub private_address: String,
}

/// Which tag keys drive hostname derivation.
#[derive(Debug, Clone)]
pub struct HostnameConfig {
    /// Tag whose value is prepended to the flattened address
    pub prefix_tag_key: String,

    /// Tag the derived hostname is written back to
    pub target_tag_key: String,
}

impl Default for HostnameConfig {
    fn default() -> Self {
        Self {
            prefix_tag_key: "HostnamePrefix".to_string(),
            target_tag_key: "Name".to_string(),
        }
    }
}

/// Derive the hostname for an instance.
///
/// The private address is flattened (`10.0.1.23` → `10-0-1-23`, every
/// separator replaced) and the prefix tag's value, when present, is
/// prepended with no separator. A missing prefix tag is not an error —
/// the hostname is just the flattened address.
pub fn resolve(identity: &InstanceIdentity, tags: &TagSet, cfg: &HostnameConfig) -> String {
    let flattened = identity.private_address.replace('.', "-");
    let prefix = tags
        .get(&cfg.prefix_tag_key)
        .map(String::as_str)
        .unwrap_or("");
    format!("{}{}", prefix, flattened)
}
