//! Flag surface and the one-shot run wiring.

use aws_config::BehaviorVersion;
use clap::{ArgAction, Parser};

use crate::aws::ec2::Ec2Api;
use crate::aws::metadata;
use crate::aws::route53::{Route53Dns, ZONE_TAG_KEY};
use crate::host::{LocalHost, HOSTNAME_PATH};
use crate::identity::{resolve, HostnameConfig, InstanceIdentity};
use crate::propagate::{propagate, PropagateConfig, SinkSelection};

#[derive(Parser, Debug)]
#[command(
    name = "ec2-hostname",
    version,
    about = "Derive a deterministic hostname from EC2 metadata and propagate it to disk, tags, Route53, and the kernel"
)]
pub struct Args {
    /// Write the generated hostname to the hostname file
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub write_disk: bool,

    /// Write the generated hostname to a Route53 A record
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub write_route53: bool,

    /// Write the generated hostname to an instance tag
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub write_tag: bool,

    /// Apply the generated hostname to the running kernel
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub apply: bool,

    /// Which tag to write the hostname to
    #[arg(long, default_value = "Name")]
    pub tag: String,

    /// Which tag to consult for the hostname prefix
    #[arg(long, default_value = "HostnamePrefix")]
    pub prefix_lookup_name: String,
}

/// One run: fetch the instance's identity, derive the hostname exactly
/// once, then push it through the selected sinks.
pub async fn run(args: Args) -> Result<(), String> {
    let instance_id = metadata::fetch_instance_id().await?;

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let ec2 = Ec2Api::new(&sdk_config);

    let described = ec2.describe_instance(&instance_id).await?;
    let identity = InstanceIdentity {
        instance_id,
        private_address: described.private_address.clone(),
    };

    let cfg = HostnameConfig {
        prefix_tag_key: args.prefix_lookup_name,
        target_tag_key: args.tag,
    };
    let hostname = resolve(&identity, &described.tags, &cfg);

    let selection = SinkSelection {
        write_disk: args.write_disk,
        write_tag: args.write_tag,
        apply_os_hostname: args.apply,
        write_dns: args.write_route53,
    };
    let dns_zone = described.tags.get(ZONE_TAG_KEY).cloned();

    let propagate_cfg = PropagateConfig {
        hostname: &hostname,
        identity: &identity,
        tag_key: &cfg.target_tag_key,
        selection: &selection,
        dns_zone: dns_zone.as_deref(),
    };
    let dns = Route53Dns::new(&sdk_config);
    let host = LocalHost::new(HOSTNAME_PATH);

    propagate(&propagate_cfg, &ec2, &dns, &host).await?;

    // Reached only when OS apply is disabled; a successful apply replaces
    // the process before this line.
    println!("Set hostname to: {}", hostname);
    Ok(())
}
