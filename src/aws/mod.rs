//! AWS capability clients — instance metadata, EC2 tags, Route53 records.

pub mod ec2;
pub mod metadata;
pub mod route53;
