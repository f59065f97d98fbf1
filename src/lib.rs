//! ec2-hostname — one-shot hostname bootstrap for EC2 instances.
//!
//! One process per boot: read the instance's identity, flatten its private
//! address into a hostname, then push that hostname to disk, the instance's
//! tags, Route53, and the running kernel — in that order.

pub mod aws;
pub mod cli;
pub mod host;
pub mod identity;
pub mod propagate;
