//! Instance metadata service lookups.

use aws_config::imds::client::Client;

/// Fetch the running instance's id from IMDS.
pub async fn fetch_instance_id() -> Result<String, String> {
    let client = Client::builder().build();
    let id = client
        .get("/latest/meta-data/instance-id")
        .await
        .map_err(|e| format!("instance metadata lookup failed: {}", e))?;
    Ok(id.into())
}
