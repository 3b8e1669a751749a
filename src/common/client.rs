use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use aws_sdk_workspaces::Client;
use std::env;

/// Build a WorkSpaces client from the environment.
///
/// The region is resolved from `region`, then `AWS_DEFAULT_REGION`, then the
/// default provider chain. Credentials, retries and transport come from the
/// standard AWS configuration.
///
/// ```rust,no_run
/// use workspaces_pager::common::client;
///
/// # async fn example() {
/// let client = client::load_client(Some("eu-west-1".to_string())).await;
/// # }
/// ```
pub async fn load_client(region: Option<String>) -> Client {
    let region = region
        .or_else(|| env::var("AWS_DEFAULT_REGION").ok())
        .map(Region::new);
    let region_provider = RegionProviderChain::first_try(region).or_default_provider();
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_client_with_region() {
        let client = load_client(Some("eu-west-1".to_string())).await;
        assert_eq!(
            client.config().region(),
            Some(&Region::new("eu-west-1"))
        );
    }
}
