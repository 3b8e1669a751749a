use crate::{common, describe, fetch};

use aws_sdk_workspaces::{Client, error, operation, types};

/// describe workspace bundles operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeWorkspaceBundlesInput {
    bundle_ids: Option<Vec<String>>,
    owner: Option<String>,
}

/// Describe workspace bundles operation.
///
/// The service takes no page size for this call, so `page_size` is not sent.
/// `max_items` still limits the number of bundles returned, and when it cuts
/// a page short the listing has no `next_cursor` to resume from.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::Client;
/// use workspaces_pager::describe;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_bundles = describe::workspace_bundles::DescribeWorkspaceBundles {
///     owner: Some("AMAZON".to_string()),
///     ..Default::default()
/// };
/// let listing = describe_bundles.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeWorkspaceBundles {
    /// Only list these bundles.
    pub bundle_ids: Option<Vec<String>>,
    /// Bundle owner: `AMAZON` for public bundles, `None` for the account's own.
    pub owner: Option<String>,
    /// Cursor, cap and page size controls.
    pub paging_args: common::paging::PagingArgs,
}

impl From<DescribeWorkspaceBundles> for DescribeWorkspaceBundlesInput {
    fn from(describe_bundles: DescribeWorkspaceBundles) -> Self {
        Self {
            bundle_ids: describe_bundles.bundle_ids,
            owner: describe_bundles.owner,
        }
    }
}

/// Pages of a describe workspace bundles listing.
#[derive(Debug)]
pub struct DescribeWorkspaceBundlesPages<'a> {
    client: &'a Client,
    input: DescribeWorkspaceBundlesInput,
}

impl fetch::fetcher::ListOperation for DescribeWorkspaceBundlesPages<'_> {
    type Item = types::WorkspaceBundle;
    type Error =
        error::SdkError<operation::describe_workspace_bundles::DescribeWorkspaceBundlesError>;

    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send {
        let builder = self
            .client
            .describe_workspace_bundles()
            .set_bundle_ids(self.input.bundle_ids.clone())
            .set_owner(self.input.owner.clone());
        async move { describe::common::send_page!(builder, request, bundles) }
    }
}

impl DescribeWorkspaceBundles {
    /// Build a fetcher that pages through the bundles lazily.
    pub fn into_fetcher(
        self,
        client: &Client,
    ) -> fetch::fetcher::PagedFetcher<DescribeWorkspaceBundlesPages<'_>> {
        let paging_args = self.paging_args.clone();
        let input: DescribeWorkspaceBundlesInput = self.into();
        fetch::fetcher::PagedFetcher::new(
            DescribeWorkspaceBundlesPages { client, input },
            paging_args,
        )
    }

    /// Execute the describe workspace bundles operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "workspaces_pager.describe_workspace_bundles", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        fetch::page::Listing<
            types::WorkspaceBundle,
            error::SdkError<operation::describe_workspace_bundles::DescribeWorkspaceBundlesError>,
        >,
        error::SdkError<operation::describe_workspace_bundles::DescribeWorkspaceBundlesError>,
    > {
        self.into_fetcher(client).collect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(
        DescribeWorkspaceBundles::default(),
        DescribeWorkspaceBundlesInput::default()
    )]
    #[case::full(
        DescribeWorkspaceBundles {
            bundle_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            owner: Some("AMAZON".to_string()),
            paging_args: common::paging::PagingArgs {
                max_items: Some(3),
                ..Default::default()
            },
        },
        DescribeWorkspaceBundlesInput {
            bundle_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            owner: Some("AMAZON".to_string()),
        }
    )]
    fn test_describe_workspace_bundles(
        #[case] args: DescribeWorkspaceBundles,
        #[case] expected: DescribeWorkspaceBundlesInput,
    ) {
        let actual: DescribeWorkspaceBundlesInput = args.into();
        assert_eq!(actual, expected);
    }
}
