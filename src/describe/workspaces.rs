use crate::{common, describe, fetch};

use aws_sdk_workspaces::{Client, error, operation, types};

/// describe workspaces operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeWorkspacesInput {
    bundle_id: Option<String>,
    directory_id: Option<String>,
    user_name: Option<String>,
    workspace_ids: Option<Vec<String>>,
    workspace_name: Option<String>,
}

/// Describe workspaces operation.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::Client;
/// use workspaces_pager::{common, describe};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_workspaces = describe::workspaces::DescribeWorkspaces {
///     directory_id: Some("d-1234567890".to_string()),
///     paging_args: common::paging::PagingArgs {
///         max_items: Some(100),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let listing = describe_workspaces.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeWorkspaces {
    /// Only list WorkSpaces created from this bundle.
    pub bundle_id: Option<String>,
    /// Only list WorkSpaces in this directory.
    pub directory_id: Option<String>,
    /// Cursor, cap and page size controls.
    pub paging_args: common::paging::PagingArgs,
    /// Only list WorkSpaces of this user; requires `directory_id`.
    pub user_name: Option<String>,
    /// Only list these WorkSpaces.
    ///
    /// Cannot be combined with the other filters.
    pub workspace_ids: Option<Vec<String>>,
    /// Only list the WorkSpace with this name.
    pub workspace_name: Option<String>,
}

impl From<DescribeWorkspaces> for DescribeWorkspacesInput {
    fn from(describe_workspaces: DescribeWorkspaces) -> Self {
        Self {
            bundle_id: describe_workspaces.bundle_id,
            directory_id: describe_workspaces.directory_id,
            user_name: describe_workspaces.user_name,
            workspace_ids: describe_workspaces.workspace_ids,
            workspace_name: describe_workspaces.workspace_name,
        }
    }
}

/// Pages of a describe workspaces listing.
#[derive(Debug)]
pub struct DescribeWorkspacesPages<'a> {
    client: &'a Client,
    input: DescribeWorkspacesInput,
}

impl fetch::fetcher::ListOperation for DescribeWorkspacesPages<'_> {
    type Item = types::Workspace;
    type Error = error::SdkError<operation::describe_workspaces::DescribeWorkspacesError>;
    const MAX_PAGE_SIZE: Option<u32> = Some(25);

    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send {
        let builder = self
            .client
            .describe_workspaces()
            .set_bundle_id(self.input.bundle_id.clone())
            .set_directory_id(self.input.directory_id.clone())
            .set_limit(describe::common::to_sdk_page_size(request.page_size))
            .set_user_name(self.input.user_name.clone())
            .set_workspace_ids(self.input.workspace_ids.clone())
            .set_workspace_name(self.input.workspace_name.clone());
        async move { describe::common::send_page!(builder, request, workspaces) }
    }
}

impl DescribeWorkspaces {
    /// Build a fetcher that pages through the WorkSpaces lazily.
    pub fn into_fetcher(
        self,
        client: &Client,
    ) -> fetch::fetcher::PagedFetcher<DescribeWorkspacesPages<'_>> {
        let paging_args = self.paging_args.clone();
        let input: DescribeWorkspacesInput = self.into();
        fetch::fetcher::PagedFetcher::new(DescribeWorkspacesPages { client, input }, paging_args)
    }

    /// Execute the describe workspaces operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "workspaces_pager.describe_workspaces", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        fetch::page::Listing<
            types::Workspace,
            error::SdkError<operation::describe_workspaces::DescribeWorkspacesError>,
        >,
        error::SdkError<operation::describe_workspaces::DescribeWorkspacesError>,
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
        DescribeWorkspaces::default(),
        DescribeWorkspacesInput::default()
    )]
    #[case::full(
        DescribeWorkspaces {
            bundle_id: Some("a".to_string()),
            directory_id: Some("b".to_string()),
            paging_args: common::paging::PagingArgs {
                max_items: Some(10),
                next_token: Some(
                    common::cursor::Cursor::from("c")
                ),
                no_auto_iteration: true,
                page_size: Some(5),
            },
            user_name: Some("d".to_string()),
            workspace_ids: Some(
                vec![
                    "e".to_string(),
                    "f".to_string()
                ]
            ),
            workspace_name: Some("g".to_string()),
        },
        DescribeWorkspacesInput {
            bundle_id: Some("a".to_string()),
            directory_id: Some("b".to_string()),
            user_name: Some("d".to_string()),
            workspace_ids: Some(
                vec![
                    "e".to_string(),
                    "f".to_string()
                ]
            ),
            workspace_name: Some("g".to_string()),
        }
    )]
    fn test_describe_workspaces(
        #[case] args: DescribeWorkspaces,
        #[case] expected: DescribeWorkspacesInput,
    ) {
        let actual: DescribeWorkspacesInput = args.into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_into_fetcher_starts_from_paging_args() {
        let config = aws_sdk_workspaces::Config::builder()
            .behavior_version(aws_sdk_workspaces::config::BehaviorVersion::latest())
            .build();
        let client = Client::from_conf(config);
        let describe_workspaces = DescribeWorkspaces {
            paging_args: common::paging::PagingArgs {
                max_items: Some(10),
                next_token: Some(common::cursor::Cursor::from("a")),
                ..Default::default()
            },
            ..Default::default()
        };
        let fetcher = describe_workspaces.into_fetcher(&client);
        assert_eq!(
            fetcher.state(),
            &common::paging::IterationState {
                cursor: Some(common::cursor::Cursor::from("a")),
                remaining: Some(10),
                ..Default::default()
            }
        );
    }
}
