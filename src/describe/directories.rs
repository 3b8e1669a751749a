use crate::{common, describe, fetch};

use aws_sdk_workspaces::{Client, error, operation, types};

/// describe workspace directories operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeWorkspaceDirectoriesInput {
    directory_ids: Option<Vec<String>>,
}

/// Describe workspace directories operation.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::Client;
/// use workspaces_pager::describe;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_directories = describe::directories::DescribeWorkspaceDirectories::default();
/// let listing = describe_directories.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeWorkspaceDirectories {
    /// Only list these directories; `None` lists every registered directory.
    pub directory_ids: Option<Vec<String>>,
    /// Cursor, cap and page size controls.
    pub paging_args: common::paging::PagingArgs,
}

impl From<DescribeWorkspaceDirectories> for DescribeWorkspaceDirectoriesInput {
    fn from(describe_directories: DescribeWorkspaceDirectories) -> Self {
        Self {
            directory_ids: describe_directories.directory_ids,
        }
    }
}

/// Pages of a describe workspace directories listing.
#[derive(Debug)]
pub struct DescribeWorkspaceDirectoriesPages<'a> {
    client: &'a Client,
    input: DescribeWorkspaceDirectoriesInput,
}

impl fetch::fetcher::ListOperation for DescribeWorkspaceDirectoriesPages<'_> {
    type Item = types::WorkspaceDirectory;
    type Error = error::SdkError<
        operation::describe_workspace_directories::DescribeWorkspaceDirectoriesError,
    >;
    const MAX_PAGE_SIZE: Option<u32> = Some(25);

    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send {
        let builder = self
            .client
            .describe_workspace_directories()
            .set_directory_ids(self.input.directory_ids.clone())
            .set_limit(describe::common::to_sdk_page_size(request.page_size));
        async move { describe::common::send_page!(builder, request, directories) }
    }
}

impl DescribeWorkspaceDirectories {
    /// Build a fetcher that pages through the directories lazily.
    pub fn into_fetcher(
        self,
        client: &Client,
    ) -> fetch::fetcher::PagedFetcher<DescribeWorkspaceDirectoriesPages<'_>> {
        let paging_args = self.paging_args.clone();
        let input: DescribeWorkspaceDirectoriesInput = self.into();
        fetch::fetcher::PagedFetcher::new(
            DescribeWorkspaceDirectoriesPages { client, input },
            paging_args,
        )
    }

    /// Execute the describe workspace directories operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "workspaces_pager.describe_workspace_directories", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        fetch::page::Listing<
            types::WorkspaceDirectory,
            error::SdkError<
                operation::describe_workspace_directories::DescribeWorkspaceDirectoriesError,
            >,
        >,
        error::SdkError<
            operation::describe_workspace_directories::DescribeWorkspaceDirectoriesError,
        >,
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
        DescribeWorkspaceDirectories::default(),
        DescribeWorkspaceDirectoriesInput::default()
    )]
    #[case::full(
        DescribeWorkspaceDirectories {
            directory_ids: Some(
                vec![
                    "a".to_string()
                ]
            ),
            paging_args: common::paging::PagingArgs {
                no_auto_iteration: true,
                ..Default::default()
            },
        },
        DescribeWorkspaceDirectoriesInput {
            directory_ids: Some(
                vec![
                    "a".to_string()
                ]
            ),
        }
    )]
    fn test_describe_workspace_directories(
        #[case] args: DescribeWorkspaceDirectories,
        #[case] expected: DescribeWorkspaceDirectoriesInput,
    ) {
        let actual: DescribeWorkspaceDirectoriesInput = args.into();
        assert_eq!(actual, expected);
    }
}
