use crate::{common, describe, fetch};

use aws_sdk_workspaces::{Client, error, operation, types};

/// describe applications operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeApplicationsInput {
    application_ids: Option<Vec<String>>,
    owner: Option<String>,
}

/// Describe applications operation.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::Client;
/// use workspaces_pager::{common, describe};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_applications = describe::applications::DescribeApplications {
///     paging_args: common::paging::PagingArgs {
///         no_auto_iteration: true,
///         page_size: Some(10),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let page = describe_applications.send(client).await?;
/// let next_token = page.next_cursor;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeApplications {
    /// Only list these applications.
    pub application_ids: Option<Vec<String>>,
    /// Only list applications owned by this account, or `AMAZON` for public ones.
    pub owner: Option<String>,
    /// Cursor, cap and page size controls.
    pub paging_args: common::paging::PagingArgs,
}

impl From<DescribeApplications> for DescribeApplicationsInput {
    fn from(describe_applications: DescribeApplications) -> Self {
        Self {
            application_ids: describe_applications.application_ids,
            owner: describe_applications.owner,
        }
    }
}

/// Pages of a describe applications listing.
#[derive(Debug)]
pub struct DescribeApplicationsPages<'a> {
    client: &'a Client,
    input: DescribeApplicationsInput,
}

impl fetch::fetcher::ListOperation for DescribeApplicationsPages<'_> {
    type Item = types::WorkSpaceApplication;
    type Error = error::SdkError<operation::describe_applications::DescribeApplicationsError>;
    const MAX_PAGE_SIZE: Option<u32> = Some(50);

    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send {
        let builder = self
            .client
            .describe_applications()
            .set_application_ids(self.input.application_ids.clone())
            .set_max_results(describe::common::to_sdk_page_size(request.page_size))
            .set_owner(self.input.owner.clone());
        async move { describe::common::send_page!(builder, request, applications) }
    }
}

impl DescribeApplications {
    /// Build a fetcher that pages through the applications lazily.
    pub fn into_fetcher(
        self,
        client: &Client,
    ) -> fetch::fetcher::PagedFetcher<DescribeApplicationsPages<'_>> {
        let paging_args = self.paging_args.clone();
        let input: DescribeApplicationsInput = self.into();
        fetch::fetcher::PagedFetcher::new(DescribeApplicationsPages { client, input }, paging_args)
    }

    /// Execute the describe applications operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "workspaces_pager.describe_applications", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        fetch::page::Listing<
            types::WorkSpaceApplication,
            error::SdkError<operation::describe_applications::DescribeApplicationsError>,
        >,
        error::SdkError<operation::describe_applications::DescribeApplicationsError>,
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
        DescribeApplications::default(),
        DescribeApplicationsInput::default()
    )]
    #[case::full(
        DescribeApplications {
            application_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            owner: Some("c".to_string()),
            paging_args: common::paging::PagingArgs {
                max_items: Some(60),
                page_size: Some(50),
                ..Default::default()
            },
        },
        DescribeApplicationsInput {
            application_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            owner: Some("c".to_string()),
        }
    )]
    fn test_describe_applications(
        #[case] args: DescribeApplications,
        #[case] expected: DescribeApplicationsInput,
    ) {
        let actual: DescribeApplicationsInput = args.into();
        assert_eq!(actual, expected);
    }
}
