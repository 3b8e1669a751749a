use crate::{common, describe, fetch};

use aws_sdk_workspaces::{Client, error, operation, types};

/// describe workspace images operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeWorkspaceImagesInput {
    image_ids: Option<Vec<String>>,
    image_type: Option<types::ImageType>,
}

/// Describe workspace images operation.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::{Client, types};
/// use workspaces_pager::describe;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_images = describe::workspace_images::DescribeWorkspaceImages {
///     image_type: Some(types::ImageType::Owned),
///     ..Default::default()
/// };
/// let listing = describe_images.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeWorkspaceImages {
    /// Only list these images.
    pub image_ids: Option<Vec<String>>,
    /// Only list images owned by the account or shared with it.
    pub image_type: Option<types::ImageType>,
    /// Cursor, cap and page size controls.
    pub paging_args: common::paging::PagingArgs,
}

impl From<DescribeWorkspaceImages> for DescribeWorkspaceImagesInput {
    fn from(describe_images: DescribeWorkspaceImages) -> Self {
        Self {
            image_ids: describe_images.image_ids,
            image_type: describe_images.image_type,
        }
    }
}

/// Pages of a describe workspace images listing.
#[derive(Debug)]
pub struct DescribeWorkspaceImagesPages<'a> {
    client: &'a Client,
    input: DescribeWorkspaceImagesInput,
}

impl fetch::fetcher::ListOperation for DescribeWorkspaceImagesPages<'_> {
    type Item = types::WorkspaceImage;
    type Error = error::SdkError<operation::describe_workspace_images::DescribeWorkspaceImagesError>;
    const MAX_PAGE_SIZE: Option<u32> = Some(25);

    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send {
        let builder = self
            .client
            .describe_workspace_images()
            .set_image_ids(self.input.image_ids.clone())
            .set_image_type(self.input.image_type.clone())
            .set_max_results(describe::common::to_sdk_page_size(request.page_size));
        async move { describe::common::send_page!(builder, request, images) }
    }
}

impl DescribeWorkspaceImages {
    /// Build a fetcher that pages through the images lazily.
    pub fn into_fetcher(
        self,
        client: &Client,
    ) -> fetch::fetcher::PagedFetcher<DescribeWorkspaceImagesPages<'_>> {
        let paging_args = self.paging_args.clone();
        let input: DescribeWorkspaceImagesInput = self.into();
        fetch::fetcher::PagedFetcher::new(
            DescribeWorkspaceImagesPages { client, input },
            paging_args,
        )
    }

    /// Execute the describe workspace images operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "workspaces_pager.describe_workspace_images", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        fetch::page::Listing<
            types::WorkspaceImage,
            error::SdkError<operation::describe_workspace_images::DescribeWorkspaceImagesError>,
        >,
        error::SdkError<operation::describe_workspace_images::DescribeWorkspaceImagesError>,
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
        DescribeWorkspaceImages::default(),
        DescribeWorkspaceImagesInput::default()
    )]
    #[case::owned(
        DescribeWorkspaceImages {
            image_type: Some(
                types::ImageType::Owned
            ),
            ..Default::default()
        },
        DescribeWorkspaceImagesInput {
            image_type: Some(
                types::ImageType::Owned
            ),
            ..Default::default()
        }
    )]
    #[case::full(
        DescribeWorkspaceImages {
            image_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            image_type: Some(
                types::ImageType::Shared
            ),
            paging_args: common::paging::PagingArgs {
                page_size: Some(10),
                ..Default::default()
            },
        },
        DescribeWorkspaceImagesInput {
            image_ids: Some(
                vec![
                    "a".to_string(),
                    "b".to_string()
                ]
            ),
            image_type: Some(
                types::ImageType::Shared
            ),
        }
    )]
    fn test_describe_workspace_images(
        #[case] args: DescribeWorkspaceImages,
        #[case] expected: DescribeWorkspaceImagesInput,
    ) {
        let actual: DescribeWorkspaceImagesInput = args.into();
        assert_eq!(actual, expected);
    }
}
