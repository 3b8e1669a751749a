use crate::{common, fetch};

/// A remote listing call that returns one page per request.
///
/// Implementations issue a single request with the operation's filters plus the
/// cursor and page size from `request`, and map the response into a
/// [`Page`](fetch::page::Page). Errors are returned unchanged.
pub trait ListOperation {
    /// Item type of the listing.
    type Item;
    /// Error returned by a failed page request.
    type Error;
    /// Largest page size the service accepts, `None` if the call takes no page size.
    const MAX_PAGE_SIZE: Option<u32> = None;

    /// Fetch a single page.
    fn fetch_page(
        &self,
        request: fetch::page::PageRequest,
    ) -> impl Future<Output = Result<fetch::page::Page<Self::Item>, Self::Error>> + Send;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stop {
    CapReached,
    Completed,
    Failed,
    RepeatedCursor,
    SinglePage,
}

/// Drives a [`ListOperation`] through its pages.
///
/// The fetcher owns the state of one listing invocation: the current cursor,
/// the items left under the cap and the counts so far. Pages are requested one
/// at a time; dropping the future returned by [`next_page`](Self::next_page) or
/// [`collect`](Self::collect) cancels the request in flight.
///
/// ```rust,no_run
/// use aws_sdk_workspaces::Client;
/// use workspaces_pager::{common, describe};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe_workspaces = describe::workspaces::DescribeWorkspaces {
///     directory_id: Some("d-1234567890".to_string()),
///     ..Default::default()
/// };
/// let mut fetcher = describe_workspaces.into_fetcher(client);
/// while let Some(page) = fetcher.next_page().await {
///     for workspace in page? {
///         println!("{:?}", workspace.workspace_id());
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PagedFetcher<O> {
    operation: O,
    paging_input: common::paging::PagingInput,
    stop: Option<Stop>,
}

impl<O: ListOperation> PagedFetcher<O> {
    /// Create a fetcher for one listing invocation.
    pub fn new(operation: O, paging_args: common::paging::PagingArgs) -> Self {
        Self {
            operation,
            paging_input: paging_args.into(),
            stop: None,
        }
    }

    /// Current iteration state.
    pub fn state(&self) -> &common::paging::IterationState {
        &self.paging_input.state
    }

    /// Fetch the next page and return its items, or `None` once the listing stopped.
    ///
    /// The items are cut to the remaining cap, in manual mode as well. When the
    /// cut drops items the cursor is cleared, so the listing cannot be resumed
    /// past them. After an error no further page is fetched.
    pub async fn next_page(&mut self) -> Option<Result<Vec<O::Item>, O::Error>> {
        if self.stop.is_some() {
            return None;
        }
        if self.paging_input.state.remaining == Some(0) {
            self.stop = Some(Stop::CapReached);
            return None;
        }
        let request = fetch::page::PageRequest {
            cursor: self.paging_input.state.cursor.clone(),
            page_size: self.paging_input.next_page_size(O::MAX_PAGE_SIZE),
        };
        match self.operation.fetch_page(request).await {
            Ok(page) => Some(Ok(self.record_page(page))),
            Err(error) => {
                self.stop = Some(Stop::Failed);
                Some(Err(error))
            }
        }
    }

    fn record_page(&mut self, page: fetch::page::Page<O::Item>) -> Vec<O::Item> {
        let manual = self.paging_input.manual;
        let state = &mut self.paging_input.state;
        let fetch::page::Page {
            mut items,
            next_cursor,
        } = page;
        let mut dropped = false;
        if let Some(remaining) = state.remaining.as_mut() {
            dropped = items.len() > *remaining;
            items.truncate(*remaining);
            *remaining -= items.len();
        }
        let next_cursor = next_cursor.filter(|cursor| !cursor.is_empty());
        let mut repeated = false;
        if next_cursor.is_some() && next_cursor == state.cursor {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                pages_fetched = state.pages_fetched + 1,
                "listing returned the cursor it was given, stopping"
            );
            repeated = true;
        }
        state.cursor = if dropped || repeated { None } else { next_cursor };
        state.emitted_count += items.len();
        state.pages_fetched += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = items.len(),
            emitted_count = state.emitted_count,
            pages_fetched = state.pages_fetched,
            has_next = state.cursor.is_some(),
            "fetched page"
        );
        self.stop = if dropped {
            Some(Stop::CapReached)
        } else if repeated {
            Some(Stop::RepeatedCursor)
        } else if state.cursor.is_none() {
            Some(Stop::Completed)
        } else if manual {
            Some(Stop::SinglePage)
        } else if state.remaining == Some(0) {
            Some(Stop::CapReached)
        } else {
            None
        };
        items
    }

    /// Fetch every remaining page and collect the items.
    ///
    /// A failure before any page succeeded is returned as an error, as is any
    /// failure when no cap was requested. When a cap was requested and at least
    /// one page already succeeded, the failure ends the listing instead: the
    /// items fetched so far are returned tagged with
    /// [`Truncation::UpstreamError`](fetch::page::Truncation::UpstreamError).
    pub async fn collect(mut self) -> Result<fetch::page::Listing<O::Item, O::Error>, O::Error> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await {
            match page {
                Ok(page) => items.extend(page),
                Err(error) => {
                    let state = &self.paging_input.state;
                    if state.pages_fetched == 0 || state.remaining.is_none() {
                        return Err(error);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        emitted_count = state.emitted_count,
                        pages_fetched = state.pages_fetched,
                        "page request failed under a cap, returning partial listing"
                    );
                    let listing = fetch::page::Listing {
                        items,
                        next_cursor: self.paging_input.state.cursor,
                        truncation: fetch::page::Truncation::UpstreamError(error),
                    };
                    return Ok(listing);
                }
            }
        }
        let truncation = match self.stop {
            Some(Stop::CapReached) => fetch::page::Truncation::CapReached,
            Some(Stop::RepeatedCursor) => fetch::page::Truncation::RepeatedCursor,
            Some(Stop::SinglePage) => fetch::page::Truncation::SinglePage,
            Some(Stop::Completed) | Some(Stop::Failed) | None => {
                fetch::page::Truncation::Completed
            }
        };
        let listing = fetch::page::Listing {
            items,
            next_cursor: self.paging_input.state.cursor,
            truncation,
        };
        Ok(listing)
    }
}
