use crate::common;

/// Request for a single page, passed to [`ListOperation::fetch_page`](crate::fetch::fetcher::ListOperation::fetch_page).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageRequest {
    /// Cursor to resume from, `None` for the start of the listing.
    pub cursor: Option<common::cursor::Cursor>,
    /// Number of items to ask the service for, `None` for the service default.
    pub page_size: Option<u32>,
}

/// One page returned by a listing call.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Items in service order.
    pub items: Vec<T>,
    /// Cursor for the following page; `None` when the listing is exhausted.
    pub next_cursor: Option<common::cursor::Cursor>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

/// Why a listing stopped.
#[derive(Clone, Debug, PartialEq)]
pub enum Truncation<E> {
    /// The service reported no further cursor.
    Completed,
    /// The requested maximum number of items was emitted.
    ///
    /// When the cap cut a page short, [`Listing::next_cursor`] is `None`: the
    /// service cursor would skip the items after the cut.
    CapReached,
    /// The service returned the cursor it was just given.
    ///
    /// The listing cannot make progress, so it may be incomplete.
    RepeatedCursor,
    /// Manual paging fetched one page and more pages are available from
    /// [`Listing::next_cursor`].
    SinglePage,
    /// A page after the first one failed while a cap was active.
    ///
    /// The items fetched before the failure are still returned.
    UpstreamError(E),
}

/// Items collected from one listing invocation.
///
/// ```rust
/// use workspaces_pager::fetch::page::{Listing, Truncation};
///
/// let listing: Listing<&str, ()> = Listing {
///     items: vec!["a", "b"],
///     next_cursor: None,
///     truncation: Truncation::Completed,
/// };
/// assert!(listing.is_complete());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T, E> {
    /// Items across all fetched pages, in page order.
    pub items: Vec<T>,
    /// Cursor to resume the listing from, `None` when it cannot be resumed.
    ///
    /// Resuming from it never skips or repeats items.
    pub next_cursor: Option<common::cursor::Cursor>,
    /// Why the listing stopped.
    pub truncation: Truncation<E>,
}

impl<T, E> Listing<T, E> {
    /// Whether every item of the listing was retrieved.
    pub fn is_complete(&self) -> bool {
        matches!(self.truncation, Truncation::Completed)
    }

    /// Discard the paging metadata.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
