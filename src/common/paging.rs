use crate::common;

/// Arguments controlling how a listing operation pages through results.
///
/// These arguments apply to every listing operation. With the defaults, all
/// pages are fetched and collected.
///
/// ```rust
/// use workspaces_pager::common::paging;
///
/// // Fetch at most 30 items, whatever the service page size is.
/// let paging_args = paging::PagingArgs {
///     max_items: Some(30),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PagingArgs {
    /// Maximum number of items to return across all pages.
    ///
    /// Once this many items have been emitted no further page is requested.
    /// The cap also applies in manual paging mode, where it bounds the single
    /// page; a cap of `0` sends no request at all.
    pub max_items: Option<u32>,
    /// Continuation token from a previous listing to resume from.
    ///
    /// `None` starts at the beginning of the listing.
    pub next_token: Option<common::cursor::Cursor>,
    /// Fetch exactly one page and return its continuation token instead of
    /// following it.
    pub no_auto_iteration: bool,
    /// Page size hint sent with each request.
    ///
    /// Clamped to the largest page size the operation accepts; `Some(0)` is ignored.
    pub page_size: Option<u32>,
}

/// Progress of one listing invocation.
///
/// A fresh state is created for each invocation and updated once per page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IterationState {
    /// Cursor to send with the next request.
    pub cursor: Option<common::cursor::Cursor>,
    /// Number of items that may still be emitted, when a cap was requested.
    pub remaining: Option<usize>,
    /// Number of items emitted so far.
    pub emitted_count: usize,
    /// Number of pages successfully fetched so far.
    pub pages_fetched: usize,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PagingInput {
    pub(crate) manual: bool,
    pub(crate) page_size: Option<u32>,
    pub(crate) state: IterationState,
}

impl From<PagingArgs> for PagingInput {
    fn from(paging_args: PagingArgs) -> Self {
        Self {
            manual: paging_args.no_auto_iteration,
            page_size: paging_args.page_size.filter(|page_size| *page_size > 0),
            state: IterationState {
                cursor: paging_args.next_token,
                remaining: paging_args.max_items.map(|max_items| max_items as usize),
                ..Default::default()
            },
        }
    }
}

impl PagingInput {
    /// Page size to request next, given the largest page the operation accepts.
    pub(crate) fn next_page_size(&self, max_page_size: Option<u32>) -> Option<u32> {
        let remaining = self
            .state
            .remaining
            .map(|remaining| u32::try_from(remaining).unwrap_or(u32::MAX));
        let page_size = match remaining {
            Some(remaining) => Some(
                self.page_size
                    .or(max_page_size)
                    .map_or(remaining, |page_size| page_size.min(remaining)),
            ),
            None => self.page_size,
        };
        match max_page_size {
            Some(max_page_size) => page_size.map(|page_size| page_size.min(max_page_size)),
            None => page_size,
        }
        .filter(|page_size| *page_size > 0)
    }
}
