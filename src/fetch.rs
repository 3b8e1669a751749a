//! Cursor pagination over remote listing calls.
//!
//! This module provides the service-independent part of listing:
//! - The [`ListOperation`](fetcher::ListOperation) seam for a single page request
//! - The [`PagedFetcher`](fetcher::PagedFetcher) driving pages with an optional cap
//! - Page and listing result types

/// Page-driving loop and the listing operation trait.
pub mod fetcher;

/// Page requests, pages and collected listings.
pub mod page;
