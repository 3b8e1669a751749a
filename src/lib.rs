#![deny(missing_docs)]
#![deny(warnings)]

//! # WorkSpaces Pager
//!
//! A type-safe, ergonomic interface for listing Amazon WorkSpaces resources.
//!
//! ## Overview
//!
//! This library wraps the WorkSpaces "Describe" calls so that:
//! - Filters are plain structs checked by the compiler
//! - Pages are followed automatically, or one at a time on request
//! - A cap on the number of items stops paging as soon as it is satisfied
//! - The reason a listing stopped is always reported, including a late page
//!   failure that ended a capped listing early
//!
//! ## Quick Example
//!
//! ```no_run
//! use workspaces_pager::{common, describe, fetch};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = common::client::load_client(None).await;
//! let describe_workspaces = describe::workspaces::DescribeWorkspaces {
//!     directory_id: Some("d-1234567890".to_string()),
//!     paging_args: common::paging::PagingArgs {
//!         max_items: Some(50),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let listing = describe_workspaces.send(&client).await?;
//! if let fetch::page::Truncation::UpstreamError(error) = &listing.truncation {
//!     eprintln!("listing cut short after {} workspaces: {error}", listing.items.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Shared utilities for cursors, paging arguments and clients
//! - [`mod@fetch`] - Service-independent cursor pagination
//! - [`mod@describe`] - WorkSpaces listing operations

/// Common utilities for cursors, paging arguments and client setup.
pub mod common;

/// WorkSpaces listing operations.
///
/// This module provides operations for:
/// - Listing WorkSpaces
/// - Listing bundles and images
/// - Listing registered directories
/// - Listing WorkSpace applications
pub mod describe;

/// Cursor pagination with client-side result caps.
///
/// This module works with any [`ListOperation`](fetch::fetcher::ListOperation),
/// not only the WorkSpaces ones.
pub mod fetch;
