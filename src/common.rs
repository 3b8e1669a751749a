//! Common utilities for WorkSpaces listing operations.
//!
//! This module provides shared types used by every listing operation,
//! including the continuation cursor, the paging arguments and client setup.

/// Client construction from the ambient AWS configuration.
pub mod client;

/// Opaque continuation cursor handed out by listing calls.
pub mod cursor;

/// Paging arguments and per-invocation iteration state.
pub mod paging;
