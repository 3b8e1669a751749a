//! Listing operations for Amazon WorkSpaces resources.
//!
//! This module provides the WorkSpaces "Describe" calls as paged listings:
//! - WorkSpaces, optionally filtered by directory, user or bundle
//! - WorkSpace bundles and images
//! - Registered directories
//! - WorkSpace applications

/// Describe applications operation for listing WorkSpace applications.
pub mod applications;

/// Common utilities shared by the describe operations.
pub mod common;

/// Describe workspace directories operation for listing registered directories.
pub mod directories;

/// Describe workspace bundles operation for listing bundles.
pub mod workspace_bundles;

/// Describe workspace images operation for listing images.
pub mod workspace_images;

/// Describe workspaces operation for listing WorkSpaces.
pub mod workspaces;
