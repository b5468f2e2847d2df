//! Error types for cluster resolution.
//!
//! This module defines the custom error type raised when a supplied
//! cluster token is not a member of the enumerated cluster set.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for cluster resolution.
///
/// Resolution has a single failure mode: the caller named a cluster
/// that does not exist. No partial or default URL is substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The supplied token is not a known cluster name.
    #[error("unrecognized cluster '{name}'")]
    UnrecognizedCluster {
        /// The token that failed to resolve.
        name: String,
    },
}

impl ClusterError {
    /// Create a new unrecognized-cluster error for the given token.
    ///
    /// # Arguments
    ///
    /// * `name` - The token that failed to resolve
    ///
    /// # Returns
    ///
    /// A new `ClusterError::UnrecognizedCluster` variant.
    #[must_use]
    pub fn unrecognized(name: impl Into<String>) -> Self {
        Self::UnrecognizedCluster { name: name.into() }
    }

    /// Convert to a `color_eyre::Report` for CLI error display.
    ///
    /// # Returns
    ///
    /// A `color_eyre::Report` containing the error message.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
