//! Domain types for Safecoin cluster resolution.
//!
//! # Module Organization
//!
//! - [`cluster`] - The closed set of cluster identifiers
//! - [`endpoint`] - Per-cluster API endpoint records
//! - [`error`] - Resolution error types

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cluster;
pub mod endpoint;
pub mod error;

// ============================================================================
// Re-exports
// ============================================================================

pub use cluster::Cluster;
pub use endpoint::ClusterEndpoint;
pub use error::ClusterError;
