//! Cluster identifiers for Safecoin networks.
//!
//! This module defines the closed set of Safecoin clusters and the
//! mapping from each cluster to its API endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::endpoint::{self, ClusterEndpoint};
use crate::domain::error::ClusterError;

// ============================================================================
// Cluster
// ============================================================================

/// Safecoin cluster variants.
///
/// Represents the different Safecoin clusters that can be resolved,
/// each with its own API endpoint pair. The set is closed: any other
/// token is rejected with [`ClusterError::UnrecognizedCluster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    /// Devnet - the development network. Default when no cluster is named.
    #[default]
    Devnet,
    /// Testnet - the public test network.
    Testnet,
    /// Mainnet Beta - the production network.
    MainnetBeta,
}

impl Cluster {
    /// Every known cluster, in display order.
    pub const ALL: [Self; 3] = [Self::Devnet, Self::Testnet, Self::MainnetBeta];

    /// Returns the short token identifying the cluster.
    ///
    /// This is the same token accepted by [`Cluster::from_str`].
    ///
    /// # Returns
    ///
    /// A static string slice with the cluster token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::MainnetBeta => "mainnet-beta",
        }
    }

    /// Returns the API endpoint pair for this cluster.
    ///
    /// The mapping is total: every cluster has exactly one endpoint.
    ///
    /// # Returns
    ///
    /// The [`ClusterEndpoint`] holding both URL variants.
    #[must_use]
    pub const fn endpoint(&self) -> ClusterEndpoint {
        match self {
            Self::Devnet => endpoint::DEVNET,
            Self::Testnet => endpoint::TESTNET,
            Self::MainnetBeta => endpoint::MAINNET_BETA,
        }
    }

    /// Returns the API base URL for this cluster.
    ///
    /// # Arguments
    ///
    /// * `use_tls` - `true` selects the `https` variant, `false` the
    ///   `http` variant. Host and path are identical either way.
    ///
    /// # Returns
    ///
    /// The base URL for the cluster API.
    #[must_use]
    pub const fn api_url(&self, use_tls: bool) -> &'static str {
        self.endpoint().url(use_tls)
    }
}

impl FromStr for Cluster {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "mainnet-beta" => Ok(Self::MainnetBeta),
            other => Err(ClusterError::unrecognized(other)),
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
