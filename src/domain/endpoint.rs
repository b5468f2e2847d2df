//! API endpoint records for Safecoin clusters.
//!
//! Each cluster maps to one [`ClusterEndpoint`] holding both the
//! secure and insecure base URL. The two variants are precomputed
//! constants sharing an identical host, so the scheme toggle can
//! never change anything but the protocol prefix.

// ============================================================================
// Endpoint Constants
// ============================================================================

/// Endpoint pair for the devnet cluster.
pub(crate) const DEVNET: ClusterEndpoint = ClusterEndpoint {
    https_url: "https://api.devnet.safecoin.org",
    http_url: "http://api.devnet.safecoin.org",
};

/// Endpoint pair for the testnet cluster.
pub(crate) const TESTNET: ClusterEndpoint = ClusterEndpoint {
    https_url: "https://api.testnet.safecoin.org",
    http_url: "http://api.testnet.safecoin.org",
};

/// Endpoint pair for the mainnet-beta cluster.
pub(crate) const MAINNET_BETA: ClusterEndpoint = ClusterEndpoint {
    https_url: "https://api.mainnet-beta.safecoin.org",
    http_url: "http://api.mainnet-beta.safecoin.org",
};

// ============================================================================
// ClusterEndpoint
// ============================================================================

/// Immutable pair of base URLs for one cluster.
///
/// # Fields
///
/// * `https_url` - The secure (TLS) variant of the API base URL
/// * `http_url` - The insecure variant, same host and path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterEndpoint {
    /// The secure (`https`) base URL.
    pub https_url: &'static str,
    /// The insecure (`http`) base URL.
    pub http_url: &'static str,
}

impl ClusterEndpoint {
    /// Selects a URL variant by TLS preference.
    ///
    /// # Returns
    ///
    /// The `https` URL when `use_tls` is `true`, the `http` URL otherwise.
    #[must_use]
    pub const fn url(&self, use_tls: bool) -> &'static str {
        if use_tls { self.https_url } else { self.http_url }
    }
}

// ============================================================================
// Tests
// ============================================================================
