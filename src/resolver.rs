//! Cluster-name to API-URL resolution.
//!
//! The single public operation of the crate: take an optional cluster
//! token and an optional TLS preference, return the matching base URL
//! or reject the token. Pure and stateless, safe to call from any
//! number of threads.

use crate::domain::{Cluster, ClusterError};

/// Resolves a cluster token to its API base URL.
///
/// # Arguments
///
/// * `name` - Optional cluster token. `None` resolves the devnet cluster.
/// * `use_tls` - Optional scheme preference. `None` selects `https`.
///
/// # Errors
///
/// Returns [`ClusterError::UnrecognizedCluster`] when `name` is not a
/// member of the enumerated cluster set. No URL is returned for
/// invalid input.
///
/// # Examples
///
/// ```
/// use safecoin_cluster::cluster_api_url;
///
/// assert_eq!(
///     cluster_api_url(None, None).unwrap(),
///     "https://api.devnet.safecoin.org",
/// );
/// assert_eq!(
///     cluster_api_url(Some("devnet"), Some(false)).unwrap(),
///     "http://api.devnet.safecoin.org",
/// );
/// assert!(cluster_api_url(Some("abc123"), None).is_err());
/// ```
pub fn cluster_api_url(
    name: Option<&str>,
    use_tls: Option<bool>,
) -> Result<&'static str, ClusterError> {
    let cluster = match name {
        Some(token) => token.parse::<Cluster>()?,
        None => Cluster::default(),
    };
    let url = cluster.api_url(use_tls.unwrap_or(true));
    tracing::trace!(cluster = %cluster, url, "resolved cluster URL");
    Ok(url)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_defaults_to_devnet_https() {
        assert_eq!(
            cluster_api_url(None, None).unwrap(),
            "https://api.devnet.safecoin.org"
        );
        assert_eq!(
            cluster_api_url(Some("devnet"), None).unwrap(),
            "https://api.devnet.safecoin.org"
        );
        assert_eq!(
            cluster_api_url(Some("devnet"), Some(true)).unwrap(),
            "https://api.devnet.safecoin.org"
        );
    }

    #[test]
    fn test_devnet_insecure() {
        assert_eq!(
            cluster_api_url(Some("devnet"), Some(false)).unwrap(),
            "http://api.devnet.safecoin.org"
        );
    }

    #[test]
    fn test_unrecognized_token_is_rejected() {
        let err = cluster_api_url(Some("abc123"), None).unwrap_err();
        assert_eq!(err, ClusterError::unrecognized("abc123"));

        // The TLS preference does not rescue an unknown token.
        assert!(cluster_api_url(Some("abc123"), Some(false)).is_err());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(cluster_api_url(Some(""), None).is_err());
    }

    #[rstest]
    #[case::devnet("devnet")]
    #[case::testnet("testnet")]
    #[case::mainnet_beta("mainnet-beta")]
    fn test_tls_toggle_changes_only_scheme(#[case] token: &str) {
        let secure = cluster_api_url(Some(token), Some(true)).unwrap();
        let insecure = cluster_api_url(Some(token), Some(false)).unwrap();

        assert_eq!(
            secure.strip_prefix("https://").unwrap(),
            insecure.strip_prefix("http://").unwrap(),
        );
    }

    #[test]
    fn test_repeated_calls_return_identical_url() {
        let first = cluster_api_url(Some("testnet"), None).unwrap();
        let second = cluster_api_url(Some("testnet"), None).unwrap();
        assert_eq!(first, second);
        // &'static str from the same constant, same address.
        assert!(std::ptr::eq(first, second));
    }
}
