//! Cluster name to API endpoint URL resolution for the Safecoin blockchain.
//!
//! Maps a short cluster token such as `"devnet"` to the fully-qualified
//! HTTP(S) API base URL of that cluster, with an optional TLS toggle.
//! Unknown tokens are rejected with an explicit error rather than
//! falling back to a default URL.
//!
//! # Example
//!
//! ```
//! use safecoin_cluster::{cluster_api_url, Cluster};
//!
//! assert_eq!(
//!     cluster_api_url(None, None).unwrap(),
//!     "https://api.devnet.safecoin.org",
//! );
//! assert_eq!(
//!     Cluster::MainnetBeta.api_url(false),
//!     "http://api.mainnet-beta.safecoin.org",
//! );
//! ```

pub mod config;
pub mod domain;
pub mod resolver;

pub use config::CliConfig;
pub use domain::{Cluster, ClusterEndpoint, ClusterError};
pub use resolver::cluster_api_url;
