//! `safecoin-cluster` CLI.
//!
//! Resolves Safecoin cluster names to their API endpoint URLs.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safecoin_cluster::{CliConfig, Cluster, ClusterError, cluster_api_url};

/// Version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// safecoin-cluster - resolve Safecoin cluster names to API endpoint URLs
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a cluster name to its API URL
    Resolve {
        /// Cluster token (devnet, testnet, mainnet-beta); persisted default when omitted
        cluster: Option<String>,
        /// Select the http variant instead of https
        #[arg(long)]
        insecure: bool,
    },
    /// List every known cluster with both URL variants
    List,
    /// Persist default cluster and scheme for future invocations
    SetDefault {
        /// Cluster token to use as the default
        cluster: String,
        /// Make the http variant the default
        #[arg(long)]
        insecure: bool,
    },
    /// Display version information
    Version,
}

/// Application entry point.
fn main() -> Result<()> {
    // Initialize logging FIRST
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Resolve { cluster, insecure }) => resolve(cluster.as_deref(), insecure),
        Some(Commands::List) => {
            list();
            Ok(())
        }
        Some(Commands::SetDefault { cluster, insecure }) => set_default(&cluster, insecure),
        Some(Commands::Version) => {
            println!("safecoin-cluster v{VERSION}");
            println!("Cluster name to API endpoint URL resolution for Safecoin");
            Ok(())
        }
        // Bare invocation resolves with the persisted defaults.
        None => resolve(None, false),
    }
}

/// Resolves and prints a cluster URL.
///
/// Precedence: explicit argument, then persisted config, then the
/// built-in defaults (devnet, https).
fn resolve(cluster: Option<&str>, insecure: bool) -> Result<()> {
    let config = CliConfig::load();
    let use_tls = if insecure { false } else { config.use_tls };

    let url = match cluster {
        Some(token) => cluster_api_url(Some(token), Some(use_tls)),
        None => Ok(config.cluster.api_url(use_tls)),
    }
    .map_err(ClusterError::into_report)?;

    println!("{url}");
    Ok(())
}

/// Prints every known cluster with both URL variants.
fn list() {
    for cluster in Cluster::ALL {
        let endpoint = cluster.endpoint();
        println!(
            "{:<14} {}  {}",
            cluster.as_str(),
            endpoint.https_url,
            endpoint.http_url
        );
    }
}

/// Persists the default cluster and scheme.
fn set_default(cluster: &str, insecure: bool) -> Result<()> {
    let cluster: Cluster = cluster.parse().map_err(ClusterError::into_report)?;
    let config = CliConfig {
        cluster,
        use_tls: !insecure,
    };
    config.save()?;
    tracing::info!(cluster = %config.cluster, use_tls = config.use_tls, "saved defaults");
    println!("Default cluster set to '{}'", config.cluster);
    Ok(())
}
