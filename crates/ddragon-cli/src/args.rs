use clap::{Args, Parser, Subcommand};

use ddragon_core::config::{
    FetcherConfig, DEFAULT_BASE_URL, DEFAULT_DATA_VERSION, DEFAULT_LOCALE,
    DEFAULT_MAX_CONCURRENT_REQUESTS,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "ddragon", version, about = "Data Dragon champion and item fetcher")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log as JSON lines on stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub fetch: FetchArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// CDN base URL.
    #[arg(long, global = true, env = "DDRAGON_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Data Dragon version (major.minor.patch).
    #[arg(long, global = true, env = "DDRAGON_DATA_VERSION", default_value = DEFAULT_DATA_VERSION)]
    pub data_version: String,

    #[arg(long, global = true, env = "DDRAGON_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Maximum concurrent detail requests.
    #[arg(
        long,
        global = true,
        env = "DDRAGON_MAX_CONCURRENT",
        default_value_t = DEFAULT_MAX_CONCURRENT_REQUESTS
    )]
    pub max_concurrent: usize,

    /// Refetch manifests on every call.
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Skip per-champion detail enrichment.
    #[arg(long, global = true)]
    pub no_details: bool,
}

impl FetchArgs {
    pub fn to_config(&self) -> FetcherConfig {
        FetcherConfig::default()
            .with_base_url(self.base_url.clone())
            .with_data_version(self.data_version.clone())
            .with_locale(self.locale.clone())
            .with_max_concurrent_requests(self.max_concurrent)
            .with_caching(!self.no_cache)
            .with_details(!self.no_details)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every champion as a canonical record.
    Champions {
        /// Manifest data only; no detail requests.
        #[arg(long)]
        basic: bool,
    },

    /// List every item as a canonical record.
    Items,

    /// Fetch detail documents for up to 10 champions.
    Details {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show the manifest entry of one item.
    Item { name: String },

    /// Print the effective configuration and validate it.
    Doctor,
}
