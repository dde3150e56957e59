//! HTTP seam.
//!
//! Fetchers only need "GET url → body bytes or failure". That contract is the
//! [`HttpClient`] trait so tests can inject instrumented stubs and hosts can
//! bring their own transport. A reqwest-backed implementation ships behind the
//! default `reqwest-client` feature.

use async_trait::async_trait;
use bytes::Bytes;

use ddragon_core::DdragonResult;

/// Minimal GET-only client.
///
/// Implementations must map transport failures and non-success statuses to
/// `DdragonError::Fetch`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> DdragonResult<Bytes>;
}

#[cfg(feature = "reqwest-client")]
pub use self::reqwest_client::ReqwestClient;

#[cfg(feature = "reqwest-client")]
mod reqwest_client {
    use std::time::Duration;

    use async_trait::async_trait;
    use bytes::Bytes;
    use tracing::debug;

    use ddragon_core::{DdragonError, DdragonResult};

    use super::HttpClient;

    const USER_AGENT: &str = concat!("ddragon/", env!("CARGO_PKG_VERSION"));
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        inner: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> DdragonResult<Self> {
            let inner = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| DdragonError::invalid_argument(format!("http client: {e}")))?;
            Ok(Self { inner })
        }
    }

    #[async_trait]
    impl HttpClient for ReqwestClient {
        async fn get(&self, url: &str) -> DdragonResult<Bytes> {
            debug!(%url, "GET");
            let resp = self
                .inner
                .get(url)
                .send()
                .await
                .map_err(|e| DdragonError::fetch(url, e))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(DdragonError::fetch(url, format!("http error: {status}")));
            }

            resp.bytes().await.map_err(|e| DdragonError::fetch(url, e))
        }
    }
}
