//! Best-effort HTTP existence probe for candidate URLs

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::switcher::error::ProbeError;

/// Trait for checking whether a candidate URL resolves to real content
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UrlProbe: Send + Sync {
    /// Returns true when the URL exists.
    ///
    /// # Arguments
    /// * `url` - The candidate URL to check
    ///
    /// # Returns
    /// * `Ok(true)` - The URL responded with a success status
    /// * `Ok(false)` - The URL responded with a non-success status
    /// * `Err(ProbeError)` - The request itself failed; callers treat this
    ///   the same as a missing page (a 404 and a network failure are not
    ///   distinguished, a known limitation of the probe)
    async fn exists(&self, url: &str) -> Result<bool, ProbeError>;
}

/// HTTP implementation of the existence probe.
///
/// Issues a plain GET with no custom headers and no body. Carries an
/// explicit per-request timeout so a slow or unreachable server cannot hang
/// a switch indefinitely.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout_ms: u64) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProbe for HttpProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        debug!("Probing candidate URL: {}", url);

        let response = self.client.get(url).send().await?;

        debug!("Probe for {} returned status {}", url, response.status());
        Ok(response.status().is_success())
    }
}
