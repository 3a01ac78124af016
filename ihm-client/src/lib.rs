//! # IHM Client
//!
//! Outbound adapter that records bills in an IHateMoney project.
//!
//! Bills are posted form-encoded to `{host}/api/projects/{slug}/bills`,
//! authenticated with HTTP Basic (project slug / project password).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use relay_types::{Bill, BillSink, DownstreamReply, SinkError};

/// Connection settings for one IHM project.
#[derive(Clone)]
pub struct IhmConfig {
    /// Base URL of the IHM instance, e.g. `http://ihatemoney:8000`.
    pub host: String,
    pub project_slug: String,
    pub project_password: String,
    /// Upper bound for a single request, connect to last body byte.
    pub timeout: Duration,
    /// Total attempts, including the first one. Only connection failures
    /// are retried, since the bill cannot have been created by then.
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl IhmConfig {
    pub fn new(
        host: impl Into<String>,
        project_slug: impl Into<String>,
        project_password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            project_slug: project_slug.into(),
            project_password: project_password.into(),
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            retry_delay: Duration::from_millis(250),
        }
    }
}

impl fmt::Debug for IhmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IhmConfig")
            .field("host", &self.host)
            .field("project_slug", &self.project_slug)
            .field("project_password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

/// IHateMoney bills client.
#[derive(Debug, Clone)]
pub struct IhmClient {
    http: Client,
    config: IhmConfig,
    bills_url: String,
}

impl IhmClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Configuration` if the HTTP client cannot be built
    /// or `max_attempts` is zero.
    pub fn new(config: IhmConfig) -> Result<Self, SinkError> {
        if config.max_attempts == 0 {
            return Err(SinkError::Configuration(
                "max_attempts must be at least 1".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SinkError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let bills_url = format!(
            "{}/api/projects/{}/bills",
            config.host.trim_end_matches('/'),
            config.project_slug
        );

        Ok(Self {
            http,
            config,
            bills_url,
        })
    }

    /// Endpoint bills are posted to.
    pub fn bills_url(&self) -> &str {
        &self.bills_url
    }

    /// One POST. The returned flag tells whether the failure is safe to
    /// retry.
    async fn post_once(&self, bill: &Bill) -> Result<DownstreamReply, (SinkError, bool)> {
        let resp = self
            .http
            .post(&self.bills_url)
            .basic_auth(&self.config.project_slug, Some(&self.config.project_password))
            .form(&bill.form_pairs())
            .send()
            .await
            .map_err(|e| (self.categorize(&e), e.is_connect()))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| (self.categorize(&e), false))?;
        debug!(status, body = %text, "Received IHM response");

        let body = serde_json::from_str(&text).map_err(|e| {
            (
                SinkError::InvalidResponse {
                    status,
                    message: e.to_string(),
                },
                false,
            )
        })?;

        Ok(DownstreamReply { status, body })
    }

    fn categorize(&self, e: &reqwest::Error) -> SinkError {
        if e.is_timeout() {
            SinkError::Timeout(self.config.timeout)
        } else if e.is_connect() {
            SinkError::Network(format!("connection failed: {e}"))
        } else {
            SinkError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl BillSink for IhmClient {
    /// Posts the bill, retrying connection failures up to `max_attempts`.
    ///
    /// Any HTTP response, whatever its status, ends the attempt loop.
    async fn submit(&self, bill: &Bill) -> Result<DownstreamReply, SinkError> {
        debug!(url = %self.bills_url, "Posting bill to IHM");
        let mut attempt = 1;
        loop {
            match self.post_once(bill).await {
                Ok(reply) => return Ok(reply),
                Err((e, retryable)) if retryable && attempt < self.config.max_attempts => {
                    warn!(attempt, error = %e, "IHM unreachable, retrying");
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
                Err((e, _)) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bills_url() {
        let client = IhmClient::new(IhmConfig::new("http://ihm:8000", "household", "pw")).unwrap();
        assert_eq!(client.bills_url(), "http://ihm:8000/api/projects/household/bills");
    }

    #[test]
    fn test_bills_url_with_trailing_slash() {
        let client = IhmClient::new(IhmConfig::new("http://ihm:8000/", "household", "pw")).unwrap();
        assert_eq!(client.bills_url(), "http://ihm:8000/api/projects/household/bills");
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = IhmConfig {
            max_attempts: 0,
            ..IhmConfig::new("http://ihm:8000", "household", "pw")
        };
        assert!(matches!(
            IhmClient::new(config),
            Err(SinkError::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = IhmConfig::new("http://ihm:8000", "household", "hunter2");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("household"));
    }
}
