//! Top-level API client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::RetryPolicy;
use crate::resources::{
    AlertsService, EventsService, NotificationsService, ProbesService, SbtcService,
};

/// UltraDNS API client
///
/// Owns the HTTP client and the retry policy handed to every pagination
/// sweep. Services borrow from it and are cheap to create.
#[derive(Debug)]
pub struct UdnsClient {
    http: HttpClient,
    retry: RetryPolicy,
}

impl UdnsClient {
    /// Create a client from HTTP settings and a retry policy
    pub fn new(http: HttpClientConfig, retry: RetryPolicy) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(http)?,
            retry,
        })
    }

    /// Create a client from a validated config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.http_config(), config.retry_policy())
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get the retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// SiteBacker/Traffic Controller facade
    pub fn sbtc(&self) -> SbtcService<'_> {
        SbtcService::new(&self.http, self.retry)
    }

    /// Alerts API
    pub fn alerts(&self) -> AlertsService<'_> {
        self.sbtc().alerts()
    }

    /// Events API
    pub fn events(&self) -> EventsService<'_> {
        self.sbtc().events()
    }

    /// Notifications API
    pub fn notifications(&self) -> NotificationsService<'_> {
        self.sbtc().notifications()
    }

    /// Probes API
    pub fn probes(&self) -> ProbesService<'_> {
        self.sbtc().probes()
    }
}
