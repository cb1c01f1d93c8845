//! SiteBacker/Traffic Controller facade
//!
//! Flat convenience calls taking zone, type and name as plain strings.

use super::alerts::AlertsService;
use super::events::{EventInfo, EventsService};
use super::keys::{EventKey, RRSetKey};
use super::notifications::{NotificationInfo, NotificationsService};
use super::probes::ProbesService;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{FetchResult, RetryPolicy, SelectResult};

/// Entry point to the SiteBacker/Traffic Controller resources
#[derive(Debug, Clone, Copy)]
pub struct SbtcService<'a> {
    client: &'a HttpClient,
    retry: RetryPolicy,
}

impl<'a> SbtcService<'a> {
    /// Create the facade over a client
    pub fn new(client: &'a HttpClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Alerts API
    pub fn alerts(&self) -> AlertsService<'a> {
        AlertsService::new(self.client, self.retry)
    }

    /// Events API
    pub fn events(&self) -> EventsService<'a> {
        EventsService::new(self.client, self.retry)
    }

    /// Notifications API
    pub fn notifications(&self) -> NotificationsService<'a> {
        NotificationsService::new(self.client, self.retry)
    }

    /// Probes API
    pub fn probes(&self) -> ProbesService<'a> {
        ProbesService::new(self.client)
    }

    /// All events matching `query`
    pub async fn list_all_events(
        &self,
        query: &str,
        name: &str,
        rtype: &str,
        zone: &str,
    ) -> SelectResult<EventInfo> {
        let key = RRSetKey::new(zone, rtype, name);
        self.events().select(&key, query).await
    }

    /// One page of events matching `query`
    pub async fn list_events(
        &self,
        query: &str,
        name: &str,
        rtype: &str,
        zone: &str,
        offset: u32,
    ) -> FetchResult<EventInfo> {
        let key = RRSetKey::new(zone, rtype, name);
        self.events().select_with_offset(&key, query, offset).await
    }

    /// A single event by id
    pub async fn get_event(
        &self,
        name: &str,
        rtype: &str,
        zone: &str,
        guid: &str,
    ) -> Result<EventInfo> {
        let key = EventKey::new(zone, rtype, name, guid);
        self.events().find(&key).await
    }

    /// All notifications matching `query`
    pub async fn list_all_notifications(
        &self,
        query: &str,
        name: &str,
        rtype: &str,
        zone: &str,
    ) -> SelectResult<NotificationInfo> {
        let key = RRSetKey::new(zone, rtype, name);
        self.notifications().select(&key, query).await
    }

    /// One page of notifications matching `query`
    pub async fn list_notifications(
        &self,
        query: &str,
        name: &str,
        rtype: &str,
        zone: &str,
        offset: u32,
    ) -> FetchResult<NotificationInfo> {
        let key = RRSetKey::new(zone, rtype, name);
        self.notifications()
            .select_with_offset(&key, query, offset)
            .await
    }
}
