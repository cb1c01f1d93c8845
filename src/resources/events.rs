//! Scheduled events of an RRSet

use super::keys::{EventKey, RRSetKey, RRSetQuery};
use super::{ListPages, PagedList};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{FetchResult, Paginator, RetryPolicy, SelectResult};
use crate::types::{QueryInfo, ResultInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled pool event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInfo {
    pub id: String,
    pub pool_record: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start: Option<DateTime<Utc>>,
    pub repeat: String,
    pub end: Option<DateTime<Utc>>,
    pub notify: String,
}

/// One page of events
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInfoList {
    pub events: Vec<EventInfo>,
    pub query_info: QueryInfo,
    pub result_info: ResultInfo,
}

impl PagedList for EventInfoList {
    type Item = EventInfo;

    fn into_page(self) -> (Vec<EventInfo>, ResultInfo) {
        (self.events, self.result_info)
    }
}

fn events_page_uri(query: &RRSetQuery, offset: u32) -> String {
    query.key.events_query_uri(&query.query, offset)
}

/// Access to the events API
#[derive(Debug, Clone, Copy)]
pub struct EventsService<'a> {
    client: &'a HttpClient,
    retry: RetryPolicy,
}

impl<'a> EventsService<'a> {
    pub(crate) fn new(client: &'a HttpClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    fn paginator(&self) -> Paginator<ListPages<'a, RRSetQuery, EventInfoList>> {
        Paginator::with_policy(ListPages::new(self.client, events_page_uri), self.retry)
    }

    /// Fetch every event of the RRSet matching `query`
    pub async fn select(&self, key: &RRSetKey, query: &str) -> SelectResult<EventInfo> {
        let query = RRSetQuery::new(key.clone(), query);
        self.paginator().select_all(&query).await
    }

    /// Fetch the page of events matching `query` starting at `offset`
    pub async fn select_with_offset(
        &self,
        key: &RRSetKey,
        query: &str,
        offset: u32,
    ) -> FetchResult<EventInfo> {
        let query = RRSetQuery::new(key.clone(), query);
        self.paginator().fetch_one_page(&query, offset).await
    }

    /// Fetch a single event
    pub async fn find(&self, key: &EventKey) -> Result<EventInfo> {
        self.client.get_json(&key.uri()).await
    }
}
