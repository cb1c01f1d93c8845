//! Probe notification subscriptions of an RRSet

use super::keys::{RRSetKey, RRSetQuery};
use super::{ListPages, PagedList};
use crate::http::HttpClient;
use crate::pagination::{FetchResult, Paginator, RetryPolicy, SelectResult};
use crate::types::{QueryInfo, ResultInfo};
use serde::{Deserialize, Serialize};

/// Which kinds of change trigger a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub probe: bool,
    pub record: bool,
    pub scheduled: bool,
}

/// Notification settings for one pool record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPoolRecord {
    pub pool_record: String,
    pub notification: NotificationSettings,
}

/// A notification subscription
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationInfo {
    pub email: String,
    pub pool_records: Vec<NotificationPoolRecord>,
}

/// One page of notifications
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationInfoList {
    pub notifications: Vec<NotificationInfo>,
    pub query_info: QueryInfo,
    pub result_info: ResultInfo,
}

impl PagedList for NotificationInfoList {
    type Item = NotificationInfo;

    fn into_page(self) -> (Vec<NotificationInfo>, ResultInfo) {
        (self.notifications, self.result_info)
    }
}

fn notifications_page_uri(query: &RRSetQuery, offset: u32) -> String {
    query.key.notifications_query_uri(&query.query, offset)
}

/// Access to the notifications API
#[derive(Debug, Clone, Copy)]
pub struct NotificationsService<'a> {
    client: &'a HttpClient,
    retry: RetryPolicy,
}

impl<'a> NotificationsService<'a> {
    pub(crate) fn new(client: &'a HttpClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    fn paginator(&self) -> Paginator<ListPages<'a, RRSetQuery, NotificationInfoList>> {
        Paginator::with_policy(
            ListPages::new(self.client, notifications_page_uri),
            self.retry,
        )
    }

    /// Fetch every notification of the RRSet matching `query`
    pub async fn select(&self, key: &RRSetKey, query: &str) -> SelectResult<NotificationInfo> {
        let query = RRSetQuery::new(key.clone(), query);
        self.paginator().select_all(&query).await
    }

    /// Fetch the page of notifications matching `query` starting at `offset`
    pub async fn select_with_offset(
        &self,
        key: &RRSetKey,
        query: &str,
        offset: u32,
    ) -> FetchResult<NotificationInfo> {
        let query = RRSetQuery::new(key.clone(), query);
        self.paginator().fetch_one_page(&query, offset).await
    }
}
