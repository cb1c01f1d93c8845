//! Probe alerts of an RRSet

use super::keys::RRSetKey;
use super::{ListPages, PagedList};
use crate::http::HttpClient;
use crate::pagination::{FetchResult, Paginator, RetryPolicy, SelectResult};
use crate::types::{QueryInfo, ResultInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single probe alert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeAlertData {
    pub pool_record: String,
    pub probe_type: String,
    pub probe_status: String,
    pub alert_date: Option<DateTime<Utc>>,
    // Field name is spelled this way on the wire
    pub failover_occured: bool,
    pub owner_name: String,
    pub status: String,
}

/// One page of probe alerts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeAlertDataList {
    pub alerts: Vec<ProbeAlertData>,
    pub query_info: QueryInfo,
    pub result_info: ResultInfo,
}

impl PagedList for ProbeAlertDataList {
    type Item = ProbeAlertData;

    fn into_page(self) -> (Vec<ProbeAlertData>, ResultInfo) {
        (self.alerts, self.result_info)
    }
}

/// Access to the alerts API
#[derive(Debug, Clone, Copy)]
pub struct AlertsService<'a> {
    client: &'a HttpClient,
    retry: RetryPolicy,
}

impl<'a> AlertsService<'a> {
    pub(crate) fn new(client: &'a HttpClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    fn paginator(&self) -> Paginator<ListPages<'a, RRSetKey, ProbeAlertDataList>> {
        Paginator::with_policy(
            ListPages::new(self.client, RRSetKey::alerts_query_uri),
            self.retry,
        )
    }

    /// Fetch every probe alert of the RRSet
    pub async fn select(&self, key: &RRSetKey) -> SelectResult<ProbeAlertData> {
        self.paginator().select_all(key).await
    }

    /// Fetch the page of alerts starting at `offset`
    pub async fn select_with_offset(
        &self,
        key: &RRSetKey,
        offset: u32,
    ) -> FetchResult<ProbeAlertData> {
        self.paginator().fetch_one_page(key, offset).await
    }
}
