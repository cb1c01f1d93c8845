//! Probes configured on an RRSet
//!
//! The probe index is returned in one response, so it bypasses the
//! pagination engine.

use super::keys::RRSetKey;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::FetchResult;
use crate::types::{JsonValue, QueryInfo, ResultInfo};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A probe definition; `details` depends on `probe_type` and is kept raw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeInfo {
    pub id: String,
    pub pool_record: String,
    #[serde(rename = "type")]
    pub probe_type: String,
    pub interval: String,
    pub agents: Vec<String>,
    pub threshold: u32,
    pub details: JsonValue,
}

impl ProbeInfo {
    /// Decode `details` into the shape that matches `probe_type`
    ///
    /// The caller picks `T` for the probe type at hand; a mismatch is a
    /// [`crate::Error::JsonParse`].
    pub fn details_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.details.clone())?)
    }
}

/// The probe index of an RRSet
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeInfoList {
    pub probes: Vec<ProbeInfo>,
    pub query_info: QueryInfo,
    pub result_info: ResultInfo,
}

/// Access to the probes API
#[derive(Debug, Clone, Copy)]
pub struct ProbesService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProbesService<'a> {
    pub(crate) fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetch the probes of the RRSet matching `query`
    pub async fn select(&self, key: &RRSetKey, query: &str) -> FetchResult<ProbeInfo> {
        let raw = self
            .client
            .get_page::<ProbeInfoList>(&key.probes_query_uri(query))
            .await;

        FetchResult {
            items: raw.body.probes,
            result_info: raw.body.result_info,
            status: raw.status,
            error: raw.error,
        }
    }
}
