//! Resource services
//!
//! Each paginated resource is one instantiation of the pagination engine:
//! a list body type implementing [`PagedList`] and a URI builder, wrapped in
//! a [`ListPages`] source.
//!
//! | Resource      | Key          | Paginated |
//! |---------------|--------------|-----------|
//! | Alerts        | `RRSetKey`   | yes       |
//! | Events        | `RRSetQuery` | yes       |
//! | Notifications | `RRSetQuery` | yes       |
//! | Probes        | `RRSetKey`   | no        |

mod alerts;
mod events;
mod keys;
mod notifications;
mod probes;
mod service;

pub use alerts::{AlertsService, ProbeAlertData, ProbeAlertDataList};
pub use events::{EventInfo, EventInfoList, EventsService};
pub use keys::{event_path, EventKey, RRSetKey, RRSetQuery};
pub use notifications::{
    NotificationInfo, NotificationInfoList, NotificationPoolRecord, NotificationSettings,
    NotificationsService,
};
pub use probes::{ProbeInfo, ProbeInfoList, ProbesService};
pub use service::SbtcService;

use crate::http::HttpClient;
use crate::pagination::{FetchResult, PageSource};
use crate::types::ResultInfo;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A list response body that splits into items and pagination metadata
pub trait PagedList: DeserializeOwned + Default + Send {
    /// Record type of the list
    type Item: Send;

    /// Split into items and metadata
    fn into_page(self) -> (Vec<Self::Item>, ResultInfo);
}

/// Page source backed by a GET per page against a key-derived URI
pub struct ListPages<'a, K, L> {
    client: &'a HttpClient,
    uri: fn(&K, u32) -> String,
    _list: PhantomData<fn() -> L>,
}

impl<'a, K, L> ListPages<'a, K, L> {
    /// Create a source that requests `uri(key, offset)` for each page
    pub fn new(client: &'a HttpClient, uri: fn(&K, u32) -> String) -> Self {
        Self {
            client,
            uri,
            _list: PhantomData,
        }
    }
}

#[async_trait]
impl<K, L> PageSource for ListPages<'_, K, L>
where
    K: Send + Sync,
    L: PagedList,
{
    type Key = K;
    type Item = L::Item;

    async fn fetch_page(&self, key: &K, offset: u32) -> FetchResult<L::Item> {
        let uri = (self.uri)(key, offset);
        let raw = self.client.get_page::<L>(&uri).await;
        let (items, result_info) = raw.body.into_page();

        FetchResult {
            items,
            result_info,
            status: raw.status,
            error: raw.error,
        }
    }
}
