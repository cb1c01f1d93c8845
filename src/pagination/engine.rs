//! Offset pagination engine

use super::types::{Accumulator, FetchResult, RetryPolicy, SelectResult};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// A source of pages for one kind of resource
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Identifies the collection being paginated
    type Key: Send + Sync;
    /// Record type returned in each page
    type Item: Send;

    /// Fetch the page starting at `offset`
    async fn fetch_page(&self, key: &Self::Key, offset: u32) -> FetchResult<Self::Item>;
}

/// Drives a [`PageSource`] across every page of a collection
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S: PageSource> Paginator<S> {
    /// Create a paginator with the default retry policy
    pub fn new(source: S) -> Self {
        Self::with_policy(source, RetryPolicy::default())
    }

    /// Create a paginator with a custom retry policy
    pub fn with_policy(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Get the retry policy
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a single page without retries
    pub async fn fetch_one_page(&self, key: &S::Key, offset: u32) -> FetchResult<S::Item> {
        self.source.fetch_page(key, offset).await
    }

    /// Fetch every page of the collection
    ///
    /// Server failures (5xx) are retried at the same offset after the fixed
    /// backoff until the sweep has seen `max_retries` of them. Any other
    /// failure ends the sweep at once. On error the items collected so far
    /// are returned alongside it.
    pub async fn select_all(&self, key: &S::Key) -> SelectResult<S::Item> {
        let mut acc = Accumulator::new();

        loop {
            let page = self.source.fetch_page(key, acc.offset()).await;

            if let Some(error) = page.error {
                if page.status.is_some_and(|status| status >= 500) {
                    let failures = acc.record_failure();
                    if self.policy.allows_retry(failures) {
                        warn!(
                            "Page at offset {} failed with {}, attempt {}/{}, retrying in {:?}",
                            acc.offset(),
                            error,
                            failures,
                            self.policy.max_retries,
                            self.policy.backoff
                        );
                        tokio::time::sleep(self.policy.backoff).await;
                        continue;
                    }
                }
                debug!(
                    "Pagination stopped at offset {} with {} items collected",
                    acc.offset(),
                    acc.collected().len()
                );
                return Err(acc.fail(error));
            }

            let info = page.result_info;
            info!("ResultInfo: {:?}", info);
            acc.push_page(page.items);

            if info.is_last_page() {
                return Ok(acc.finish());
            }
            acc.advance_to(info.next_offset());
        }
    }
}
