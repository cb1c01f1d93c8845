//! Pagination types
//!
//! Retry policy, per-page fetch results and the per-call accumulator.

use crate::error::Error;
use crate::types::ResultInfo;
use std::fmt;
use std::time::Duration;

/// Retry behaviour for a full pagination sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of server failures that ends the sweep
    pub max_retries: u32,
    /// Fixed delay before re-requesting the same offset
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Create a retry policy
    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Same retry budget, no delay between attempts
    pub fn without_backoff(max_retries: u32) -> Self {
        Self::new(max_retries, Duration::ZERO)
    }

    /// Whether the `failures`-th server failure may still be retried
    pub fn allows_retry(&self, failures: u32) -> bool {
        failures < self.max_retries
    }
}

/// Outcome of a single page request
///
/// `items` and `result_info` are best-effort when `error` is set and may be
/// empty. `status` is `None` only when no response was obtained.
#[derive(Debug)]
pub struct FetchResult<T> {
    /// Items decoded from the page, in server order
    pub items: Vec<T>,
    /// Pagination metadata for the page
    pub result_info: ResultInfo,
    /// HTTP status of the response
    pub status: Option<u16>,
    /// Failure, if any
    pub error: Option<Error>,
}

impl<T> FetchResult<T> {
    /// A successful page
    pub fn page(items: Vec<T>, result_info: ResultInfo, status: u16) -> Self {
        Self {
            items,
            result_info,
            status: Some(status),
            error: None,
        }
    }

    /// A failed request
    pub fn failed(status: Option<u16>, error: Error) -> Self {
        Self {
            items: Vec::new(),
            result_info: ResultInfo::default(),
            status,
            error: Some(error),
        }
    }

    /// Check if the request succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Check if the server reported a 5xx status
    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|status| status >= 500)
    }

    /// Convert into a `Result`, dropping the status code
    pub fn into_result(self) -> crate::Result<(Vec<T>, ResultInfo)> {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.items, self.result_info)),
        }
    }
}

/// Working state of one pagination sweep
#[derive(Debug)]
pub struct Accumulator<T> {
    collected: Vec<T>,
    offset: u32,
    error_count: u32,
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self {
            collected: Vec::new(),
            offset: 0,
            error_count: 0,
        }
    }
}

impl<T> Accumulator<T> {
    /// Start a sweep at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the next page to request
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Server failures seen so far in this sweep
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Items collected so far
    pub fn collected(&self) -> &[T] {
        &self.collected
    }

    /// Count a server failure, returning the new total
    pub fn record_failure(&mut self) -> u32 {
        self.error_count += 1;
        self.error_count
    }

    /// Append a page's items in order
    pub fn push_page(&mut self, items: Vec<T>) {
        self.collected.extend(items);
    }

    /// Move to the given offset
    pub fn advance_to(&mut self, offset: u32) {
        self.offset = offset;
    }

    /// Finish successfully
    pub fn finish(self) -> Vec<T> {
        self.collected
    }

    /// Finish with an error, keeping the partial items
    pub fn fail(self, source: Error) -> SelectError<T> {
        SelectError {
            partial: self.collected,
            source,
        }
    }
}

/// A failed sweep: the error plus every item collected before it
pub struct SelectError<T> {
    partial: Vec<T>,
    source: Error,
}

impl<T> SelectError<T> {
    /// Wrap an error with the items gathered before it
    pub fn new(partial: Vec<T>, source: Error) -> Self {
        Self { partial, source }
    }

    /// Items collected before the failure
    pub fn partial(&self) -> &[T] {
        &self.partial
    }

    /// The underlying error
    pub fn error(&self) -> &Error {
        &self.source
    }

    /// Split into partial items and the error
    pub fn into_parts(self) -> (Vec<T>, Error) {
        (self.partial, self.source)
    }

    /// Discard partial items
    pub fn into_error(self) -> Error {
        self.source
    }
}

impl<T> fmt::Debug for SelectError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectError")
            .field("partial_len", &self.partial.len())
            .field("source", &self.source)
            .finish()
    }
}

impl<T> fmt::Display for SelectError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} items collected before failure)",
            self.source,
            self.partial.len()
        )
    }
}

impl<T> std::error::Error for SelectError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<SelectError<T>> for Error {
    fn from(err: SelectError<T>) -> Self {
        err.source
    }
}

/// Result of a full sweep
pub type SelectResult<T> = std::result::Result<Vec<T>, SelectError<T>>;
