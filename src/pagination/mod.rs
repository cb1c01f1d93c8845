//! Pagination module
//!
//! Offset pagination with a bounded retry budget.
//!
//! # Overview
//!
//! A [`PageSource`] performs exactly one request for one page. The
//! [`Paginator`] drives a source from offset zero until the server reports
//! that nothing remains, retrying server-side failures with a fixed backoff.
//! The retry budget in [`RetryPolicy`] covers the whole sweep, not a single
//! page.
//!
//! On failure the items collected so far are returned together with the
//! error in a [`SelectError`]. Callers must treat an error as possibly
//! partial.

mod engine;
mod types;

pub use engine::{PageSource, Paginator};
pub use types::{Accumulator, FetchResult, RetryPolicy, SelectError, SelectResult};
