//! HTTP client module
//!
//! The generic request helper used by every resource service.
//!
//! # Features
//!
//! - **Single attempt**: one request per call; retry decisions are made by
//!   the pagination engine from the returned status
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Lenient decoding**: bodies are decoded even on error statuses

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RawPage, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
