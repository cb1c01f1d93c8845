//! CLI module
//!
//! Command-line interface over the resource services.
//!
//! # Commands
//!
//! - `alerts` - All probe alerts of an RRSet
//! - `events` - All events of an RRSet
//! - `notifications` - All notifications of an RRSet
//! - `probes` - Probes of an RRSet
//! - `page` - One page of alerts, events or notifications

mod commands;
mod runner;

pub use commands::{Cli, Commands, PagedResource, RRSetArgs};
pub use runner::Runner;
