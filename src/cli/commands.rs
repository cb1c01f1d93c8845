//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// UltraDNS SiteBacker/Traffic Controller CLI
#[derive(Parser, Debug)]
#[command(name = "udns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Extra header sent with every request, as `Name: value`
    #[arg(short = 'H', long = "header", global = true)]
    pub headers: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The RRSet a command operates on
#[derive(Args, Debug, Clone)]
pub struct RRSetArgs {
    /// Zone name
    #[arg(long)]
    pub zone: String,

    /// Record type
    #[arg(long = "type", default_value = "A")]
    pub rtype: String,

    /// Owner name
    #[arg(long)]
    pub name: String,
}

/// Resources that can be fetched one page at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PagedResource {
    Alerts,
    Events,
    Notifications,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every probe alert of an RRSet
    Alerts {
        #[command(flatten)]
        rrset: RRSetArgs,
    },

    /// List every event of an RRSet
    Events {
        #[command(flatten)]
        rrset: RRSetArgs,

        /// Filter expression
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// List every notification of an RRSet
    Notifications {
        #[command(flatten)]
        rrset: RRSetArgs,

        /// Filter expression
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// List the probes of an RRSet
    Probes {
        #[command(flatten)]
        rrset: RRSetArgs,

        /// Filter expression
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Fetch a single page without retries
    Page {
        /// Resource to page through
        #[arg(value_enum)]
        resource: PagedResource,

        #[command(flatten)]
        rrset: RRSetArgs,

        /// Filter expression (ignored for alerts)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Offset of the first item
        #[arg(long, default_value = "0")]
        offset: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alerts() {
        let cli = Cli::parse_from([
            "udns", "alerts", "--zone", "example.com.", "--name", "www",
        ]);
        match cli.command {
            Commands::Alerts { rrset } => {
                assert_eq!(rrset.zone, "example.com.");
                assert_eq!(rrset.rtype, "A");
                assert_eq!(rrset.name, "www");
            }
            other => panic!("Expected Alerts, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_page_with_globals() {
        let cli = Cli::parse_from([
            "udns",
            "page",
            "events",
            "--zone",
            "example.com.",
            "--type",
            "CNAME",
            "--name",
            "www",
            "--offset",
            "50",
            "-H",
            "Authorization: Bearer x",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.headers, vec!["Authorization: Bearer x".to_string()]);
        match cli.command {
            Commands::Page {
                resource,
                rrset,
                offset,
                ..
            } => {
                assert_eq!(resource, PagedResource::Events);
                assert_eq!(rrset.rtype, "CNAME");
                assert_eq!(offset, 50);
            }
            other => panic!("Expected Page, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_zone_is_rejected() {
        assert!(Cli::try_parse_from(["udns", "alerts", "--name", "www"]).is_err());
    }
}
