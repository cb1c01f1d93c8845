//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PagedResource, RRSetArgs};
use crate::client::UdnsClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{FetchResult, SelectResult};
use crate::resources::RRSetKey;
use crate::types::ResultInfo;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = UdnsClient::from_config(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Alerts { rrset } => {
                let result = client.alerts().select(&rrset_key(rrset)).await;
                emit_all(result)
            }
            Commands::Events { rrset, query } => {
                let result = client.events().select(&rrset_key(rrset), query).await;
                emit_all(result)
            }
            Commands::Notifications { rrset, query } => {
                let result = client
                    .notifications()
                    .select(&rrset_key(rrset), query)
                    .await;
                emit_all(result)
            }
            Commands::Probes { rrset, query } => {
                let page = client.probes().select(&rrset_key(rrset), query).await;
                emit_page(page)
            }
            Commands::Page {
                resource,
                rrset,
                query,
                offset,
            } => {
                let key = rrset_key(rrset);
                match resource {
                    PagedResource::Alerts => {
                        emit_page(client.alerts().select_with_offset(&key, *offset).await)
                    }
                    PagedResource::Events => emit_page(
                        client
                            .events()
                            .select_with_offset(&key, query, *offset)
                            .await,
                    ),
                    PagedResource::Notifications => emit_page(
                        client
                            .notifications()
                            .select_with_offset(&key, query, *offset)
                            .await,
                    ),
                }
            }
        }
    }

    /// Build the client config from the file and command-line overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }

        for raw in &self.cli.headers {
            let (name, value) = parse_header(raw)?;
            config.headers.insert(name, value);
        }

        config.validate()?;
        Ok(config)
    }
}

fn rrset_key(args: &RRSetArgs) -> RRSetKey {
    RRSetKey::new(&args.zone, &args.rtype, &args.name)
}

/// Split a `Name: value` header argument
pub(crate) fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::invalid_value("header", format!("expected 'Name: value', got '{raw}'")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_value("header", "header name is empty"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Print every collected item; on failure print the partial items first
fn emit_all<T: Serialize>(result: SelectResult<T>) -> Result<()> {
    match result {
        Ok(items) => print_json(&items),
        Err(err) => {
            let (partial, source) = err.into_parts();
            print_json(&partial)?;
            Err(source)
        }
    }
}

/// Print one page with its metadata
fn emit_page<T: Serialize>(page: FetchResult<T>) -> Result<()> {
    let FetchResult {
        items,
        result_info,
        status,
        error,
    } = page;

    print_json(&PageOutput {
        items: &items,
        result_info,
        status,
    })?;

    match error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a, T> {
    items: &'a [T],
    result_info: ResultInfo,
    status: Option<u16>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("Authorization: Bearer abc").unwrap(),
            ("Authorization".to_string(), "Bearer abc".to_string())
        );
        assert_eq!(
            parse_header("X-Empty:").unwrap(),
            ("X-Empty".to_string(), String::new())
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_emit_all_returns_source_error() {
        let result: SelectResult<u32> = Err(crate::pagination::SelectError::new(
            vec![1, 2],
            Error::http_status(503, "busy"),
        ));
        let err = emit_all(result).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_emit_page_ok() {
        let page = FetchResult::page(vec!["a"], ResultInfo::new(0, 1, 1), 200);
        assert!(emit_page(page).is_ok());
    }
}
