//! Command implementations for the Devbook CLI.

use anyhow::{Context, Result};
use devbook_rs::{Client, ClientConfig, EntriesOptions, Entry, SearchOptions};
use serde_json::json;
use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Commands};

pub const DEFAULT_CONFIG_PATH: &str = "devbook.json";

/// Build the client configuration: file first, then flags and environment
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => ClientConfig::default(),
    };

    if let Some(extension_id) = &cli.extension_id {
        config.extension_id = extension_id.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.secret_api_key = api_key.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = Some(timeout);
    }

    config
        .validate()
        .context("Set DEVBOOK_EXTENSION_ID and DEVBOOK_API_KEY or provide a config file")?;

    Ok(config)
}

fn load_config(path: &Path) -> Result<ClientConfig> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Config path is not valid UTF-8: {:?}", path))?;
    ClientConfig::load(path_str).with_context(|| format!("Failed to load config {}", path_str))
}

/// Read a JSON array of entries to index
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries file {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_str(&contents)
        .with_context(|| format!("Entries file {} is not a JSON array of entries", path.display()))?;
    Ok(entries)
}

/// Execute one command and print its JSON result
pub async fn run<W: Write>(client: &Client, command: Commands, out: &mut W) -> Result<()> {
    let output = match command {
        Commands::Search {
            query,
            indexes,
            page_size,
            page_number,
        } => {
            tracing::info!("Searching {:?} for '{}'", indexes, query);
            let results = client
                .search_with_options(
                    indexes,
                    &query,
                    SearchOptions {
                        page_size,
                        page_number,
                    },
                )
                .await?;
            serde_json::to_value(results)?
        }
        Commands::Index { index, file } => {
            let entries = load_entries(&file)?;
            tracing::info!("Indexing {} entries into '{}'", entries.len(), index);
            client.index(&index, &entries).await?;
            json!({ "index": index, "indexed": entries.len() })
        }
        Commands::Delete { index } => {
            tracing::info!("Deleting index '{}'", index);
            client.delete(&index).await?;
            json!({ "index": index, "deleted": true })
        }
        Commands::Entry { index, id } => serde_json::to_value(client.entry(&index, &id).await?)?,
        Commands::Entries {
            index,
            page_size,
            page_id,
            all,
        } => {
            if all {
                let entries = client.all_entries(&index, page_size).await?;
                tracing::info!("Fetched {} entries from '{}'", entries.len(), index);
                serde_json::to_value(entries)?
            } else {
                let page = client
                    .entries_with_options(&index, EntriesOptions { page_size, page_id })
                    .await?;
                serde_json::to_value(page)?
            }
        }
        Commands::Info => serde_json::to_value(client.info().await?)?,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
