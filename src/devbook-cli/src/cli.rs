use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "devbook")]
#[command(version, about = "Devbook - search and index entries from the command line")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a JSON configuration file (defaults to ./devbook.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extension the API key belongs to
    #[arg(long, global = true, env = "DEVBOOK_EXTENSION_ID")]
    pub extension_id: Option<String>,

    /// Secret API key
    #[arg(long, global = true, env = "DEVBOOK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "DEVBOOK_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search one or more indexes
    Search {
        /// Search query
        query: String,

        /// Index to search (repeat for several)
        #[arg(short, long = "index", required = true)]
        indexes: Vec<String>,

        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u32,

        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page_number: u32,
    },

    /// Index entries read from a JSON file containing an array of {title, body}
    Index {
        /// Target index, created on first write
        index: String,

        /// Path to the entries file
        file: PathBuf,
    },

    /// Delete an entire index
    Delete {
        index: String,
    },

    /// Fetch a single entry
    Entry {
        index: String,
        id: String,
    },

    /// List entries of an index page by page
    Entries {
        index: String,

        /// Entries per page
        #[arg(long, default_value = "100")]
        page_size: u32,

        /// Cursor returned by the previous page
        #[arg(long, conflicts_with = "all")]
        page_id: Option<String>,

        /// Follow the cursor and print every entry
        #[arg(long)]
        all: bool,
    },

    /// Show extension info and its indexes
    Info,
}
