use serde::{Deserialize, Serialize};
use std::fmt;

/// ApiVersion selects the versioned API prefix
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "v1")]
    V1,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry is one indexed document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // Server-assigned, absent when indexing
    pub title: String,
    pub body: String,
}

impl Entry {
    /// Create an entry without an id, ready to be indexed
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// ExtensionInfo describes the indexes that exist under an extension
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtensionInfo {
    #[serde(rename = "extensionID")]
    pub extension_id: String,
    #[serde(default)]
    pub indexes: Vec<String>,
}

/// EntriesPage is one page of a cursor-paginated listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntriesPage {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(rename = "pageID", default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>, // None on the final page
}

impl EntriesPage {
    pub fn has_more(&self) -> bool {
        self.page_id.is_some()
    }
}

/// Indexes is the set of index names a search runs against.
///
/// A single name and a list are both accepted and always serialize as a
/// JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Indexes(pub Vec<String>);

impl Indexes {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Indexes {
    fn from(name: &str) -> Self {
        Indexes(vec![name.to_string()])
    }
}

impl From<String> for Indexes {
    fn from(name: String) -> Self {
        Indexes(vec![name])
    }
}

impl From<&String> for Indexes {
    fn from(name: &String) -> Self {
        Indexes(vec![name.clone()])
    }
}

impl From<Vec<String>> for Indexes {
    fn from(names: Vec<String>) -> Self {
        Indexes(names)
    }
}

impl From<Vec<&str>> for Indexes {
    fn from(names: Vec<&str>) -> Self {
        Indexes(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Indexes {
    fn from(names: &[&str]) -> Self {
        Indexes(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<&[String]> for Indexes {
    fn from(names: &[String]) -> Self {
        Indexes(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Indexes {
    fn from(names: [&str; N]) -> Self {
        Indexes(names.iter().map(|n| n.to_string()).collect())
    }
}

/// SearchOptions controls search pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub page_size: u32,
    pub page_number: u32, // Zero-based
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_number: 0,
        }
    }
}

/// EntriesOptions controls cursor pagination over an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntriesOptions {
    pub page_size: u32,
    pub page_id: Option<String>,
}

impl Default for EntriesOptions {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_id: None,
        }
    }
}

/// SearchRequest is the body of `POST /entry/query`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub indexes: Indexes,
    pub query: String,
}

/// SearchParams is the query string of `POST /entry/query`
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
}

/// IndexRequest is the body of `PUT /entry`.
///
/// The target index is sent here as well as in the query string.
#[derive(Debug, Serialize)]
pub struct IndexRequest<'a> {
    pub index: &'a str,
    pub entries: &'a [Entry],
}

/// IndexParams addresses a whole index (`PUT` and `DELETE /entry`)
#[derive(Debug, Clone, Serialize)]
pub struct IndexParams {
    pub index: String,
}

/// EntryParams addresses a single entry (`GET /entry`)
#[derive(Debug, Clone, Serialize)]
pub struct EntryParams {
    pub index: String,
    #[serde(rename = "entryID")]
    pub entry_id: String,
}

/// EntriesParams is the query string of a paginated `GET /entry`
#[derive(Debug, Clone, Serialize)]
pub struct EntriesParams {
    pub index: String,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageID", skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

/// ApiErrorBody is the structured error returned with HTTP failures
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
