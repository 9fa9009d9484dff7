use crate::request::ApiRequest;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
use crate::{ClientError, Result};
use devbook_core::{
    ApiErrorBody, ClientConfig, EntriesOptions, EntriesPage, EntriesParams, Entry, EntryParams,
    ExtensionInfo, IndexParams, IndexRequest, Indexes, SearchOptions, SearchParams, SearchRequest,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Devbook REST API Client
///
/// Every call is scoped to the extension fixed at construction. The client
/// holds no mutable state, so clones can be used from concurrent tasks.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client for the default API version and base URL
    pub fn new(extension_id: impl Into<String>, secret_api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(extension_id, secret_api_key))
    }

    /// Create a client backed by reqwest, honouring the configured timeout
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let transport = match config.timeout_secs {
            Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs))
                .map_err(ClientError::HttpClient)?,
            None => HttpTransport::new(),
        };

        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends through the given transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search one or more indexes, first page of 10
    pub async fn search(&self, indexes: impl Into<Indexes>, query: &str) -> Result<Vec<Entry>> {
        self.search_with_options(indexes, query, SearchOptions::default())
            .await
    }

    /// Search one or more indexes with explicit pagination
    pub async fn search_with_options(
        &self,
        indexes: impl Into<Indexes>,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<Entry>> {
        let req = ApiRequest::new(Method::POST, "/entry/query")
            .params(&SearchParams {
                page_size: options.page_size,
                page_number: options.page_number,
            })?
            .json(&SearchRequest {
                indexes: indexes.into(),
                query: query.to_string(),
            })?;

        self.execute_json(req).await
    }

    /// Add entries to an index, creating the index if needed
    pub async fn index(&self, index_name: &str, entries: &[Entry]) -> Result<()> {
        let req = ApiRequest::new(Method::PUT, "/entry")
            .params(&IndexParams {
                index: index_name.to_string(),
            })?
            .json(&IndexRequest {
                index: index_name,
                entries,
            })?;

        self.execute(req).await?;
        Ok(())
    }

    /// Delete an entire index
    pub async fn delete(&self, index_name: &str) -> Result<()> {
        let req = ApiRequest::new(Method::DELETE, "/entry").params(&IndexParams {
            index: index_name.to_string(),
        })?;

        self.execute(req).await?;
        Ok(())
    }

    /// Get a single entry by ID
    pub async fn entry(&self, index_name: &str, id: &str) -> Result<Entry> {
        let req = ApiRequest::new(Method::GET, "/entry").params(&EntryParams {
            index: index_name.to_string(),
            entry_id: id.to_string(),
        })?;

        self.execute_json(req).await
    }

    /// Get the first page of up to 100 entries
    pub async fn entries(&self, index_name: &str) -> Result<EntriesPage> {
        self.entries_with_options(index_name, EntriesOptions::default())
            .await
    }

    /// Get one page of entries, continuing from `options.page_id` when set
    pub async fn entries_with_options(
        &self,
        index_name: &str,
        options: EntriesOptions,
    ) -> Result<EntriesPage> {
        let req = ApiRequest::new(Method::GET, "/entry").params(&EntriesParams {
            index: index_name.to_string(),
            page_size: options.page_size,
            page_id: options.page_id,
        })?;

        self.execute_json(req).await
    }

    /// Follow the page cursor until the final page and collect every entry.
    ///
    /// Fails with `RepeatedCursor` if the server hands back a cursor it already
    /// returned.
    pub async fn all_entries(&self, index_name: &str, page_size: u32) -> Result<Vec<Entry>> {
        let mut all = Vec::new();
        let mut seen = HashSet::new();
        let mut page_id: Option<String> = None;

        loop {
            let options = EntriesOptions {
                page_size,
                page_id: page_id.clone(),
            };
            let page = self.entries_with_options(index_name, options).await?;
            all.extend(page.entries);

            match page.page_id {
                Some(next) => {
                    if !seen.insert(next.clone()) {
                        tracing::warn!(page_id = %next, "Devbook returned a repeated page cursor");
                        return Err(ClientError::RepeatedCursor(next));
                    }
                    page_id = Some(next);
                }
                None => break,
            }
        }

        Ok(all)
    }

    /// Extension metadata, including the names of its indexes
    pub async fn info(&self) -> Result<ExtensionInfo> {
        self.execute_json(ApiRequest::new(Method::GET, "")).await
    }

    async fn execute_json<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T> {
        let response = self.execute(req).await?;
        let value = serde_json::from_slice(&response.body)?;
        Ok(value)
    }

    async fn execute(&self, req: ApiRequest) -> Result<HttpResponse> {
        let url = format!("{}{}", self.config.extension_url(), req.route);
        tracing::debug!(method = %req.method, route = req.route, "Sending Devbook request");

        let request = HttpRequest {
            method: req.method,
            url,
            headers: vec![(
                "Authorization".to_string(),
                format!("ApiKey {}", self.config.secret_api_key),
            )],
            query: req.query,
            body: req.body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        tracing::debug!(status = response.status, "Devbook response received");

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        Ok(response)
    }
}

/// Normalize a failed response, falling back to the raw body when it is not
/// the structured `{ "error": { "message" } }` shape
fn error_from_response(response: &HttpResponse) -> ClientError {
    match serde_json::from_slice::<ApiErrorBody>(&response.body) {
        Ok(body) => {
            tracing::warn!(status = response.status, message = %body.error.message, "Devbook API error");
            ClientError::Api {
                status: response.status,
                message: body.error.message,
            }
        }
        Err(_) => {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            tracing::warn!(status = response.status, "Unexpected Devbook error response");
            ClientError::UnexpectedResponse {
                status: response.status,
                body,
            }
        }
    }
}
