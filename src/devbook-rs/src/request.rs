use reqwest::Method;
use serde::Serialize;

use crate::Result;

/// One API call relative to the extension root
#[derive(Debug)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub route: &'static str,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, route: &'static str) -> Self {
        Self {
            method,
            route,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn params<Q: Serialize>(mut self, params: &Q) -> Result<Self> {
        self.query = query_pairs(params)?;
        Ok(self)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Flatten a params record into query-string pairs, dropping unset fields
fn query_pairs<Q: Serialize>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let serde_json::Value::Object(map) = value else {
        return Err(<serde_json::Error as serde::ser::Error>::custom(
            "query parameters must serialize to an object",
        )
        .into());
    };

    let pairs = map
        .into_iter()
        .filter_map(|(name, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((name, s)),
            other => Some((name, other.to_string())),
        })
        .collect();

    Ok(pairs)
}
