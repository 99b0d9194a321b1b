use anyhow::Context as _;
use thiserror::Error;

/// Structural problems with a provider payload.
///
/// Missing or odd-looking fields never end up here; they are defaulted in
/// `api::de`. This is reserved for payloads whose shape is wrong outright.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed {kind} payload: {source}")]
    Shape {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("embedded {kind} entry is not valid JSON: {source}")]
    Embedded {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub fn shape(kind: &'static str, source: serde_json::Error) -> Self {
        PayloadError::Shape { kind, source }
    }

    pub fn embedded(kind: &'static str, source: serde_json::Error) -> Self {
        PayloadError::Embedded { kind, source }
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to record store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} record file: {}", operation, key)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
