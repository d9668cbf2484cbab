use crate::value::Value;
use crate::value::ValueMap;
use async_trait::async_trait;
use thiserror::Error;

/// Host-supplied access to data that was loaded for a required selection
/// set. Fetching is the only point at which variable resolution may
/// suspend.
#[async_trait]
pub trait ObjectData: std::fmt::Debug + Send + Sync {
    /// The value loaded under `selection_name` (a result key). A selection
    /// that was loaded as `null` or not at all yields [`Value::Null`].
    async fn fetch(&self, selection_name: &str) -> Result<Value, FetchError>;
}

/// Already-materialized data keyed by result key.
#[async_trait]
impl ObjectData for ValueMap {
    async fn fetch(&self, selection_name: &str) -> Result<Value, FetchError> {
        Ok(self.get(selection_name).cloned().unwrap_or(Value::Null))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Failed to fetch `{selection_name}`: {message}")]
pub struct FetchError {
    pub message: String,
    pub selection_name: String,
}
impl FetchError {
    pub fn new(selection_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selection_name: selection_name.into(),
        }
    }
}
