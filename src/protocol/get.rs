use async_trait::async_trait;
use tracing::debug;

use crate::protocol::GetResponse;
use crate::protocol::command::Command;
use crate::protocol::error::ApiError;
use crate::store::Store;

/// Read command: look up the value for `key`
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
    pub key: String,
}

impl GetCmd {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Validate the key taken from the request path
    pub fn parse(key: &str) -> Result<Self, ApiError> {
        if key.is_empty() {
            return Err(ApiError::validation("key must not be empty"));
        }
        Ok(GetCmd::new(key))
    }
}

#[async_trait]
impl Command for GetCmd {
    type Output = GetResponse;

    async fn execute(&self, store: &Store) -> Result<GetResponse, ApiError> {
        match store.get(&self.key).await {
            Some(value) => Ok(GetResponse {
                key: self.key.clone(),
                value,
            }),
            None => {
                debug!("Key {:?} not found", self.key);
                Err(ApiError::NotFound)
            }
        }
    }
}
