use async_trait::async_trait;
use tracing::debug;

use crate::protocol::command::Command;
use crate::protocol::error::ApiError;
use crate::protocol::{SetRequest, SetResponse};
use crate::store::Store;

/// Write command: store `value` under `key`
#[derive(Debug, Clone, PartialEq)]
pub struct SetCmd {
    pub key: String,
    pub value: String,
}

impl SetCmd {
    /// Validate a write request body
    pub fn parse(req: SetRequest) -> Result<Self, ApiError> {
        let key = match req.key {
            Some(key) if !key.is_empty() => key,
            Some(_) => return Err(ApiError::validation("key must not be empty")),
            None => return Err(ApiError::validation("missing field `key`")),
        };
        let value = req
            .value
            .ok_or_else(|| ApiError::validation("missing field `value`"))?;

        Ok(SetCmd { key, value })
    }
}

#[async_trait]
impl Command for SetCmd {
    type Output = SetResponse;

    async fn execute(&self, store: &Store) -> Result<SetResponse, ApiError> {
        store.set(self.key.clone(), self.value.clone()).await;
        debug!("Set key {:?} ({} bytes)", self.key, self.value.len());
        Ok(SetResponse::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: Option<&str>, value: Option<&str>) -> SetRequest {
        SetRequest {
            key: key.map(str::to_string),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_success() {
        let cmd = SetCmd::parse(request(Some("mykey"), Some("myvalue"))).unwrap();
        assert_eq!(cmd.key, "mykey");
        assert_eq!(cmd.value, "myvalue");
    }

    #[test]
    fn test_parse_empty_value_allowed() {
        let cmd = SetCmd::parse(request(Some("k"), Some(""))).unwrap();
        assert_eq!(cmd.value, "");
    }

    #[test]
    fn test_parse_missing_key() {
        let err = SetCmd::parse(request(None, Some("v"))).unwrap_err();
        assert_eq!(err, ApiError::validation("missing field `key`"));
    }

    #[test]
    fn test_parse_empty_key() {
        let err = SetCmd::parse(request(Some(""), Some("v"))).unwrap_err();
        assert_eq!(err, ApiError::validation("key must not be empty"));
    }

    #[test]
    fn test_parse_missing_value() {
        let err = SetCmd::parse(request(Some("k"), None)).unwrap_err();
        assert_eq!(err, ApiError::validation("missing field `value`"));
    }

    #[tokio::test]
    async fn test_execute_overwrites() {
        let store = Store::new();
        let first = SetCmd::parse(request(Some("key"), Some("1"))).unwrap();
        let second = SetCmd::parse(request(Some("key"), Some("2"))).unwrap();

        assert_eq!(first.execute(&store).await, Ok(SetResponse::ok()));
        assert_eq!(second.execute(&store).await, Ok(SetResponse::ok()));
        assert_eq!(store.get("key").await, Some("2".to_string()));
    }
}
