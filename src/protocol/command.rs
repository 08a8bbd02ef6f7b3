use async_trait::async_trait;

use crate::protocol::error::ApiError;
use crate::store::Store;

/// A validated client request that can run against the store
#[async_trait]
pub trait Command: Send + Sync {
    /// Successful reply sent back to the client
    type Output: Send;

    async fn execute(&self, store: &Store) -> Result<Self::Output, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{GetCmd, GetResponse, SetCmd, SetRequest, SetResponse};

    /// Runs a command through the trait
    async fn run<C: Command>(cmd: C, store: &Store) -> Result<C::Output, ApiError> {
        cmd.execute(store).await
    }

    #[tokio::test]
    async fn test_execute_set_and_get() {
        let store = Store::new();

        let set = SetCmd::parse(SetRequest {
            key: Some("mykey".to_string()),
            value: Some("myvalue".to_string()),
        })
        .unwrap();
        assert_eq!(run(set, &store).await, Ok(SetResponse::ok()));

        let get = GetCmd::parse("mykey").unwrap();
        assert_eq!(
            run(get, &store).await,
            Ok(GetResponse {
                key: "mykey".to_string(),
                value: "myvalue".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_execute_get_not_found() {
        let store = Store::new();
        let get = GetCmd::parse("nonexistent").unwrap();

        assert_eq!(run(get, &store).await, Err(ApiError::NotFound));
    }
}
