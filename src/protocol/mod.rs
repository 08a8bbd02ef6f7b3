//! HTTP protocol for the store
//!
//! This module defines the JSON bodies exchanged with clients and the
//! commands that validate a request and run it against the store.

pub mod command;
pub mod error;
pub mod get;
pub mod set;

use serde::{Deserialize, Serialize};

pub use command::Command;
pub use error::ApiError;
pub use get::GetCmd;
pub use set::SetCmd;

/// Base path of the store resource
pub const ENDPOINT_STORE: &str = "/api/v1/store";

/// Body of a write request.
///
/// Both fields are optional here so that a missing field is reported by
/// validation as a 422 instead of failing inside the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SetRequest {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Acknowledgment for a successful write
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SetResponse {
    pub message: String,
}

impl SetResponse {
    pub fn ok() -> Self {
        Self {
            message: "Item set successfully".to_string(),
        }
    }
}

/// A stored item
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

/// Body returned with every client error
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}
