//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
///
/// Successful responses carry `status: "success"` and `data`; error responses
/// carry `status: "error"` and `message`. The unused field is omitted from the
/// serialized JSON, never emitted as `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// `"success"` or `"error"`
    pub status: &'static str,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            message: Some(message.to_string()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Where an insert attaches its new node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// New node becomes the head (O(1))
    Start,
    /// New node becomes the tail (O(n) traversal)
    #[default]
    End,
}

/// Request body for inserting a value
///
/// The payload is an opaque JSON value, stored and compared verbatim. A JSON
/// `null` payload is treated the same as an absent one and rejected by the
/// handler.
#[derive(Debug, Deserialize)]
pub struct InsertRequest {
    /// Value to insert
    #[serde(default)]
    pub value: Option<Value>,
    /// Where to insert (defaults to the end)
    #[serde(default)]
    pub position: Position,
}

/// Request body for deleting the first node matching a value
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    /// Value to remove
    #[serde(default)]
    pub value: Option<Value>,
}
