//! Pure API handlers
//!
//! These handlers contain the request-level logic and are HTTP-agnostic.
//! They take the list instance and typed input, and return the post-operation
//! snapshot or an `ApiError`. The list is an explicit parameter so each caller
//! (server, tests) constructs and owns its own instance.

use serde_json::Value;

use crate::list::{LinkedList, NodeRecord};

use super::error::ApiError;
use super::types::{DeleteRequest, InsertRequest, Position};

/// Get the current state of the list
#[must_use]
pub fn get_list(list: &LinkedList<Value>) -> Vec<NodeRecord<Value>> {
    list.snapshot()
}

/// Insert a value at the requested position
///
/// Returns the post-insert snapshot. A missing `value` is a bad request;
/// insertion itself cannot fail.
pub fn insert_node(
    list: &mut LinkedList<Value>,
    request: InsertRequest,
) -> Result<Vec<NodeRecord<Value>>, ApiError> {
    let value = request
        .value
        .ok_or_else(|| ApiError::bad_request("No value provided"))?;

    match request.position {
        Position::Start => list.insert_at_start(value),
        Position::End => list.insert_at_end(value),
    }

    Ok(list.snapshot())
}

/// Delete the first node whose payload equals the requested value
///
/// Returns the post-delete snapshot. A missing `value` is a bad request; a
/// miss (the core's `false`) maps to not found.
pub fn delete_node(
    list: &mut LinkedList<Value>,
    request: DeleteRequest,
) -> Result<Vec<NodeRecord<Value>>, ApiError> {
    let value = request
        .value
        .ok_or_else(|| ApiError::bad_request("No value provided"))?;

    if !list.delete_node(&value) {
        return Err(ApiError::not_found("Value not found"));
    }

    Ok(list.snapshot())
}
