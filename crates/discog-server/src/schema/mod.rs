//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one part of
//! the API. Types use serde derives for JSON serialization/deserialization.

pub mod albums;
pub mod proxy;
pub mod query;
