//! HTTP/JSON query service over the discog album catalog.
//!
//! Serves three read-only queries (list all albums, list albums by release
//! year, summarize one album) behind an axum router, and answers the same
//! routes for API-Gateway-style proxy events. This crate contains the
//! service, API schema types, error handling, configuration, and route
//! definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod proxy;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
