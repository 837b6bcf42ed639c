//! HTTP handler modules for the discog API.
//!
//! Each sub-module implements thin handlers that extract request parts,
//! delegate to [`crate::service::CatalogService`], and return JSON
//! responses. No business logic lives in handlers.

pub mod albums;
pub mod fallback;
