//! Infrastructure Services
//!
//! - **client**: list service API client, reference data types and the query cache
//! - **config**: API and cache configuration
//! - **storage**: persisted language preference and signed-in user
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod storage;
