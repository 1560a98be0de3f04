//! Movie review demo services.
//!
//! Two HTTP services share this crate: a static one that serves a fixed
//! movie list, and one that also stores reviews in PostgreSQL.

pub mod api;
pub mod config;
pub mod server;
pub mod storage;
pub mod telemetry;
