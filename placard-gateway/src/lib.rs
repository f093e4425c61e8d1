//! HTTP gateway issuing web-application manifest documents.
//!
//! Every route under `/v1` passes through an explicit stage pipeline:
//! API-key authorization, then a best-effort response cache, then the
//! route handler. Either stage can short-circuit without invoking the
//! stages after it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
