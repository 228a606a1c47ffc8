//! Client for the CDN's Fast Purge (CCU v3) invalidation API.
//!
//! Builds a signed purge request for a batch of URLs, submits it,
//! classifies the response, and blocks until the CDN's own propagation
//! estimate elapses. The operation can also be registered as a queue-job
//! callback via [`attach_to_worker`].
//!
//! The HTTP transport and request signer are ports from `edgesync-core`;
//! production implementations ([`ReqwestTransport`], [`EdgeGridSigner`])
//! live here and are wired together by
//! [`DefaultInvalidationClient::from_config`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod signer;
mod worker;

pub use client::{DefaultInvalidationClient, InvalidationClient};
pub use config::PurgeConfig;
pub use error::{PurgeError, PurgeResult};
pub use http::ReqwestTransport;
pub use signer::EdgeGridSigner;
pub use worker::attach_to_worker;
