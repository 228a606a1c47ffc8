//! Domain types and port traits shared by the edgesync crates.
//!
//! This crate holds the value objects that cross component boundaries
//! (networks, purge receipts, command results, job outcomes) and the
//! trait abstractions for the external systems the components talk to
//! (HTTP transport, request signer, process runner, job worker). It
//! contains no I/O of its own.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{CommandResult, JobOutcome, Network, PurgeReceipt, PurgeRequest, UnknownNetwork};
pub use ports::{
    CommandRunner, HttpResponse, HttpTransport, JobFuture, JobHandler, JobWorker, ProcessError,
    RequestSigner, TransportError,
};
