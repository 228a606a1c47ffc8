//! NetStorage rsync integration.
//!
//! Compiles a single, safely-escaped rsync command line that mirrors an
//! explicit allow-list of files from a source directory to a NetStorage
//! destination, and optionally runs it. Three destination addressing
//! modes are supported, selected by configuration: the NetStorage rsync
//! daemon, an alternate remote host over SSH, and the local filesystem.
//!
//! The catch-all `--exclude="*"` after the per-file includes is the
//! safety mechanism that prevents an accidental whole-directory sync.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod command;
mod config;
mod error;
mod runner;
mod spec;

pub use client::{DefaultRsyncClient, RsyncClient};
pub use config::NetStorageConfig;
pub use error::{SyncError, SyncResult};
pub use runner::TokioCommandRunner;
pub use spec::SyncSpec;
