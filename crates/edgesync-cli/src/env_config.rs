//! Configuration from environment variables.
//!
//! EdgeGrid credentials: `EDGEGRID_HOST`, `EDGEGRID_CLIENT_TOKEN`,
//! `EDGEGRID_CLIENT_SECRET`, `EDGEGRID_ACCESS_TOKEN`.
//! NetStorage target: `NETSTORAGE_ROOT` (required), `NETSTORAGE_HOST`,
//! `NETSTORAGE_USER`, `NETSTORAGE_PASSWORD` (all optional; leaving host
//! or user unset selects the local addressing form).

use anyhow::Context as _;

use edgesync_netstorage::NetStorageConfig;
use edgesync_purge::PurgeConfig;

/// Build the purge configuration from the environment.
pub fn purge_config() -> anyhow::Result<PurgeConfig> {
    Ok(PurgeConfig::new(
        require("EDGEGRID_HOST")?,
        require("EDGEGRID_CLIENT_TOKEN")?,
        require("EDGEGRID_CLIENT_SECRET")?,
        require("EDGEGRID_ACCESS_TOKEN")?,
    ))
}

/// Build the NetStorage configuration from the environment.
pub fn netstorage_config() -> anyhow::Result<NetStorageConfig> {
    Ok(NetStorageConfig::new(
        optional("NETSTORAGE_HOST"),
        require("NETSTORAGE_ROOT")?,
        optional("NETSTORAGE_USER"),
        optional("NETSTORAGE_PASSWORD"),
    ))
}

fn require(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing required environment variable {name}"))
}

fn optional(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
