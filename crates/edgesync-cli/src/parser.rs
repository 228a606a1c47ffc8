//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Akamai purge + NetStorage upload helper.
#[derive(Debug, Parser)]
#[command(name = "edgesync", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Invalidate cached URLs on the CDN.
    Purge {
        /// URLs to purge, in submission order.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Target network: production or staging.
        #[arg(long, default_value = "production")]
        network: String,

        /// Return as soon as the CDN accepts the request instead of
        /// waiting out its propagation estimate.
        #[arg(long)]
        no_wait: bool,
    },

    /// Push an explicit set of files to NetStorage.
    Upload {
        /// Local directory the files live in.
        #[arg(long)]
        source: String,

        /// Destination sub-path under the NetStorage root.
        #[arg(long, default_value = "")]
        dest: String,

        /// Filenames to include; everything else is excluded.
        #[arg(required = true)]
        files: Vec<String>,

        /// Compile and run rsync in --dry-run --verbose mode.
        #[arg(long)]
        dry_run: bool,

        /// Delete destination files missing from the source.
        #[arg(long)]
        delete: bool,
    },
}
