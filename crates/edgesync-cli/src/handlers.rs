//! Subcommand handlers.

use anyhow::Context as _;
use tokio_util::sync::CancellationToken;

use edgesync_core::Network;
use edgesync_netstorage::{DefaultRsyncClient, SyncSpec};
use edgesync_purge::DefaultInvalidationClient;

use crate::env_config;
use crate::parser::{Cli, Command};

/// Dispatch the parsed command line.
pub async fn dispatch(cli: Cli, cancel: &CancellationToken) -> anyhow::Result<()> {
    match cli.command {
        Command::Purge {
            urls,
            network,
            no_wait,
        } => purge(urls, &network, no_wait, cancel).await,
        Command::Upload {
            source,
            dest,
            files,
            dry_run,
            delete,
        } => upload(&source, &dest, files, dry_run, delete, cancel).await,
    }
}

async fn purge(
    urls: Vec<String>,
    network: &str,
    no_wait: bool,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let network: Network = network.parse()?;
    let config = env_config::purge_config()?;
    let client = DefaultInvalidationClient::from_config(&config);

    tracing::info!(urls = urls.len(), network = %network, "submitting purge");
    let receipt = if no_wait {
        client.submit(&urls, network).await?
    } else {
        client.invalidate_with_cancel(&urls, network, cancel).await?
    };

    println!(
        "Purge accepted: id={} estimated={}s{}",
        receipt.purge_id,
        receipt.estimated_seconds,
        if no_wait { "" } else { " (propagated)" },
    );
    Ok(())
}

async fn upload(
    source: &str,
    dest: &str,
    files: Vec<String>,
    dry_run: bool,
    delete: bool,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let config = env_config::netstorage_config()?;
    let client = DefaultRsyncClient::from_config(config)?;

    let mut spec = SyncSpec::new(source, dest, &files);
    if delete {
        spec = spec.with_delete();
    }
    if dry_run {
        spec = spec.with_dry_run();
        println!("{}", client.compile_command(&spec)?);
    }

    client
        .run_with_cancel(&spec, cancel)
        .await
        .context("netstorage upload failed")?;

    println!(
        "{} {} file(s) to '{}'",
        if dry_run { "Would sync" } else { "Synced" },
        spec.files.len(),
        if dest.is_empty() { "/" } else { dest },
    );
    Ok(())
}
