use anyhow::Context;
use clap::Args;

use rdsnap_core::{rank, PageSize, Selection};
use rdsnap_source::SnapshotClient;

use crate::output;
use crate::profile_store;

#[derive(Args)]
pub struct ListArgs {
    /// Database instance identifier to filter snapshots by (empty lists all)
    #[arg(long, default_value = "")]
    db: String,
    /// Only report the latest snapshot with status 'available'
    #[arg(long)]
    latest: bool,
    /// Management API endpoint (overrides the profile)
    #[arg(long)]
    endpoint: Option<String>,
    /// Bearer token (overrides the profile)
    #[arg(long)]
    token: Option<String>,
    /// Endpoint profile name
    #[arg(long, default_value = "default")]
    profile: String,
    /// Records requested per page (1-100)
    #[arg(long)]
    page_size: Option<usize>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ListArgs) -> anyhow::Result<()> {
    let profiles = profile_store::load_profiles()?;
    let resolved = profile_store::resolve(
        &profiles,
        &args.profile,
        args.endpoint,
        args.token,
        |key| std::env::var(key).ok(),
    )?;
    let page_size = match args.page_size.or(resolved.page_size) {
        Some(size) => PageSize::new(size)?,
        None => PageSize::default(),
    };

    tracing::debug!(
        endpoint = %resolved.source.base_url,
        db = %args.db,
        latest = args.latest,
        %page_size,
        "listing snapshots"
    );

    let mut client = SnapshotClient::connect(resolved.source)?.page_size(page_size);
    let snapshots = client
        .list_snapshots(&args.db)
        .await
        .context("failed to list snapshots")?;

    let selection = rank(snapshots, args.latest);
    if let Selection::NoneFound(reason) = &selection {
        tracing::info!(?reason, "no available snapshot");
    }

    let rendered = if args.json {
        output::render_json(&selection)?
    } else {
        output::render_text(&selection)
    };
    println!("{rendered}");
    Ok(())
}
