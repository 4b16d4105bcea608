mod model;
mod page;
mod public;

use std::fs;
use std::io;

use anyhow::{Context, Result};

use model::config::SiteConfig;
use model::summary;
use public::PublicData;

fn main() -> Result<()> {
    // Log to stderr — stdout stays clean for the surrounding build tooling.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter("manifest_pages=info")
        .init();

    tracing::info!("manifest-pages starting");

    let config = SiteConfig::load()?;
    run(&config)
}

fn run(config: &SiteConfig) -> Result<()> {
    let public = PublicData::new(config.public_dir());

    // A missing or malformed index fails the whole generation step. No
    // fallback page is ever written.
    let summaries = public
        .index()
        .context("listing page input is unreadable or unparseable")?;

    for name in summary::duplicate_names(&summaries) {
        tracing::warn!("duplicate plugin name in index: {name}");
    }

    let html = page::listing::render(&config.site, &config.links, &summaries);

    let out_dir = config.out_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join("index.html");
    fs::write(&out_path, html)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    tracing::info!(
        "wrote {} ({} plugins listed)",
        out_path.display(),
        summaries.len()
    );

    Ok(())
}
