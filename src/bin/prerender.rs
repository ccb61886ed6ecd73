//! Pre-render the category pages into a static directory.
//!
//! ```text
//! prerender --out-dir ./public
//! ```

use anyhow::Context;
use catalog_demo::configuration::get_configuration;
use catalog_demo::connectors;
use catalog_demo::static_site::prerender;
use catalog_demo::telemetry::{get_subscriber, init_subscriber};
use catalog_demo::views::PageRenderer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prerender",
    version,
    about = "Pre-render the category pages and write a prerender manifest"
)]
struct Cli {
    /// Directory that receives ui/ex4/**/index.html and prerender-manifest.json
    #[arg(long, value_name = "DIR", env = "PRERENDER_OUT_DIR")]
    out_dir: PathBuf,
    /// Override the catalog base URL from configuration.yaml
    #[arg(long = "catalog-url", value_name = "URL")]
    catalog_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = get_subscriber("prerender".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let mut settings = get_configuration().context("Failed to read configuration")?;
    if let Some(url) = cli.catalog_url {
        let mut catalog = settings.catalog();
        catalog.base_url = url;
        settings.connectors.catalog_service = Some(catalog);
    }

    let catalog = connectors::init_catalog_service(&settings.connectors);
    let renderer = PageRenderer::new()?;

    tokio::fs::create_dir_all(&cli.out_dir)
        .await
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let manifest = prerender(catalog.get_ref().as_ref(), &renderer, &cli.out_dir).await?;
    tracing::info!(
        out_dir = %cli.out_dir.display(),
        pages = manifest.pages.len(),
        "Static pages written"
    );
    Ok(())
}
