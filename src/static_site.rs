//! Build-time rendering of the `/ui/ex4` pages into a directory tree.
//!
//! Output layout under the target directory:
//!
//! ```text
//! ui/ex4/index.html
//! ui/ex4/{category}/index.html
//! prerender-manifest.json
//! ```

use crate::cache_policy::{CacheDirective, RouteKind};
use crate::connectors::CatalogConnector;
use crate::routes::pages::catalog::{category_index_state, category_products_state};
use crate::static_paths::category_params;
use crate::views::PageRenderer;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "prerender-manifest.json";

#[derive(Debug, Clone, Serialize)]
pub struct PrerenderedPage {
    pub route: String,
    /// Path relative to the output directory.
    pub file: String,
    pub cache: CacheDirective,
    pub cache_control: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrerenderManifest {
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<PrerenderedPage>,
}

impl PrerenderManifest {
    pub fn routes(&self) -> Vec<&str> {
        self.pages.iter().map(|page| page.route.as_str()).collect()
    }
}

/// A slug becomes a directory name, so it must be one plain path segment.
fn is_safe_segment(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

async fn write_page(out_dir: &Path, route: &str, html: &str) -> Result<PathBuf> {
    let relative = PathBuf::from(route.trim_start_matches('/')).join("index.html");
    let target = out_dir.join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&target, html)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(relative)
}

fn page(route: String, file: PathBuf, kind: RouteKind) -> PrerenderedPage {
    let cache = kind.directive();
    PrerenderedPage {
        route,
        file: file.to_string_lossy().replace('\\', "/"),
        cache_control: cache.cache_control_header(),
        cache,
    }
}

/// Render the category index and one page per enumerated category into
/// `out_dir`, then write the manifest. Upstream failures produce the same
/// fallback pages the server would render; only I/O and template errors fail.
#[tracing::instrument(name = "Prerender static pages", skip(catalog, renderer))]
pub async fn prerender(
    catalog: &dyn CatalogConnector,
    renderer: &PageRenderer,
    out_dir: &Path,
) -> Result<PrerenderManifest> {
    let mut pages = Vec::new();

    let index = category_index_state(catalog).await;
    let html = renderer.category_index(&index)?;
    let file = write_page(out_dir, "/ui/ex4", &html).await?;
    pages.push(page("/ui/ex4".to_string(), file, RouteKind::CategoryIndex));

    for param in category_params(catalog).await {
        if !is_safe_segment(&param.category) {
            tracing::warn!(category = %param.category, "Skipping category with unusable slug");
            continue;
        }
        let route = format!("/ui/ex4/{}", param.category);
        let state = category_products_state(catalog, &param.category).await;
        let html = renderer.category_products(&param.category, &state)?;
        let file = write_page(out_dir, &route, &html).await?;
        tracing::info!(route = %route, "Pre-rendered page");
        pages.push(page(route, file, RouteKind::RenderedPage));
    }

    let manifest = PrerenderManifest {
        generated_at: Utc::now(),
        pages,
    };
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_vec_pretty(&manifest).context("Failed to serialize manifest")?;
    tokio::fs::write(&manifest_path, json)
        .await
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    tracing::info!(pages = manifest.pages.len(), "Prerender finished");
    Ok(manifest)
}
