use anyhow::{Context, Result};
use chrono::Utc;
use render_modes_core::{Extras, PageId, RenderingPolicy, SiteConfig};
use render_modes_generator::{ExtrasSource, PageSource, Site, render_html};

use crate::OutputFormat;
use crate::live::LiveExtras;

/// Render one page to stdout, sampling live extras for dynamic pages
pub async fn run(config: &SiteConfig, page: PageId, format: OutputFormat) -> Result<()> {
    let site = Site::demo().context("Invalid page catalog")?;

    let extras = match site.policy(page) {
        Some(RenderingPolicy::Dynamic) => {
            LiveExtras::new(&config.dashboard).extras(page, Utc::now())
        }
        Some(_) => Extras::default(),
        None => anyhow::bail!("Page '{}' is not part of this site", page),
    };

    let document = site
        .render(page, &extras)
        .with_context(|| format!("Page '{}' could not be rendered", page))?;

    match format {
        OutputFormat::Html => println!("{}", render_html(&document)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&document).context("Failed to serialize document")?
        ),
    }

    Ok(())
}
