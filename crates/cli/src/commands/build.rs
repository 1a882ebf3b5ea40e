use anyhow::{Context, Result};
use render_modes_core::{Extras, PageId, RenderingPolicy};
use render_modes_generator::{PageSource, Site, render_html};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of manifest.json
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub page: PageId,
    pub route: String,
    pub policy: RenderingPolicy,
    /// Exported file, relative to the output directory; absent for dynamic pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub pages: Vec<ManifestEntry>,
}

/// Prerender static and interval pages for deployment
pub async fn run(output: PathBuf) -> Result<()> {
    println!("🔨 Building static pages...");
    println!("   Output: {}", output.display());
    println!();

    let site = Site::demo().context("Invalid page catalog")?;
    let manifest = build_site(&site, &output)?;

    for entry in &manifest.pages {
        match &entry.file {
            Some(file) => println!("   ✓ {} ({}) -> {}", entry.route, entry.policy, file.display()),
            None => println!("   • {} ({}) rendered per request, not exported", entry.route, entry.policy),
        }
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();

    Ok(())
}

/// Write every prerenderable page plus manifest.json under `output`
pub fn build_site(site: &Site, output: &Path) -> Result<Manifest> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut pages = Vec::new();
    for page in site.page_ids() {
        let policy = site
            .policy(page)
            .with_context(|| format!("No policy declared for '{}'", page))?;

        let file = if policy.is_prerendered() {
            let document = site
                .render(page, &Extras::default())
                .with_context(|| format!("Page '{}' could not be rendered", page))?;

            let relative = page_file(page);
            let path = output.join(&relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, render_html(&document))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(relative)
        } else {
            None
        };

        pages.push(ManifestEntry {
            page,
            route: page.route().to_string(),
            policy,
            file,
        });
    }

    let manifest = Manifest { pages };
    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(output.join("manifest.json"), json).context("Failed to write manifest.json")?;

    Ok(manifest)
}

/// `index.html` for the hub, `<slug>/index.html` for everything else
fn page_file(page: PageId) -> PathBuf {
    match page {
        PageId::Home => PathBuf::from("index.html"),
        _ => Path::new(page.slug()).join("index.html"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_exports_prerendered_pages_only() {
        let dir = TempDir::new().unwrap();
        let site = Site::demo().unwrap();

        let manifest = build_site(&site, dir.path()).unwrap();
        assert_eq!(manifest.pages.len(), 4);

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("about/index.html").exists());
        assert!(dir.path().join("news/index.html").exists());
        assert!(!dir.path().join("dashboard").exists());

        let about = fs::read_to_string(dir.path().join("about/index.html")).unwrap();
        assert!(about.contains("Mukesh"));
        assert!(about.contains("Rendering Mode: Static"));
    }

    #[test]
    fn test_manifest_lists_every_policy() {
        let dir = TempDir::new().unwrap();
        build_site(&Site::demo().unwrap(), dir.path()).unwrap();

        let raw = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let pages = manifest["pages"].as_array().unwrap();

        let dashboard = pages.iter().find(|p| p["page"] == "dashboard").unwrap();
        assert_eq!(dashboard["policy"]["mode"], "dynamic");
        assert!(dashboard.get("file").is_none());

        let news = pages.iter().find(|p| p["page"] == "news").unwrap();
        assert_eq!(news["policy"]["seconds"], 60);
        assert_eq!(news["route"], "/news");
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let site = Site::demo().unwrap();
        build_site(&site, first.path()).unwrap();
        build_site(&site, second.path()).unwrap();

        for file in ["index.html", "about/index.html", "news/index.html"] {
            assert_eq!(
                fs::read(first.path().join(file)).unwrap(),
                fs::read(second.path().join(file)).unwrap()
            );
        }
    }
}
