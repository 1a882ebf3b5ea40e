use render_modes_core::catalog;
use render_modes_validator::validate_catalog;

pub async fn run() -> anyhow::Result<()> {
    println!("Validating page catalog");

    let report = validate_catalog(&catalog::pages(), &catalog::hub_links());

    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("✗ {}", error);
    }

    if !report.is_valid() {
        anyhow::bail!("Catalog has {} error(s)", report.errors.len());
    }

    println!("✓ Catalog valid");
    Ok(())
}
