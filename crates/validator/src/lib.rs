// Whole-catalog validation: reports every problem instead of stopping at the first

use render_modes_core::catalog::PageDefinition;
use render_modes_core::store::record_issues;
use render_modes_core::{NavLink, PageId};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_catalog(pages: &[PageDefinition], links: &[NavLink]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut routes = HashSet::new();

    for page in pages {
        let route = page.id.route();

        if page.id == PageId::Home {
            report
                .errors
                .push(format!("{}: the hub page cannot carry records", route));
        }
        if !routes.insert(route) {
            report
                .errors
                .push(format!("{}: page defined more than once", route));
        }
        if page.policy.revalidate_seconds() == Some(0) {
            report.errors.push(format!(
                "{}: revalidation interval must be at least one second",
                route
            ));
        }
        if page.copy.title.trim().is_empty() {
            report.errors.push(format!("{}: empty page title", route));
        }
        for issue in record_issues(&page.records) {
            report.errors.push(format!("{}: {}", route, issue));
        }
        if page.records.is_empty() {
            report.warnings.push(format!("{}: no records to render", route));
        }

        report.info.push(format!(
            "{}: {} records, {} policy",
            route,
            page.records.len(),
            page.policy
        ));
    }

    for link in links {
        match pages.iter().find(|p| p.id.route() == link.href) {
            None => report
                .errors
                .push(format!("hub link '{}' points to an unknown page", link.href)),
            Some(page) if page.policy != link.policy => report.errors.push(format!(
                "hub link '{}' advertises {} but the page is {}",
                link.href, link.policy, page.policy
            )),
            Some(_) => {}
        }
    }

    if links.is_empty() {
        report.warnings.push("hub has no links".to_string());
    }

    report
}
