//! Compiled-in site content.
//!
//! Each call builds fresh values; `Site` construction freezes them once at
//! process start.

use crate::types::{Header, NavLink, Note, PageCopy, PageId, Record, RenderingPolicy};

/// Revalidation window of the news page, in seconds
pub const NEWS_REVALIDATE_SECS: u32 = 60;

/// Everything needed to build one content page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDefinition {
    pub id: PageId,
    pub copy: PageCopy,
    pub policy: RenderingPolicy,
    pub records: Vec<Record>,
}

/// Content pages in navigation order
pub fn pages() -> Vec<PageDefinition> {
    vec![about(), dashboard(), news()]
}

pub fn about() -> PageDefinition {
    PageDefinition {
        id: PageId::About,
        copy: PageCopy {
            title: "About Me".to_string(),
            note: None,
        },
        policy: RenderingPolicy::Static,
        records: vec![
            Record::fact(1, "Name", "Mukesh"),
            Record::fact(2, "Role", "Frontend Developer"),
            Record::fact(3, "Location", "Chittoor, India"),
        ],
    }
}

pub fn dashboard() -> PageDefinition {
    PageDefinition {
        id: PageId::Dashboard,
        copy: PageCopy {
            title: "Live Dashboard".to_string(),
            note: Some(Note {
                heading: None,
                body: "Refreshing reveals new server time and focus scores, proving true dynamic rendering."
                    .to_string(),
            }),
        },
        policy: RenderingPolicy::Dynamic,
        records: vec![
            Record::fact(1, "Current Project", "Rendering Modes Learning Journey"),
            Record::fact(2, "Focus Area", "Server Rendering & Caching"),
            Record::fact(3, "Learning Goal", "Ship polished UI demos"),
        ],
    }
}

pub fn news() -> PageDefinition {
    PageDefinition {
        id: PageId::News,
        copy: PageCopy {
            title: "Latest Updates".to_string(),
            note: Some(Note {
                heading: Some("About this page".to_string()),
                body: "Timed regeneration suits mostly static content that still refreshes occasionally. \
                       It keeps hosting costs low while ensuring the notes here are never too outdated."
                    .to_string(),
            }),
        },
        policy: RenderingPolicy::interval(NEWS_REVALIDATE_SECS),
        records: vec![
            Record::article(
                1,
                "My week in tech",
                "Notes from experiments with server components and what surprised me the most.",
                "December 8, 2025",
            ),
            Record::article(
                2,
                "Small wins log",
                "Celebrating the little things: fixed a sticky layout bug and launched a mini side project.",
                "December 5, 2025",
            ),
            Record::article(
                3,
                "Reading list",
                "Three articles that helped me understand caching and data fetching.",
                "November 30, 2025",
            ),
        ],
    }
}

pub fn hub_header() -> Header {
    Header {
        title: "Rendering Modes".to_string(),
        subtitle: "Explore the three different rendering patterns".to_string(),
    }
}

/// The three fixed links shown on the navigation hub
pub fn hub_links() -> Vec<NavLink> {
    vec![
        NavLink {
            href: PageId::About.route().to_string(),
            heading: "Static Rendering".to_string(),
            call_to_action: "View About Page".to_string(),
            policy: RenderingPolicy::Static,
        },
        NavLink {
            href: PageId::Dashboard.route().to_string(),
            heading: "Dynamic Rendering".to_string(),
            call_to_action: "View Dashboard".to_string(),
            policy: RenderingPolicy::Dynamic,
        },
        NavLink {
            href: PageId::News.route().to_string(),
            heading: "ISR Rendering".to_string(),
            call_to_action: "View News".to_string(),
            policy: RenderingPolicy::interval(NEWS_REVALIDATE_SECS),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record_issues;

    #[test]
    fn test_record_ids_are_unique_on_every_page() {
        for page in pages() {
            assert!(
                record_issues(&page.records).is_empty(),
                "invalid records on {}",
                page.id
            );
        }
    }

    #[test]
    fn test_one_page_per_policy() {
        let policies: Vec<&str> = pages().iter().map(|p| p.policy.name()).collect();
        assert_eq!(policies, vec!["Static", "Dynamic", "ISR"]);
    }

    #[test]
    fn test_hub_links_match_pages() {
        let pages = pages();
        let links = hub_links();
        assert_eq!(links.len(), 3);
        for (link, page) in links.iter().zip(pages.iter()) {
            assert_eq!(link.href, page.id.route());
            assert_eq!(link.policy, page.policy);
        }
    }
}
