use render_modes_core::{
    Card, Extras, Header, LiveCard, PageCopy, PageDocument, PolicyBanner, Record,
    RenderingPolicy,
};

/// Render a content page.
///
/// Pure: identical inputs produce identical documents. `extras` only
/// contribute under [`RenderingPolicy::Dynamic`]; they are ignored for
/// cached policies so prerendered output stays stable.
pub fn render_page(
    copy: &PageCopy,
    records: &[Record],
    policy: RenderingPolicy,
    extras: Option<&Extras>,
) -> PageDocument {
    let live = match (policy, extras) {
        (RenderingPolicy::Dynamic, Some(extras)) => extras
            .fields
            .iter()
            .map(|field| LiveCard {
                label: field.label.clone(),
                value: field.value.clone(),
            })
            .collect(),
        _ => Vec::new(),
    };

    PageDocument {
        header: Header {
            title: copy.title.clone(),
            subtitle: policy.technique().to_string(),
        },
        banner: Some(policy_banner(policy)),
        live,
        cards: records.iter().map(Card::from).collect(),
        links: Vec::new(),
        note: copy.note.clone(),
    }
}

fn policy_banner(policy: RenderingPolicy) -> PolicyBanner {
    PolicyBanner {
        mode: policy.name().to_string(),
        description: policy.description(),
        interval_note: policy
            .revalidate_seconds()
            .map(|secs| format!("Revalidation interval: {} seconds", secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_modes_core::catalog;

    fn about_copy() -> PageCopy {
        PageCopy {
            title: "About Me".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_about_scenario() {
        let about = catalog::about();
        let doc = render_page(&about.copy, &about.records, about.policy, None);

        assert_eq!(doc.header.title, "About Me");
        assert_eq!(doc.header.subtitle, "Static Site Generation (SSG)");
        assert_eq!(doc.banner.as_ref().unwrap().mode, "Static");
        assert_eq!(doc.cards.len(), 3);

        let values: Vec<&str> = doc
            .cards
            .iter()
            .map(|card| match card {
                Card::Fact { value, .. } => value.as_str(),
                Card::Article { .. } => panic!("unexpected article"),
            })
            .collect();
        assert_eq!(values, vec!["Mukesh", "Frontend Developer", "Chittoor, India"]);
    }

    #[test]
    fn test_card_count_and_order_match_records() {
        for page in catalog::pages() {
            let doc = render_page(&page.copy, &page.records, page.policy, None);
            let ids: Vec<u32> = doc.cards.iter().map(Card::id).collect();
            let expected: Vec<u32> = page.records.iter().map(|r| r.id).collect();
            assert_eq!(ids, expected, "card order on {}", page.id);
        }
    }

    #[test]
    fn test_cached_policies_render_identically() {
        let extras = Extras::new().with("Server Time", "noon");
        for page in [catalog::about(), catalog::news()] {
            let first = render_page(&page.copy, &page.records, page.policy, Some(&extras));
            let second = render_page(&page.copy, &page.records, page.policy, Some(&extras));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_extras_ignored_outside_dynamic() {
        let extras = Extras::new().with("Server Time", "noon");
        let doc = render_page(
            &about_copy(),
            &[Record::fact(1, "Name", "Mukesh")],
            RenderingPolicy::Static,
            Some(&extras),
        );
        assert!(doc.live.is_empty());
    }

    #[test]
    fn test_dashboard_renders_differ_only_in_server_time() {
        let dashboard = catalog::dashboard();
        let t1 = Extras::new()
            .with("Server Time", "12/8/2025, 3:04:05 PM")
            .with("Focus Score", "42%");
        let t2 = Extras::new()
            .with("Server Time", "12/8/2025, 3:04:09 PM")
            .with("Focus Score", "42%");

        let first = render_page(&dashboard.copy, &dashboard.records, dashboard.policy, Some(&t1));
        let second = render_page(&dashboard.copy, &dashboard.records, dashboard.policy, Some(&t2));

        assert_ne!(first, second);
        assert_eq!(first.header, second.header);
        assert_eq!(first.banner, second.banner);
        assert_eq!(first.cards, second.cards);
        assert_eq!(first.note, second.note);
        assert_eq!(first.live[0].label, "Server Time");
        assert_ne!(first.live[0].value, second.live[0].value);
        assert_eq!(first.live[1], second.live[1]);
        assert_eq!(first.banner.unwrap().mode, "Dynamic");
    }

    #[test]
    fn test_interval_banner_names_window() {
        let news = catalog::news();
        let doc = render_page(&news.copy, &news.records, news.policy, None);
        let banner = doc.banner.unwrap();
        assert_eq!(banner.mode, "ISR");
        assert_eq!(
            banner.interval_note.as_deref(),
            Some("Revalidation interval: 60 seconds")
        );
        assert!(matches!(doc.cards[0], Card::Article { ref published, .. } if published == "December 8, 2025"));
        assert_eq!(doc.note.unwrap().heading.as_deref(), Some("About this page"));
    }
}
