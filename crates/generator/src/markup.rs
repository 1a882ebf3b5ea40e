use leptos::prelude::*;
use render_modes_core::{Card, LiveCard, NavLink, Note, PageDocument, PolicyBanner};

const STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: #111827;
    background: linear-gradient(135deg, #faf5ff, #eef2ff, #f0f9ff);
    min-height: 100vh;
    padding: 3rem 1.5rem;
}
.page { max-width: 48rem; margin: 0 auto; background: white; border-radius: 1.5rem; padding: 2.5rem; box-shadow: 0 20px 40px rgba(0,0,0,0.08); }
.page.hub { max-width: 72rem; background: transparent; box-shadow: none; }
header { text-align: center; margin-bottom: 2rem; }
h1 { font-size: 2.25rem; font-weight: 700; }
.subtitle { color: #4b5563; margin-top: 0.5rem; }
.banner { border-radius: 1rem; padding: 1.5rem; margin-bottom: 2rem; }
.banner-static { background: #eff6ff; color: #1e40af; }
.banner-dynamic { background: #ecfdf5; color: #065f46; }
.banner-isr { background: #faf5ff; color: #6b21a8; }
.banner .mode { font-weight: 600; }
.banner .description { font-size: 0.875rem; margin-top: 0.5rem; }
.banner .interval { font-size: 0.75rem; margin-top: 0.75rem; }
.cards { display: flex; flex-direction: column; gap: 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.5rem; }
.card .label, .card .published { font-size: 0.875rem; color: #6b7280; }
.card .value { font-size: 1.25rem; font-weight: 600; margin-top: 0.25rem; }
.card h2 { font-size: 1.5rem; font-weight: 600; margin-top: 0.5rem; }
.card .summary { color: #4b5563; margin-top: 0.5rem; }
.links { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; }
.link { display: block; background: white; border-radius: 1rem; padding: 2rem; text-decoration: none; color: inherit; box-shadow: 0 10px 20px rgba(0,0,0,0.06); }
.link h2 { font-size: 1.75rem; margin-bottom: 0.75rem; }
.link .cta { font-weight: 600; color: #3b82f6; }
.note { margin-top: 2.5rem; border-radius: 1rem; background: #f9fafb; padding: 1.5rem; color: #4b5563; }
.note h3 { font-size: 1.125rem; color: #111827; }
"#;

/// HTML-escape a string for hand-built markup
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render a complete HTML document for a page.
///
/// The body is produced with Leptos SSR; the shell around it is static.
pub fn render_html(doc: &PageDocument) -> String {
    let body = page_view(doc.clone()).to_html();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
        html_escape(&doc.header.title),
        STYLES,
        body
    )
}

fn page_view(doc: PageDocument) -> AnyView {
    let class = if doc.links.is_empty() {
        "page"
    } else {
        "page hub"
    };
    let PageDocument {
        header,
        banner,
        live,
        cards,
        links,
        note,
    } = doc;

    let has_cards = !live.is_empty() || !cards.is_empty();
    let card_list = has_cards.then(|| {
        let live = live.into_iter().map(live_card_view).collect_view();
        let cards = cards.into_iter().map(card_view).collect_view();
        view! { <section class="cards">{live}{cards}</section> }
    });
    let link_list = (!links.is_empty()).then(|| {
        let links = links.into_iter().map(link_view).collect_view();
        view! { <nav class="links">{links}</nav> }
    });

    view! {
        <main class={class}>
            <header>
                <h1>{header.title}</h1>
                <p class="subtitle">{header.subtitle}</p>
            </header>
            {banner.map(banner_view)}
            {card_list}
            {link_list}
            {note.map(note_view)}
        </main>
    }
    .into_any()
}

fn banner_view(banner: PolicyBanner) -> AnyView {
    let class = format!("banner banner-{}", banner.mode.to_lowercase());
    let mode = format!("Rendering Mode: {}", banner.mode);
    let interval = banner
        .interval_note
        .map(|note| view! { <p class="interval">{note}</p> });

    view! {
        <section class={class}>
            <p class="mode">{mode}</p>
            <p class="description">{banner.description}</p>
            {interval}
        </section>
    }
    .into_any()
}

fn live_card_view(card: LiveCard) -> AnyView {
    view! {
        <div class="card live">
            <p class="label">{card.label}</p>
            <p class="value">{card.value}</p>
        </div>
    }
    .into_any()
}

fn card_view(card: Card) -> AnyView {
    match card {
        Card::Fact { id, label, value } => view! {
            <div class="card" data-id={id.to_string()}>
                <p class="label">{label}</p>
                <p class="value">{value}</p>
            </div>
        }
        .into_any(),
        Card::Article {
            id,
            title,
            summary,
            published,
        } => view! {
            <article class="card" data-id={id.to_string()}>
                <p class="published">{published}</p>
                <h2>{title}</h2>
                <p class="summary">{summary}</p>
            </article>
        }
        .into_any(),
    }
}

fn link_view(link: NavLink) -> AnyView {
    let policy = link.policy.name().to_lowercase();
    view! {
        <a class="link" href={link.href} data-policy={policy}>
            <h2>{link.heading}</h2>
            <span class="cta">{link.call_to_action}</span>
        </a>
    }
    .into_any()
}

fn note_view(note: Note) -> AnyView {
    let heading = note.heading.map(|heading| view! { <h3>{heading}</h3> });
    view! {
        <section class="note">
            {heading}
            <p>{note.body}</p>
        </section>
    }
    .into_any()
}
