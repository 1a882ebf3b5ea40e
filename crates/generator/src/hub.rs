use render_modes_core::{Header, NavLink, PageDocument};

/// Render the navigation hub: a header and the fixed links, nothing else
pub fn render_hub(header: &Header, links: &[NavLink]) -> PageDocument {
    PageDocument {
        header: header.clone(),
        banner: None,
        live: Vec::new(),
        cards: Vec::new(),
        links: links.to_vec(),
        note: None,
    }
}
