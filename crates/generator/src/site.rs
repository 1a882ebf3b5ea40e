use crate::hub::render_hub;
use crate::render::render_page;
use render_modes_core::catalog::{self, PageDefinition};
use render_modes_core::{
    Error, Extras, Header, NavLink, PageCopy, PageDocument, PageId, RecordStore, RenderingPolicy,
    Result,
};

/// Something that knows each page's policy and can render it on demand.
///
/// This is the seam between the render cache and the content it serves.
pub trait PageSource: Send + Sync {
    fn policy(&self, page: PageId) -> Option<RenderingPolicy>;

    fn render(&self, page: PageId, extras: &Extras) -> Option<PageDocument>;
}

/// A content page: copy, declared policy and its frozen records
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub copy: PageCopy,
    pub policy: RenderingPolicy,
    pub store: RecordStore,
}

/// All pages of the site plus the navigation hub
#[derive(Debug, Clone)]
pub struct Site {
    pages: Vec<Page>,
    hub_header: Header,
    hub_links: Vec<NavLink>,
}

impl Site {
    /// The compiled-in demo site
    pub fn demo() -> Result<Self> {
        Self::from_definitions(catalog::pages(), catalog::hub_header(), catalog::hub_links())
    }

    /// Freeze page definitions into record stores.
    ///
    /// Invalid record sets and zero-length intervals are fatal.
    pub fn from_definitions(
        definitions: Vec<PageDefinition>,
        hub_header: Header,
        hub_links: Vec<NavLink>,
    ) -> Result<Self> {
        let mut pages: Vec<Page> = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if definition.id == PageId::Home {
                return Err(Error::invalid_policy(
                    definition.id.slug(),
                    "the hub page cannot carry records",
                ));
            }
            if pages.iter().any(|p| p.id == definition.id) {
                return Err(Error::invalid_record_set(
                    definition.id.slug(),
                    "page defined more than once",
                ));
            }
            if definition.policy.revalidate_seconds() == Some(0) {
                return Err(Error::invalid_policy(
                    definition.id.slug(),
                    "revalidation interval must be at least one second",
                ));
            }

            let store = RecordStore::new(definition.id, definition.records)?;
            pages.push(Page {
                id: definition.id,
                copy: definition.copy,
                policy: definition.policy,
                store,
            });
        }

        Ok(Self {
            pages,
            hub_header,
            hub_links,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Every servable page id, hub first
    pub fn page_ids(&self) -> Vec<PageId> {
        std::iter::once(PageId::Home)
            .chain(self.pages.iter().map(|p| p.id))
            .collect()
    }

    pub fn hub(&self) -> PageDocument {
        render_hub(&self.hub_header, &self.hub_links)
    }
}

impl PageSource for Site {
    fn policy(&self, page: PageId) -> Option<RenderingPolicy> {
        match page {
            PageId::Home => Some(RenderingPolicy::Static),
            _ => self.page(page).map(|p| p.policy),
        }
    }

    fn render(&self, page: PageId, extras: &Extras) -> Option<PageDocument> {
        match page {
            PageId::Home => Some(self.hub()),
            _ => self
                .page(page)
                .map(|p| render_page(&p.copy, p.store.list(), p.policy, Some(extras))),
        }
    }
}
