// Page rendering: pure document renderers, HTML markup with Leptos SSR,
// and the policy-aware render cache

pub mod cache;
pub mod hub;
mod lock;
pub mod markup;
pub mod render;
pub mod site;

pub use cache::{
    CacheStatus, Clock, ExtrasSource, ManualClock, NoExtras, PageCache, Served, SystemClock,
};
pub use hub::render_hub;
pub use markup::render_html;
pub use render::render_page;
pub use site::{Page, PageSource, Site};
