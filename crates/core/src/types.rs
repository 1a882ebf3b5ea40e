use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a page served by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// The navigation hub
    Home,
    About,
    Dashboard,
    News,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::About, PageId::Dashboard, PageId::News];

    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Dashboard => "dashboard",
            PageId::News => "news",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            PageId::Home => "/",
            PageId::About => "/about",
            PageId::Dashboard => "/dashboard",
            PageId::News => "/news",
        }
    }

    /// Resolve a request path such as `/news` or `/news/`
    pub fn from_route(route: &str) -> Option<PageId> {
        let trimmed = route.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(PageId::Home);
        }
        Self::ALL.into_iter().find(|page| page.route() == trimmed)
    }

    pub fn from_slug(slug: &str) -> Option<PageId> {
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Some(PageId::Home);
        }
        Self::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::from_slug(s).ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

/// Immutable unit of display content.
///
/// For articles `label` holds the title and `value` the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

impl Record {
    pub fn fact(id: u32, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            value: value.into(),
            published: None,
        }
    }

    pub fn article(
        id: u32,
        title: impl Into<String>,
        summary: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: title.into(),
            value: summary.into(),
            published: Some(published.into()),
        }
    }
}

/// When a page gets rendered and how long its output may be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderingPolicy {
    /// Render once, never refresh
    Static,
    /// Render fresh on every request
    Dynamic,
    /// Render once, then refresh after `seconds` have elapsed
    Interval { seconds: u32 },
}

impl RenderingPolicy {
    pub const fn interval(seconds: u32) -> Self {
        RenderingPolicy::Interval { seconds }
    }

    /// Short name shown in the policy banner
    pub fn name(&self) -> &'static str {
        match self {
            RenderingPolicy::Static => "Static",
            RenderingPolicy::Dynamic => "Dynamic",
            RenderingPolicy::Interval { .. } => "ISR",
        }
    }

    pub fn technique(&self) -> &'static str {
        match self {
            RenderingPolicy::Static => "Static Site Generation (SSG)",
            RenderingPolicy::Dynamic => "Server-Side Rendering (SSR)",
            RenderingPolicy::Interval { .. } => "Incremental Static Regeneration (ISR)",
        }
    }

    pub fn description(&self) -> String {
        match self {
            RenderingPolicy::Static => {
                "This page is rendered at build time and served instantly without revalidation."
                    .to_string()
            }
            RenderingPolicy::Dynamic => {
                "This page fetches fresh data on every request using server-side rendering."
                    .to_string()
            }
            RenderingPolicy::Interval { seconds } => format!(
                "This page is statically generated and automatically refreshed every {} seconds.",
                seconds
            ),
        }
    }

    /// Whether output may be rendered ahead of any request
    pub fn is_prerendered(&self) -> bool {
        !matches!(self, RenderingPolicy::Dynamic)
    }

    pub fn revalidate_seconds(&self) -> Option<u32> {
        match self {
            RenderingPolicy::Interval { seconds } => Some(*seconds),
            _ => None,
        }
    }
}

impl fmt::Display for RenderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderingPolicy::Interval { seconds } => write!(f, "{} ({}s)", self.name(), seconds),
            _ => f.write_str(self.name()),
        }
    }
}

/// One per-render value supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraField {
    pub label: String,
    pub value: String,
}

/// Per-render values (current time, a random sample) injected by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub fields: Vec<ExtraField>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ExtraField {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Page-specific copy that does not depend on the rendering policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCopy {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

// ============================================================================
// PageDocument tree
// ============================================================================

/// Output of a single render invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<PolicyBanner>,
    /// Cards sourced from per-render extras
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub live: Vec<LiveCard>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyBanner {
    /// Policy name, e.g. "Static"
    pub mode: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Fact {
        id: u32,
        label: String,
        value: String,
    },
    Article {
        id: u32,
        title: String,
        summary: String,
        published: String,
    },
}

impl Card {
    pub fn id(&self) -> u32 {
        match self {
            Card::Fact { id, .. } | Card::Article { id, .. } => *id,
        }
    }
}

impl From<&Record> for Card {
    fn from(record: &Record) -> Self {
        match &record.published {
            Some(published) => Card::Article {
                id: record.id,
                title: record.label.clone(),
                summary: record.value.clone(),
                published: published.clone(),
            },
            None => Card::Fact {
                id: record.id,
                label: record.label.clone(),
                value: record.value.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub heading: String,
    pub call_to_action: String,
    pub policy: RenderingPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
}
