//! Policy-aware render cache.
//!
//! Static pages render once and are served forever. Dynamic pages render on
//! every request with fresh extras and are never stored. Interval pages are
//! served from cache until their window elapses; the first request to see
//! an expired entry regenerates it while concurrent requests keep getting
//! the stale document.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Duration, Utc};
use render_modes_core::{Error, Extras, PageDocument, PageId, RenderingPolicy, Result};
use tracing::{debug, info};

use crate::lock::{mutex_lock, rw_read, rw_write};
use crate::site::PageSource;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = mutex_lock(&self.now, "advance");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *mutex_lock(&self.now, "now")
    }
}

/// Produces the per-request values for dynamic pages.
///
/// This is the only place time or randomness enters a render.
pub trait ExtrasSource: Send + Sync {
    fn extras(&self, page: PageId, now: DateTime<Utc>) -> Extras;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtras;

impl ExtrasSource for NoExtras {
    fn extras(&self, _page: PageId, _now: DateTime<Utc>) -> Extras {
        Extras::default()
    }
}

/// How a request was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from a fresh cache entry
    Hit,
    /// No entry yet; rendered and stored
    Miss,
    /// Entry had expired; regenerated by this request
    Revalidated,
    /// Entry had expired and another request is regenerating it
    Stale,
    /// Dynamic page, never cached
    Bypass,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Revalidated => "REVALIDATED",
            CacheStatus::Stale => "STALE",
            CacheStatus::Bypass => "BYPASS",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Served {
    pub document: Arc<PageDocument>,
    pub status: CacheStatus,
    pub policy: RenderingPolicy,
    pub rendered_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Entry {
    document: Arc<PageDocument>,
    rendered_at: DateTime<Utc>,
    regenerating: bool,
}

pub struct PageCache {
    source: Arc<dyn PageSource>,
    clock: Arc<dyn Clock>,
    extras: Arc<dyn ExtrasSource>,
    entries: RwLock<HashMap<PageId, Entry>>,
}

impl PageCache {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            extras: Arc::new(NoExtras),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_extras(mut self, extras: Arc<dyn ExtrasSource>) -> Self {
        self.extras = extras;
        self
    }

    pub fn policy(&self, page: PageId) -> Option<RenderingPolicy> {
        self.source.policy(page)
    }

    /// Prerender every Static and Interval page among `pages`.
    ///
    /// Returns the number of documents stored.
    pub fn warm(&self, pages: &[PageId]) -> Result<usize> {
        let mut warmed = 0;
        for &page in pages {
            let policy = self.policy_of(page)?;
            if !policy.is_prerendered() {
                continue;
            }
            let now = self.clock.now();
            self.fill(page, now)?;
            warmed += 1;
        }
        info!(warmed, "Prerendered cacheable pages");
        Ok(warmed)
    }

    /// Serve `page` according to its rendering policy
    pub fn get(&self, page: PageId) -> Result<Served> {
        let policy = self.policy_of(page)?;
        let now = self.clock.now();

        let served = match policy {
            RenderingPolicy::Dynamic => {
                let extras = self.extras.extras(page, now);
                let document = self.render(page, &extras)?;
                Served {
                    document: Arc::new(document),
                    status: CacheStatus::Bypass,
                    policy,
                    rendered_at: now,
                }
            }
            RenderingPolicy::Static => {
                let cached = rw_read(&self.entries, "get").get(&page).map(|entry| Served {
                    document: Arc::clone(&entry.document),
                    status: CacheStatus::Hit,
                    policy,
                    rendered_at: entry.rendered_at,
                });
                match cached {
                    Some(served) => served,
                    None => {
                        let document = self.fill(page, now)?;
                        Served {
                            document,
                            status: CacheStatus::Miss,
                            policy,
                            rendered_at: now,
                        }
                    }
                }
            }
            RenderingPolicy::Interval { seconds } => self.get_interval(page, policy, seconds, now)?,
        };

        debug!(page = %page, status = served.status.as_str(), "Served page");
        Ok(served)
    }

    fn get_interval(
        &self,
        page: PageId,
        policy: RenderingPolicy,
        seconds: u32,
        now: DateTime<Utc>,
    ) -> Result<Served> {
        let window = Duration::seconds(i64::from(seconds));

        let had_entry = {
            let mut entries = rw_write(&self.entries, "get_interval");
            match entries.get_mut(&page) {
                Some(entry) => {
                    let age = now.signed_duration_since(entry.rendered_at);
                    if age < window || entry.regenerating {
                        let status = if age < window {
                            CacheStatus::Hit
                        } else {
                            CacheStatus::Stale
                        };
                        return Ok(Served {
                            document: Arc::clone(&entry.document),
                            status,
                            policy,
                            rendered_at: entry.rendered_at,
                        });
                    }
                    entry.regenerating = true;
                    true
                }
                None => false,
            }
        };

        // Render outside the lock so concurrent readers can take the stale copy.
        let document = match self.render(page, &Extras::default()) {
            Ok(document) => Arc::new(document),
            Err(err) => {
                if let Some(entry) = rw_write(&self.entries, "get_interval").get_mut(&page) {
                    entry.regenerating = false;
                }
                return Err(err);
            }
        };

        rw_write(&self.entries, "get_interval").insert(
            page,
            Entry {
                document: Arc::clone(&document),
                rendered_at: now,
                regenerating: false,
            },
        );

        let status = if had_entry {
            info!(page = %page, seconds, "Regenerated expired page");
            CacheStatus::Revalidated
        } else {
            CacheStatus::Miss
        };

        Ok(Served {
            document,
            status,
            policy,
            rendered_at: now,
        })
    }

    fn fill(&self, page: PageId, now: DateTime<Utc>) -> Result<Arc<PageDocument>> {
        let document = Arc::new(self.render(page, &Extras::default())?);
        rw_write(&self.entries, "fill").insert(
            page,
            Entry {
                document: Arc::clone(&document),
                rendered_at: now,
                regenerating: false,
            },
        );
        Ok(document)
    }

    fn render(&self, page: PageId, extras: &Extras) -> Result<PageDocument> {
        debug!(page = %page, "Rendering page");
        self.source
            .render(page, extras)
            .ok_or_else(|| Error::UnknownPage(page.slug().to_string()))
    }

    fn policy_of(&self, page: PageId) -> Result<RenderingPolicy> {
        self.source
            .policy(page)
            .ok_or_else(|| Error::UnknownPage(page.slug().to_string()))
    }
}
