//! Cached, pollable view over one bans or mutes listing
//!
//! Envelopes are cached per query key. Switching pages keeps showing the
//! previous envelope until the new one arrives.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use panel_core::entities::SanctionKind;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::PanelClient;
use crate::error::ClientResult;
use crate::models::{Listing, SanctionRecord};

/// Page size used until [`SanctionFeed::set_rows`] is called
pub const DEFAULT_ROWS: u32 = 10;

type Envelope = Arc<Listing<SanctionRecord>>;

/// Cache key of one listing page: `/api/<kind>?page=<n>&rows=<n>`
pub fn query_key(kind: SanctionKind, page: u32, rows: u32) -> String {
    format!("/api/{}?page={page}&rows={rows}", kind.path())
}

/// Fetch state of the current key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug)]
struct View {
    page: u32,
    rows: u32,
    state: LoadState,
    displayed: Option<Envelope>,
}

/// Paginated listing of one record kind
pub struct SanctionFeed {
    client: PanelClient,
    kind: SanctionKind,
    cache: DashMap<String, Envelope>,
    view: RwLock<View>,
}

impl SanctionFeed {
    pub fn new(client: PanelClient, kind: SanctionKind) -> Self {
        Self {
            client,
            kind,
            cache: DashMap::new(),
            view: RwLock::new(View {
                page: 1,
                rows: DEFAULT_ROWS,
                state: LoadState::Idle,
                displayed: None,
            }),
        }
    }

    /// Create a feed wrapped in Arc, as needed for polling
    pub fn new_shared(client: PanelClient, kind: SanctionKind) -> Arc<Self> {
        Arc::new(Self::new(client, kind))
    }

    pub fn kind(&self) -> SanctionKind {
        self.kind
    }

    pub fn page(&self) -> u32 {
        self.view.read().page
    }

    pub fn rows(&self) -> u32 {
        self.view.read().rows
    }

    pub fn state(&self) -> LoadState {
        self.view.read().state.clone()
    }

    /// Key of the page currently selected
    pub fn key(&self) -> String {
        let view = self.view.read();
        query_key(self.kind, view.page, view.rows)
    }

    /// Envelope on screen: the current key's, or the last one shown
    pub fn data(&self) -> Option<Envelope> {
        self.view.read().displayed.clone()
    }

    /// Total page count derived from the displayed envelope
    pub fn pages(&self) -> u32 {
        let view = self.view.read();
        view.displayed
            .as_ref()
            .map_or(0, |listing| listing.pages(view.rows))
    }

    /// Select a page (1-based); a cached page is shown immediately
    pub fn set_page(&self, page: u32) {
        self.select(page.max(1), None);
    }

    /// Change the page size and go back to page 1
    pub fn set_rows(&self, rows: u32) {
        self.select(1, Some(rows.max(1)));
    }

    fn select(&self, page: u32, rows: Option<u32>) {
        let mut view = self.view.write();
        view.page = page;
        if let Some(rows) = rows {
            view.rows = rows;
        }

        let key = query_key(self.kind, view.page, view.rows);
        if let Some(cached) = self.cache.get(&key) {
            view.displayed = Some(cached.value().clone());
        }
        view.state = LoadState::Idle;
    }

    /// Fetch the current key, replacing its cache entry
    ///
    /// On failure the displayed envelope is kept and the state becomes
    /// `Failed`.
    pub async fn refresh(&self) -> ClientResult<Envelope> {
        let (page, rows) = {
            let mut view = self.view.write();
            view.state = LoadState::Loading;
            (view.page, view.rows)
        };
        let key = query_key(self.kind, page, rows);

        match self.client.sanctions(self.kind, page, rows).await {
            Ok(listing) => {
                let listing = Arc::new(listing);
                self.cache.insert(key.clone(), listing.clone());

                let mut view = self.view.write();
                if query_key(self.kind, view.page, view.rows) == key {
                    view.displayed = Some(listing.clone());
                    view.state = LoadState::Idle;
                }
                debug!(key = %key, count = listing.count, "Feed refreshed");
                Ok(listing)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Feed refresh failed");
                let mut view = self.view.write();
                if query_key(self.kind, view.page, view.rows) == key {
                    view.state = LoadState::Failed(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Cached envelope for the current key, fetching it when missing
    pub async fn load(&self) -> ClientResult<Envelope> {
        if let Some(cached) = self.cache.get(&self.key()) {
            return Ok(cached.value().clone());
        }
        self.refresh().await
    }

    /// Refresh the current key every `interval` until the handle is dropped
    pub fn spawn_polling(self: &Arc<Self>, interval: Duration) -> PollHandle {
        let feed = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                // Failures are recorded in the load state
                let _ = feed.refresh().await;
            }
        });
        PollHandle(handle)
    }
}

/// Running poll task; aborted on drop
#[derive(Debug)]
pub struct PollHandle(JoinHandle<()>);

impl PollHandle {
    pub fn abort(&self) {
        self.0.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}
