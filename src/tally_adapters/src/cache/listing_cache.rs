use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tally_core::{Invoice, PathRevalidator};

/// Rendered invoice listings keyed by path.
///
/// An entry lives until its path is revalidated; the next read after that
/// goes back to the store.
#[derive(Debug, Clone, Default)]
pub struct ListingCache {
    entries: Arc<DashMap<String, Slot>>,
}

/// `generation` is bumped on every revalidation, so a load that started
/// before one can tell its result is already stale.
#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    listing: Option<Arc<Vec<Invoice>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Arc<Vec<Invoice>>> {
        self.entries
            .get(path)
            .and_then(|slot| slot.listing.as_ref().map(Arc::clone))
    }

    /// Returns the cached listing for `path`, loading and caching it on a
    /// miss. Load errors are returned as is and nothing is cached.
    ///
    /// A listing whose path was revalidated while it loaded is handed to the
    /// caller but not cached.
    pub async fn get_or_load<F, Fut, E>(&self, path: &str, load: F) -> Result<Arc<Vec<Invoice>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Invoice>, E>>,
    {
        let generation = match self.entries.get(path) {
            Some(slot) => {
                if let Some(listing) = &slot.listing {
                    tracing::debug!(path, "Listing served from cache");
                    return Ok(Arc::clone(listing));
                }
                slot.generation
            }
            None => 0,
        };

        let listing = Arc::new(load().await?);

        let mut slot = self.entries.entry(path.to_owned()).or_default();
        if slot.generation == generation {
            slot.listing = Some(Arc::clone(&listing));
        } else {
            tracing::debug!(path, "Listing invalidated while loading, not cached");
        }
        Ok(listing)
    }
}

#[async_trait::async_trait]
impl PathRevalidator for ListingCache {
    async fn revalidate_path(&self, path: &str) {
        let mut slot = self.entries.entry(path.to_owned()).or_default();
        slot.generation += 1;
        if slot.listing.take().is_some() {
            tracing::debug!(path, "Listing invalidated");
        }
    }
}
