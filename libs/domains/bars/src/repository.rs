use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use domain_beers::{Beer, BeerRepository, InMemoryBeerRepository};

use crate::error::{BarError, BarResult};
use crate::models::{Bar, CreateBar, UpdateBar};

/// Repository trait for Bar persistence and the bar ↔ beer join
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BarRepository: Send + Sync {
    /// Create a new bar; the store assigns the id
    async fn create(&self, input: CreateBar) -> BarResult<Bar>;

    /// Get a bar by id; absence is `None`, never an error
    async fn get_by_id(&self, id: i32) -> BarResult<Option<Bar>>;

    /// Unconditional full-table read, ordered by id
    async fn get_all(&self) -> BarResult<Vec<Bar>>;

    /// Load, overlay the given fields, persist
    async fn update(&self, id: i32, input: UpdateBar) -> BarResult<Bar>;

    /// Delete a bar by id; `false` when no row was removed.
    /// Join rows for the bar go with it.
    async fn delete(&self, id: i32) -> BarResult<bool>;

    /// Beers served at the given bar (join projection)
    async fn get_beers_served_at(&self, bar_id: i32) -> BarResult<Vec<Beer>>;

    /// All bars, each with the beers it serves (eager-fetch join)
    async fn get_all_with_beers(&self) -> BarResult<Vec<(Bar, Vec<Beer>)>>;

    /// Record that the bar serves the beer. Returns `false` when the join
    /// row already exists (nothing written), `true` when it was created.
    /// Caller checks both rows exist.
    async fn assign_beer(&self, bar_id: i32, beer_id: i32) -> BarResult<bool>;
}

#[derive(Debug, Default)]
struct BarStore {
    bars: HashMap<i32, Bar>,
    links: HashSet<(i32, i32)>,
    next_id: i32,
}

/// In-memory implementation of BarRepository (for development/testing)
///
/// Shares a beer store with the beer repository so join projections see
/// the same beers the beer endpoints do.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBarRepository {
    store: Arc<RwLock<BarStore>>,
    beers: InMemoryBeerRepository,
}

impl InMemoryBarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share the beer store with an existing beer repository.
    pub fn with_beer_store(beers: InMemoryBeerRepository) -> Self {
        Self {
            store: Arc::new(RwLock::new(BarStore::default())),
            beers,
        }
    }

    /// Number of join rows for a bar; test helper.
    pub async fn served_count(&self, bar_id: i32) -> usize {
        let store = self.store.read().await;
        store.links.iter().filter(|(b, _)| *b == bar_id).count()
    }
}

#[async_trait]
impl BarRepository for InMemoryBarRepository {
    async fn create(&self, input: CreateBar) -> BarResult<Bar> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let bar = Bar::new(store.next_id, input);
        store.bars.insert(bar.id, bar.clone());

        tracing::info!(bar_id = %bar.id, "Created bar");
        Ok(bar)
    }

    async fn get_by_id(&self, id: i32) -> BarResult<Option<Bar>> {
        let store = self.store.read().await;
        Ok(store.bars.get(&id).cloned())
    }

    async fn get_all(&self) -> BarResult<Vec<Bar>> {
        let store = self.store.read().await;
        let mut bars: Vec<Bar> = store.bars.values().cloned().collect();
        bars.sort_by_key(|b| b.id);
        Ok(bars)
    }

    async fn update(&self, id: i32, input: UpdateBar) -> BarResult<Bar> {
        let mut store = self.store.write().await;

        let bar = store.bars.get_mut(&id).ok_or(BarError::NotFound(id))?;
        bar.apply_update(input);
        let updated = bar.clone();

        tracing::info!(bar_id = %id, "Updated bar");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> BarResult<bool> {
        let mut store = self.store.write().await;

        if store.bars.remove(&id).is_none() {
            return Ok(false);
        }

        // Mirror the relational ON DELETE CASCADE on the join rows
        store.links.retain(|(bar_id, _)| *bar_id != id);

        tracing::info!(bar_id = %id, "Deleted bar");
        Ok(true)
    }

    async fn get_beers_served_at(&self, bar_id: i32) -> BarResult<Vec<Beer>> {
        let beer_ids: Vec<i32> = {
            let store = self.store.read().await;
            let mut ids: Vec<i32> = store
                .links
                .iter()
                .filter(|(b, _)| *b == bar_id)
                .map(|(_, beer_id)| *beer_id)
                .collect();
            ids.sort_unstable();
            ids
        };

        let mut beers = Vec::with_capacity(beer_ids.len());
        for beer_id in beer_ids {
            if let Some(beer) = self
                .beers
                .get_by_id(beer_id)
                .await
                .map_err(|e| BarError::Internal(e.to_string()))?
            {
                beers.push(beer);
            }
        }

        Ok(beers)
    }

    async fn get_all_with_beers(&self) -> BarResult<Vec<(Bar, Vec<Beer>)>> {
        let bars = self.get_all().await?;
        let mut result = Vec::with_capacity(bars.len());

        for bar in bars {
            let beers = self.get_beers_served_at(bar.id).await?;
            result.push((bar, beers));
        }

        Ok(result)
    }

    async fn assign_beer(&self, bar_id: i32, beer_id: i32) -> BarResult<bool> {
        let mut store = self.store.write().await;

        let created = store.links.insert((bar_id, beer_id));
        if created {
            tracing::info!(bar_id = %bar_id, beer_id = %beer_id, "Assigned beer to bar");
        }

        Ok(created)
    }
}
