use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use domain_beers::{Beer, BeerRepository, InMemoryBeerRepository};

use crate::error::{BreweryError, BreweryResult};
use crate::models::{Brewery, CreateBrewery, UpdateBrewery};

/// Repository trait for Brewery persistence and the brewery → beer linkage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreweryRepository: Send + Sync {
    /// Create a new brewery; the store assigns the id
    async fn create(&self, input: CreateBrewery) -> BreweryResult<Brewery>;

    /// Get a brewery by id; absence is `None`, never an error
    async fn get_by_id(&self, id: i32) -> BreweryResult<Option<Brewery>>;

    /// Unconditional full-table read, ordered by id
    async fn get_all(&self) -> BreweryResult<Vec<Brewery>>;

    /// Load, overlay the given fields, persist
    async fn update(&self, id: i32, input: UpdateBrewery) -> BreweryResult<Brewery>;

    /// Delete a brewery by id; `false` when no row was removed.
    /// Beers pointing at the brewery keep existing with the reference cleared.
    async fn delete(&self, id: i32) -> BreweryResult<bool>;

    /// Beers produced by the given brewery
    async fn get_beers_of(&self, brewery_id: i32) -> BreweryResult<Vec<Beer>>;

    /// All breweries, each with the beers it produces
    async fn get_all_with_beers(&self) -> BreweryResult<Vec<(Brewery, Vec<Beer>)>>;

    /// Point the beer at the brewery. Returns `false` when the beer already
    /// points there (nothing written), `true` otherwise - including a
    /// reassignment from a different brewery. Caller checks both rows exist.
    async fn assign_beer(&self, brewery_id: i32, beer_id: i32) -> BreweryResult<bool>;
}

#[derive(Debug, Default)]
struct BreweryStore {
    breweries: HashMap<i32, Brewery>,
    next_id: i32,
}

/// In-memory implementation of BreweryRepository (for development/testing)
///
/// Shares a beer store with the beer repository so the linkage behaves like
/// the relational schema: assignments mutate the beer rows.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBreweryRepository {
    store: Arc<RwLock<BreweryStore>>,
    beers: InMemoryBeerRepository,
}

impl InMemoryBreweryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share the beer store with an existing beer repository.
    pub fn with_beer_store(beers: InMemoryBeerRepository) -> Self {
        Self {
            store: Arc::new(RwLock::new(BreweryStore::default())),
            beers,
        }
    }
}

#[async_trait]
impl BreweryRepository for InMemoryBreweryRepository {
    async fn create(&self, input: CreateBrewery) -> BreweryResult<Brewery> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let brewery = Brewery::new(store.next_id, input);
        store.breweries.insert(brewery.id, brewery.clone());

        tracing::info!(brewery_id = %brewery.id, "Created brewery");
        Ok(brewery)
    }

    async fn get_by_id(&self, id: i32) -> BreweryResult<Option<Brewery>> {
        let store = self.store.read().await;
        Ok(store.breweries.get(&id).cloned())
    }

    async fn get_all(&self) -> BreweryResult<Vec<Brewery>> {
        let store = self.store.read().await;
        let mut breweries: Vec<Brewery> = store.breweries.values().cloned().collect();
        breweries.sort_by_key(|b| b.id);
        Ok(breweries)
    }

    async fn update(&self, id: i32, input: UpdateBrewery) -> BreweryResult<Brewery> {
        let mut store = self.store.write().await;

        let brewery = store
            .breweries
            .get_mut(&id)
            .ok_or(BreweryError::NotFound(id))?;
        brewery.apply_update(input);
        let updated = brewery.clone();

        tracing::info!(brewery_id = %id, "Updated brewery");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> BreweryResult<bool> {
        let removed = {
            let mut store = self.store.write().await;
            store.breweries.remove(&id).is_some()
        };

        if !removed {
            return Ok(false);
        }

        // Mirror the relational ON DELETE SET NULL
        let orphaned: Vec<i32> = self
            .beers
            .get_all()
            .await
            .map_err(|e| BreweryError::Internal(e.to_string()))?
            .into_iter()
            .filter(|b| b.brewery_id == Some(id))
            .map(|b| b.id)
            .collect();
        for beer_id in orphaned {
            self.beers.set_brewery(beer_id, None).await;
        }

        tracing::info!(brewery_id = %id, "Deleted brewery");
        Ok(true)
    }

    async fn get_beers_of(&self, brewery_id: i32) -> BreweryResult<Vec<Beer>> {
        let beers = self
            .beers
            .get_all()
            .await
            .map_err(|e| BreweryError::Internal(e.to_string()))?;

        Ok(beers
            .into_iter()
            .filter(|b| b.brewery_id == Some(brewery_id))
            .collect())
    }

    async fn get_all_with_beers(&self) -> BreweryResult<Vec<(Brewery, Vec<Beer>)>> {
        let breweries = self.get_all().await?;
        let mut result = Vec::with_capacity(breweries.len());

        for brewery in breweries {
            let beers = self.get_beers_of(brewery.id).await?;
            result.push((brewery, beers));
        }

        Ok(result)
    }

    async fn assign_beer(&self, brewery_id: i32, beer_id: i32) -> BreweryResult<bool> {
        let beer = self
            .beers
            .get_by_id(beer_id)
            .await
            .map_err(|e| BreweryError::Internal(e.to_string()))?
            .ok_or(BreweryError::BeerNotFound(beer_id))?;

        if beer.brewery_id == Some(brewery_id) {
            return Ok(false);
        }

        self.beers.set_brewery(beer_id, Some(brewery_id)).await;

        tracing::info!(brewery_id = %brewery_id, beer_id = %beer_id, "Assigned beer to brewery");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_beers::CreateBeer;

    async fn seed(
        beers: &InMemoryBeerRepository,
        repo: &InMemoryBreweryRepository,
    ) -> (Brewery, Beer) {
        let brewery = repo
            .create(CreateBrewery {
                name: "Test Brewery".to_string(),
            })
            .await
            .unwrap();
        let beer = beers
            .create(CreateBeer {
                name: "Test Ale".to_string(),
                alcohol_by_volume: 5.6,
            })
            .await
            .unwrap();
        (brewery, beer)
    }

    #[tokio::test]
    async fn test_assign_beer_is_idempotent() {
        let beers = InMemoryBeerRepository::new();
        let repo = InMemoryBreweryRepository::with_beer_store(beers.clone());
        let (brewery, beer) = seed(&beers, &repo).await;

        assert!(repo.assign_beer(brewery.id, beer.id).await.unwrap());
        assert!(!repo.assign_beer(brewery.id, beer.id).await.unwrap());

        let linked = beers.get_by_id(beer.id).await.unwrap().unwrap();
        assert_eq!(linked.brewery_id, Some(brewery.id));
    }

    #[tokio::test]
    async fn test_assign_beer_reassigns_between_breweries() {
        let beers = InMemoryBeerRepository::new();
        let repo = InMemoryBreweryRepository::with_beer_store(beers.clone());
        let (first, beer) = seed(&beers, &repo).await;
        let second = repo
            .create(CreateBrewery {
                name: "Second Brewery".to_string(),
            })
            .await
            .unwrap();

        assert!(repo.assign_beer(first.id, beer.id).await.unwrap());
        assert!(repo.assign_beer(second.id, beer.id).await.unwrap());

        let linked = beers.get_by_id(beer.id).await.unwrap().unwrap();
        assert_eq!(linked.brewery_id, Some(second.id));
    }

    #[tokio::test]
    async fn test_delete_brewery_clears_beer_references() {
        let beers = InMemoryBeerRepository::new();
        let repo = InMemoryBreweryRepository::with_beer_store(beers.clone());
        let (brewery, beer) = seed(&beers, &repo).await;

        repo.assign_beer(brewery.id, beer.id).await.unwrap();
        assert!(repo.delete(brewery.id).await.unwrap());

        let orphan = beers.get_by_id(beer.id).await.unwrap().unwrap();
        assert_eq!(orphan.brewery_id, None);
    }

    #[tokio::test]
    async fn test_get_beers_of_filters_by_brewery() {
        let beers = InMemoryBeerRepository::new();
        let repo = InMemoryBreweryRepository::with_beer_store(beers.clone());
        let (brewery, beer) = seed(&beers, &repo).await;

        let unlinked = beers
            .create(CreateBeer {
                name: "Unlinked".to_string(),
                alcohol_by_volume: 4.1,
            })
            .await
            .unwrap();

        repo.assign_beer(brewery.id, beer.id).await.unwrap();

        let produced = repo.get_beers_of(brewery.id).await.unwrap();
        assert_eq!(produced.len(), 1);
        assert_eq!(produced[0].id, beer.id);
        assert!(produced.iter().all(|b| b.id != unlinked.id));
    }
}
