use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, CreateBeer, UpdateBeer};

/// Repository trait for Beer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Create a new beer; the store assigns the id
    async fn create(&self, input: CreateBeer) -> BeerResult<Beer>;

    /// Get a beer by id; absence is `None`, never an error
    async fn get_by_id(&self, id: i32) -> BeerResult<Option<Beer>>;

    /// Unconditional full-table read, ordered by id
    async fn get_all(&self) -> BeerResult<Vec<Beer>>;

    /// Load, overlay the given fields, persist
    async fn update(&self, id: i32, input: UpdateBeer) -> BeerResult<Beer>;

    /// Delete a beer by id; `false` when no row was removed
    async fn delete(&self, id: i32) -> BeerResult<bool>;

    /// Beers with alcohol-by-volume inside the exclusive bounds; each bound
    /// is applied only when present
    async fn get_by_alcohol_range(
        &self,
        gt: Option<f64>,
        lt: Option<f64>,
    ) -> BeerResult<Vec<Beer>>;
}

#[derive(Debug, Default)]
struct BeerStore {
    beers: HashMap<i32, Beer>,
    next_id: i32,
}

/// In-memory implementation of BeerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBeerRepository {
    store: Arc<RwLock<BeerStore>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point a beer at a brewery (or clear the association).
    ///
    /// This is the in-memory counterpart of the brewery-side assignment
    /// write; it is not part of [`BeerRepository`] because the association
    /// is owned by the brewery aggregate.
    pub async fn set_brewery(&self, beer_id: i32, brewery_id: Option<i32>) -> Option<Beer> {
        let mut store = self.store.write().await;
        let beer = store.beers.get_mut(&beer_id)?;
        beer.brewery_id = brewery_id;
        beer.updated_at = chrono::Utc::now();
        Some(beer.clone())
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn create(&self, input: CreateBeer) -> BeerResult<Beer> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let beer = Beer::new(store.next_id, input);
        store.beers.insert(beer.id, beer.clone());

        tracing::info!(beer_id = %beer.id, "Created beer");
        Ok(beer)
    }

    async fn get_by_id(&self, id: i32) -> BeerResult<Option<Beer>> {
        let store = self.store.read().await;
        Ok(store.beers.get(&id).cloned())
    }

    async fn get_all(&self) -> BeerResult<Vec<Beer>> {
        let store = self.store.read().await;
        let mut beers: Vec<Beer> = store.beers.values().cloned().collect();
        beers.sort_by_key(|b| b.id);
        Ok(beers)
    }

    async fn update(&self, id: i32, input: UpdateBeer) -> BeerResult<Beer> {
        let mut store = self.store.write().await;

        let beer = store.beers.get_mut(&id).ok_or(BeerError::NotFound(id))?;
        beer.apply_update(input);
        let updated = beer.clone();

        tracing::info!(beer_id = %id, "Updated beer");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> BeerResult<bool> {
        let mut store = self.store.write().await;

        if store.beers.remove(&id).is_some() {
            tracing::info!(beer_id = %id, "Deleted beer");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn get_by_alcohol_range(
        &self,
        gt: Option<f64>,
        lt: Option<f64>,
    ) -> BeerResult<Vec<Beer>> {
        let store = self.store.read().await;

        let mut beers: Vec<Beer> = store
            .beers
            .values()
            .filter(|b| gt.is_none_or(|bound| b.alcohol_by_volume > bound))
            .filter(|b| lt.is_none_or(|bound| b.alcohol_by_volume < bound))
            .cloned()
            .collect();
        beers.sort_by_key(|b| b.id);

        Ok(beers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pilsner() -> CreateBeer {
        CreateBeer {
            name: "Test Pilsner".to_string(),
            alcohol_by_volume: 4.8,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryBeerRepository::new();

        let first = repo.create(pilsner()).await.unwrap();
        let second = repo
            .create(CreateBeer {
                name: "Test Stout".to_string(),
                alcohol_by_volume: 9.0,
            })
            .await
            .unwrap();

        assert!(first.id > 0);
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_create_and_get_beer() {
        let repo = InMemoryBeerRepository::new();

        let created = repo.create(pilsner()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_beer_is_none() {
        let repo = InMemoryBeerRepository::new();
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let repo = InMemoryBeerRepository::new();
        let created = repo.create(pilsner()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_alcohol_range_bounds_are_exclusive() {
        let repo = InMemoryBeerRepository::new();
        for (name, abv) in [("Light", 3.5), ("Lager", 5.0), ("Imperial", 8.0)] {
            repo.create(CreateBeer {
                name: name.to_string(),
                alcohol_by_volume: abv,
            })
            .await
            .unwrap();
        }

        let matching = repo
            .get_by_alcohol_range(Some(4.0), Some(6.0))
            .await
            .unwrap();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].alcohol_by_volume, 5.0);

        // A beer sitting exactly on a bound is excluded
        let on_bound = repo
            .get_by_alcohol_range(Some(5.0), Some(6.0))
            .await
            .unwrap();
        assert!(on_bound.is_empty());
    }

    #[tokio::test]
    async fn test_single_bound_filters_one_side() {
        let repo = InMemoryBeerRepository::new();
        for (name, abv) in [("Light", 3.5), ("Lager", 5.0), ("Imperial", 8.0)] {
            repo.create(CreateBeer {
                name: name.to_string(),
                alcohol_by_volume: abv,
            })
            .await
            .unwrap();
        }

        let strong = repo.get_by_alcohol_range(Some(4.0), None).await.unwrap();
        assert_eq!(strong.len(), 2);

        let weak = repo.get_by_alcohol_range(None, Some(4.0)).await.unwrap();
        assert_eq!(weak.len(), 1);
    }

    #[tokio::test]
    async fn test_set_brewery_updates_association() {
        let repo = InMemoryBeerRepository::new();
        let created = repo.create(pilsner()).await.unwrap();

        let updated = repo.set_brewery(created.id, Some(7)).await.unwrap();
        assert_eq!(updated.brewery_id, Some(7));

        let cleared = repo.set_brewery(created.id, None).await.unwrap();
        assert_eq!(cleared.brewery_id, None);

        assert!(repo.set_brewery(999, Some(7)).await.is_none());
    }
}
