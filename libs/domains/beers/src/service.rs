use std::sync::Arc;
use validator::Validate;

use crate::error::{BeerError, BeerResult};
use crate::models::{AbvRangeQuery, Beer, CreateBeer, UpdateBeer};
use crate::repository::BeerRepository;

/// Service layer for Beer business logic
#[derive(Clone)]
pub struct BeerService<R: BeerRepository> {
    repository: Arc<R>,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new beer with validation
    pub async fn create_beer(&self, input: CreateBeer) -> BeerResult<Beer> {
        input
            .validate()
            .map_err(|e| BeerError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a beer by id
    pub async fn get_beer(&self, id: i32) -> BeerResult<Beer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BeerError::NotFound(id))
    }

    /// List all beers
    pub async fn list_beers(&self) -> BeerResult<Vec<Beer>> {
        self.repository.get_all().await
    }

    /// List beers whose alcohol-by-volume falls inside the requested range.
    ///
    /// Bound validation happens at the HTTP boundary; the result is always a
    /// vec, possibly empty.
    pub async fn beers_by_alcohol_range(&self, query: AbvRangeQuery) -> BeerResult<Vec<Beer>> {
        self.repository
            .get_by_alcohol_range(query.gt_alcohol_by_volume, query.lt_alcohol_by_volume)
            .await
    }

    /// Update a beer
    pub async fn update_beer(&self, id: i32, input: UpdateBeer) -> BeerResult<Beer> {
        input
            .validate()
            .map_err(|e| BeerError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a beer
    pub async fn delete_beer(&self, id: i32) -> BeerResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(BeerError::NotFound(id));
        }

        Ok(())
    }
}
