use std::sync::Arc;
use validator::Validate;

use domain_beers::{AssignmentOutcome, Beer, BeerRepository};

use crate::error::{BreweryError, BreweryResult};
use crate::models::{
    AssignBeerToBrewery, Brewery, BreweryWithBeers, CreateBrewery, UpdateBrewery,
};
use crate::repository::BreweryRepository;

/// Service layer for Brewery business logic.
///
/// Composes the brewery repository with the beer repository so assignment
/// can verify both parents before writing.
#[derive(Clone)]
pub struct BreweryService<R: BreweryRepository, B: BeerRepository> {
    repository: Arc<R>,
    beers: Arc<B>,
}

impl<R: BreweryRepository, B: BeerRepository> BreweryService<R, B> {
    pub fn new(repository: R, beers: B) -> Self {
        Self {
            repository: Arc::new(repository),
            beers: Arc::new(beers),
        }
    }

    /// Create a new brewery with validation
    pub async fn create_brewery(&self, input: CreateBrewery) -> BreweryResult<Brewery> {
        input
            .validate()
            .map_err(|e| BreweryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a brewery by id
    pub async fn get_brewery(&self, id: i32) -> BreweryResult<Brewery> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BreweryError::NotFound(id))
    }

    /// List all breweries
    pub async fn list_breweries(&self) -> BreweryResult<Vec<Brewery>> {
        self.repository.get_all().await
    }

    /// List all breweries together with their beers
    pub async fn list_breweries_with_beers(&self) -> BreweryResult<Vec<BreweryWithBeers>> {
        let pairs = self.repository.get_all_with_beers().await?;

        Ok(pairs
            .into_iter()
            .map(|(brewery, beers)| BreweryWithBeers::from_parts(brewery, beers))
            .collect())
    }

    /// Beers produced by a brewery; the brewery itself must exist
    pub async fn beers_of(&self, brewery_id: i32) -> BreweryResult<Vec<Beer>> {
        self.get_brewery(brewery_id).await?;

        self.repository.get_beers_of(brewery_id).await
    }

    /// Update a brewery
    pub async fn update_brewery(&self, id: i32, input: UpdateBrewery) -> BreweryResult<Brewery> {
        input
            .validate()
            .map_err(|e| BreweryError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a brewery
    pub async fn delete_brewery(&self, id: i32) -> BreweryResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(BreweryError::NotFound(id));
        }

        Ok(())
    }

    /// Assign a beer to a brewery.
    ///
    /// Both rows must exist; the write is idempotent, so repeating a
    /// successful call reports `AlreadyAssigned`.
    pub async fn assign_beer(
        &self,
        input: AssignBeerToBrewery,
    ) -> BreweryResult<AssignmentOutcome> {
        input
            .validate()
            .map_err(|e| BreweryError::Validation(e.to_string()))?;

        self.get_brewery(input.brewery_id).await?;

        self.beers
            .get_by_id(input.beer_id)
            .await
            .map_err(|e| BreweryError::Internal(e.to_string()))?
            .ok_or(BreweryError::BeerNotFound(input.beer_id))?;

        let assigned = self
            .repository
            .assign_beer(input.brewery_id, input.beer_id)
            .await?;

        Ok(if assigned {
            AssignmentOutcome::Assigned
        } else {
            AssignmentOutcome::AlreadyAssigned
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBreweryRepository;
    use domain_beers::{CreateBeer, InMemoryBeerRepository};
    use mockall::predicate::eq;

    fn sample_brewery(id: i32) -> Brewery {
        Brewery::new(
            id,
            CreateBrewery {
                name: "Sample Brewery".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_get_brewery_maps_absence_to_not_found() {
        let mut mock_repo = MockBreweryRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(9))
            .returning(|_| Ok(None));

        let service = BreweryService::new(mock_repo, InMemoryBeerRepository::new());
        let result = service.get_brewery(9).await;

        assert!(matches!(result, Err(BreweryError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_assign_beer_requires_existing_brewery() {
        let mut mock_repo = MockBreweryRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_assign_beer().never();

        let service = BreweryService::new(mock_repo, InMemoryBeerRepository::new());
        let result = service
            .assign_beer(AssignBeerToBrewery {
                brewery_id: 1,
                beer_id: 1,
            })
            .await;

        assert!(matches!(result, Err(BreweryError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_assign_beer_requires_existing_beer() {
        let mut mock_repo = MockBreweryRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_brewery(id))));
        mock_repo.expect_assign_beer().never();

        // Beer store is empty, so any beer id is unknown
        let service = BreweryService::new(mock_repo, InMemoryBeerRepository::new());
        let result = service
            .assign_beer(AssignBeerToBrewery {
                brewery_id: 1,
                beer_id: 42,
            })
            .await;

        assert!(matches!(result, Err(BreweryError::BeerNotFound(42))));
    }

    #[tokio::test]
    async fn test_assign_beer_maps_repository_boolean_to_outcome() {
        let beers = InMemoryBeerRepository::new();
        let beer = beers
            .create(CreateBeer {
                name: "Ale".to_string(),
                alcohol_by_volume: 5.0,
            })
            .await
            .unwrap();

        let mut mock_repo = MockBreweryRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_brewery(id))));
        mock_repo
            .expect_assign_beer()
            .with(eq(1), eq(beer.id))
            .times(2)
            .returning({
                let mut first = true;
                move |_, _| {
                    let assigned = first;
                    first = false;
                    Ok(assigned)
                }
            });

        let service = BreweryService::new(mock_repo, beers);

        let input = AssignBeerToBrewery {
            brewery_id: 1,
            beer_id: beer.id,
        };

        let first = service.assign_beer(input.clone()).await.unwrap();
        assert_eq!(first, AssignmentOutcome::Assigned);

        let second = service.assign_beer(input).await.unwrap();
        assert_eq!(second, AssignmentOutcome::AlreadyAssigned);
    }

    #[tokio::test]
    async fn test_assign_beer_rejects_non_positive_ids() {
        let mut mock_repo = MockBreweryRepository::new();
        mock_repo.expect_get_by_id().never();

        let service = BreweryService::new(mock_repo, InMemoryBeerRepository::new());
        let result = service
            .assign_beer(AssignBeerToBrewery {
                brewery_id: 0,
                beer_id: 1,
            })
            .await;

        assert!(matches!(result, Err(BreweryError::Validation(_))));
    }
}
