use std::sync::Arc;
use validator::Validate;

use domain_beers::{AssignmentOutcome, Beer, BeerRepository};

use crate::error::{BarError, BarResult};
use crate::models::{AssignBeerToBar, Bar, BarWithBeers, CreateBar, UpdateBar};
use crate::repository::BarRepository;

/// Service layer for Bar business logic.
///
/// Composes the bar repository with the beer repository so assignment can
/// verify both parents before touching the join table.
#[derive(Clone)]
pub struct BarService<R: BarRepository, B: BeerRepository> {
    repository: Arc<R>,
    beers: Arc<B>,
}

impl<R: BarRepository, B: BeerRepository> BarService<R, B> {
    pub fn new(repository: R, beers: B) -> Self {
        Self {
            repository: Arc::new(repository),
            beers: Arc::new(beers),
        }
    }

    /// Create a new bar with validation
    pub async fn create_bar(&self, input: CreateBar) -> BarResult<Bar> {
        input
            .validate()
            .map_err(|e| BarError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a bar by id
    pub async fn get_bar(&self, id: i32) -> BarResult<Bar> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BarError::NotFound(id))
    }

    /// List all bars
    pub async fn list_bars(&self) -> BarResult<Vec<Bar>> {
        self.repository.get_all().await
    }

    /// List all bars together with the beers they serve
    pub async fn list_bars_with_beers(&self) -> BarResult<Vec<BarWithBeers>> {
        let pairs = self.repository.get_all_with_beers().await?;

        Ok(pairs
            .into_iter()
            .map(|(bar, beers)| BarWithBeers::from_parts(bar, beers))
            .collect())
    }

    /// Beers served at a bar; the bar itself must exist
    pub async fn beers_served_at(&self, bar_id: i32) -> BarResult<Vec<Beer>> {
        self.get_bar(bar_id).await?;

        self.repository.get_beers_served_at(bar_id).await
    }

    /// Update a bar
    pub async fn update_bar(&self, id: i32, input: UpdateBar) -> BarResult<Bar> {
        input
            .validate()
            .map_err(|e| BarError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a bar
    pub async fn delete_bar(&self, id: i32) -> BarResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(BarError::NotFound(id));
        }

        Ok(())
    }

    /// Record that a bar serves a beer.
    ///
    /// Both rows must exist; the write is idempotent, so repeating a
    /// successful call reports `AlreadyAssigned` and leaves a single
    /// join row behind.
    pub async fn assign_beer(&self, input: AssignBeerToBar) -> BarResult<AssignmentOutcome> {
        input
            .validate()
            .map_err(|e| BarError::Validation(e.to_string()))?;

        self.get_bar(input.bar_id).await?;

        self.beers
            .get_by_id(input.beer_id)
            .await
            .map_err(|e| BarError::Internal(e.to_string()))?
            .ok_or(BarError::BeerNotFound(input.beer_id))?;

        let assigned = self
            .repository
            .assign_beer(input.bar_id, input.beer_id)
            .await?;

        Ok(if assigned {
            AssignmentOutcome::Assigned
        } else {
            AssignmentOutcome::AlreadyAssigned
        })
    }
}
