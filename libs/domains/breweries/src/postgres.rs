use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use domain_beers::{entity as beer_entity, Beer};

use crate::{
    entity,
    error::{BreweryError, BreweryResult},
    models::{Brewery, CreateBrewery, UpdateBrewery},
    repository::BreweryRepository,
};

pub struct PgBreweryRepository {
    db: DatabaseConnection,
}

impl PgBreweryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> BreweryError {
    BreweryError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl BreweryRepository for PgBreweryRepository {
    async fn create(&self, input: CreateBrewery) -> BreweryResult<Brewery> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(db_error)?;

        tracing::info!(brewery_id = %model.id, "Created brewery");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> BreweryResult<Option<Brewery>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_all(&self) -> BreweryResult<Vec<Brewery>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateBrewery) -> BreweryResult<Brewery> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(BreweryError::NotFound(id))?;

        let mut brewery: Brewery = model.into();
        brewery.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(brewery.id),
            name: Set(brewery.name.clone()),
            created_at: Set(brewery.created_at.into()),
            updated_at: Set(brewery.updated_at.into()),
        };

        let updated_model = active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(brewery_id = %id, "Updated brewery");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> BreweryResult<bool> {
        // The beers.brewery_id FK is ON DELETE SET NULL, so produced beers
        // survive with the reference cleared.
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(brewery_id = %id, "Deleted brewery");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn get_beers_of(&self, brewery_id: i32) -> BreweryResult<Vec<Beer>> {
        let models = beer_entity::Entity::find()
            .filter(beer_entity::Column::BreweryId.eq(brewery_id))
            .order_by_asc(beer_entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn get_all_with_beers(&self) -> BreweryResult<Vec<(Brewery, Vec<Beer>)>> {
        let breweries = self.get_all().await?;

        let beer_models = beer_entity::Entity::find()
            .filter(beer_entity::Column::BreweryId.is_not_null())
            .order_by_asc(beer_entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        let mut by_brewery: HashMap<i32, Vec<Beer>> = HashMap::new();
        for model in beer_models {
            if let Some(brewery_id) = model.brewery_id {
                by_brewery.entry(brewery_id).or_default().push(model.into());
            }
        }

        Ok(breweries
            .into_iter()
            .map(|brewery| {
                let beers = by_brewery.remove(&brewery.id).unwrap_or_default();
                (brewery, beers)
            })
            .collect())
    }

    async fn assign_beer(&self, brewery_id: i32, beer_id: i32) -> BreweryResult<bool> {
        let beer = beer_entity::Entity::find_by_id(beer_id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(BreweryError::BeerNotFound(beer_id))?;

        if beer.brewery_id == Some(brewery_id) {
            return Ok(false);
        }

        let active_model = beer_entity::ActiveModel {
            id: Set(beer_id),
            brewery_id: Set(Some(brewery_id)),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(brewery_id = %brewery_id, beer_id = %beer_id, "Assigned beer to brewery");
        Ok(true)
    }
}
