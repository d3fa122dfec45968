use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{BeerError, BeerResult},
    models::{Beer, CreateBeer, UpdateBeer},
    repository::BeerRepository,
};

pub struct PgBeerRepository {
    db: DatabaseConnection,
}

impl PgBeerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> BeerError {
    BeerError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl BeerRepository for PgBeerRepository {
    async fn create(&self, input: CreateBeer) -> BeerResult<Beer> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(db_error)?;

        tracing::info!(beer_id = %model.id, "Created beer");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> BeerResult<Option<Beer>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_all(&self) -> BeerResult<Vec<Beer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateBeer) -> BeerResult<Beer> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(BeerError::NotFound(id))?;

        let mut beer: Beer = model.into();
        beer.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(beer.id),
            name: Set(beer.name.clone()),
            alcohol_by_volume: Set(beer.alcohol_by_volume),
            brewery_id: Set(beer.brewery_id),
            created_at: Set(beer.created_at.into()),
            updated_at: Set(beer.updated_at.into()),
        };

        let updated_model = active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(beer_id = %id, "Updated beer");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> BeerResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
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
        let mut query = entity::Entity::find();

        // Exclusive bounds on both sides
        if let Some(gt) = gt {
            query = query.filter(entity::Column::AlcoholByVolume.gt(gt));
        }

        if let Some(lt) = lt {
            query = query.filter(entity::Column::AlcoholByVolume.lt(lt));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
