use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use domain_beers::{entity as beer_entity, Beer};

use crate::{
    entity::{bar, bar_beer},
    error::{BarError, BarResult},
    models::{Bar, CreateBar, UpdateBar},
    repository::BarRepository,
};

pub struct PgBarRepository {
    db: DatabaseConnection,
}

impl PgBarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> BarError {
    BarError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl BarRepository for PgBarRepository {
    async fn create(&self, input: CreateBar) -> BarResult<Bar> {
        let active_model: bar::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(db_error)?;

        tracing::info!(bar_id = %model.id, "Created bar");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> BarResult<Option<Bar>> {
        let model = bar::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_all(&self) -> BarResult<Vec<Bar>> {
        let models = bar::Entity::find()
            .order_by_asc(bar::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateBar) -> BarResult<Bar> {
        let model = bar::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(BarError::NotFound(id))?;

        let mut bar_model: Bar = model.into();
        bar_model.apply_update(input);

        let active_model = bar::ActiveModel {
            id: Set(bar_model.id),
            name: Set(bar_model.name.clone()),
            address: Set(bar_model.address.clone()),
            created_at: Set(bar_model.created_at.into()),
            updated_at: Set(bar_model.updated_at.into()),
        };

        let updated_model = active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(bar_id = %id, "Updated bar");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> BarResult<bool> {
        // Join rows cascade with the bar row
        let result = bar::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(bar_id = %id, "Deleted bar");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn get_beers_served_at(&self, bar_id: i32) -> BarResult<Vec<Beer>> {
        let rows = bar_beer::Entity::find()
            .filter(bar_beer::Column::BarId.eq(bar_id))
            .find_also_related(beer_entity::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, beer)| beer.map(|m| m.into()))
            .collect())
    }

    async fn get_all_with_beers(&self) -> BarResult<Vec<(Bar, Vec<Beer>)>> {
        let rows = bar::Entity::find()
            .find_with_related(beer_entity::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows
            .into_iter()
            .map(|(bar_model, beer_models)| {
                (
                    bar_model.into(),
                    beer_models.into_iter().map(|m| m.into()).collect(),
                )
            })
            .collect())
    }

    async fn assign_beer(&self, bar_id: i32, beer_id: i32) -> BarResult<bool> {
        let existing = bar_beer::Entity::find_by_id((bar_id, beer_id))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        if existing.is_some() {
            return Ok(false);
        }

        // The composite primary key is the authoritative guard: a concurrent
        // duplicate insert resolves to "already assigned" instead of erroring.
        let link = bar_beer::ActiveModel {
            bar_id: Set(bar_id),
            beer_id: Set(beer_id),
        };

        let insert = bar_beer::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([bar_beer::Column::BarId, bar_beer::Column::BeerId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match insert {
            Ok(_) => {
                tracing::info!(bar_id = %bar_id, beer_id = %beer_id, "Assigned beer to bar");
                Ok(true)
            }
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(db_error(e)),
        }
    }
}
