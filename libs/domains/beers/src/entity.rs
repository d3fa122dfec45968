use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the beers table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "beers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub alcohol_by_volume: f64,
    pub brewery_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Beer
impl From<Model> for crate::models::Beer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            alcohol_by_volume: model.alcohol_by_volume,
            brewery_id: model.brewery_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain CreateBeer to Sea-ORM ActiveModel.
// The id stays NotSet so the store assigns it on insert.
impl From<crate::models::CreateBeer> for ActiveModel {
    fn from(input: crate::models::CreateBeer) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            alcohol_by_volume: Set(input.alcohol_by_volume),
            brewery_id: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
