use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

// ===== Bars Entity =====

pub mod bar {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "bars")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        #[sea_orm(column_type = "Text")]
        pub address: String,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::bar_beer::Entity")]
        BarBeers,
    }

    impl Related<super::bar_beer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::BarBeers.def()
        }
    }

    // Many-to-many to beers through the bar_beers join table
    impl Related<domain_beers::entity::Entity> for Entity {
        fn to() -> RelationDef {
            super::bar_beer::Relation::Beer.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::bar_beer::Relation::Bar.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Bar {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
                address: model.address,
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            }
        }
    }

    impl From<crate::models::CreateBar> for ActiveModel {
        fn from(input: crate::models::CreateBar) -> Self {
            let now = chrono::Utc::now();
            ActiveModel {
                id: NotSet,
                name: Set(input.name),
                address: Set(input.address),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
        }
    }
}

// ===== BarBeers Join Entity =====

pub mod bar_beer {
    use super::*;

    /// Records that a bar serves a beer. Composite primary key, no payload
    /// beyond the two references; the key doubles as the uniqueness guard
    /// for concurrent assignments.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "bar_beers")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub bar_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub beer_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::bar::Entity",
            from = "Column::BarId",
            to = "super::bar::Column::Id"
        )]
        Bar,
        #[sea_orm(
            belongs_to = "domain_beers::entity::Entity",
            from = "Column::BeerId",
            to = "domain_beers::entity::Column::Id"
        )]
        Beer,
    }

    impl Related<super::bar::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Bar.def()
        }
    }

    impl Related<domain_beers::entity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Beer.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// Re-export entities
pub use bar::Entity as BarEntity;
pub use bar_beer::Entity as BarBeerEntity;
