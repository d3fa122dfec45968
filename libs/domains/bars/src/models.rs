use chrono::{DateTime, Utc};
use domain_beers::Beer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Bar entity - a place that serves beers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Unique identifier, assigned by the store on creation
    pub id: i32,
    /// Bar name
    pub name: String,
    /// Street address
    pub address: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new bar
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBar {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
}

/// DTO for updating an existing bar
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBar {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,
}

/// A bar together with the beers it serves
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarWithBeers {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub beers: Vec<Beer>,
}

impl BarWithBeers {
    pub fn from_parts(bar: Bar, beers: Vec<Beer>) -> Self {
        Self {
            id: bar.id,
            name: bar.name,
            address: bar.address,
            created_at: bar.created_at,
            updated_at: bar.updated_at,
            beers,
        }
    }
}

/// Request body for assigning a beer to a bar
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignBeerToBar {
    #[validate(range(min = 1))]
    pub bar_id: i32,
    #[validate(range(min = 1))]
    pub beer_id: i32,
}

impl Bar {
    /// Build a new bar from its creation DTO and a store-assigned id.
    pub fn new(id: i32, input: CreateBar) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            address: input.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateBar DTO
    pub fn apply_update(&mut self, update: UpdateBar) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        self.updated_at = Utc::now();
    }
}
