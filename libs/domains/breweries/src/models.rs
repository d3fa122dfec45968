use chrono::{DateTime, Utc};
use domain_beers::Beer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Brewery entity - a beer producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brewery {
    /// Unique identifier, assigned by the store on creation
    pub id: i32,
    /// Brewery name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new brewery
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrewery {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// DTO for updating an existing brewery
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrewery {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
}

/// A brewery together with the beers it produces
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreweryWithBeers {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub beers: Vec<Beer>,
}

impl BreweryWithBeers {
    pub fn from_parts(brewery: Brewery, beers: Vec<Beer>) -> Self {
        Self {
            id: brewery.id,
            name: brewery.name,
            created_at: brewery.created_at,
            updated_at: brewery.updated_at,
            beers,
        }
    }
}

/// Request body for assigning a beer to a brewery
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignBeerToBrewery {
    #[validate(range(min = 1))]
    pub brewery_id: i32,
    #[validate(range(min = 1))]
    pub beer_id: i32,
}

impl Brewery {
    /// Build a new brewery from its creation DTO and a store-assigned id.
    pub fn new(id: i32, input: CreateBrewery) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateBrewery DTO
    pub fn apply_update(&mut self, update: UpdateBrewery) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}
