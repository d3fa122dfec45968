use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Beer entity - a beer known to the taplist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Unique identifier, assigned by the store on creation
    pub id: i32,
    /// Beer name
    pub name: String,
    /// Alcohol by volume, in percent
    pub alcohol_by_volume: f64,
    /// Producing brewery, when one has been assigned
    pub brewery_id: Option<i32>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new beer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeer {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub alcohol_by_volume: f64,
}

/// DTO for updating an existing beer
///
/// Absent fields keep their stored value. The brewery association is not
/// updatable here; it is managed through the brewery assignment endpoint.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBeer {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub alcohol_by_volume: Option<f64>,
}

/// Query parameters for listing beers by alcohol range.
///
/// Both bounds are exclusive; at least one must be supplied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AbvRangeQuery {
    /// Only beers strictly stronger than this value
    pub gt_alcohol_by_volume: Option<f64>,
    /// Only beers strictly weaker than this value
    pub lt_alcohol_by_volume: Option<f64>,
}

impl AbvRangeQuery {
    /// Bound checks applied before any repository call: at least one bound,
    /// no negative bound, and a non-empty interval when both are given.
    pub fn ensure_valid(&self) -> Result<(), String> {
        match (self.gt_alcohol_by_volume, self.lt_alcohol_by_volume) {
            (None, None) => Err(
                "At least one of gtAlcoholByVolume and ltAlcoholByVolume is required".to_string(),
            ),
            (gt, lt) => {
                if gt.is_some_and(|v| v < 0.0) || lt.is_some_and(|v| v < 0.0) {
                    return Err("Alcohol bounds must not be negative".to_string());
                }
                if let (Some(gt), Some(lt)) = (gt, lt) {
                    if gt >= lt {
                        return Err(format!(
                            "gtAlcoholByVolume ({}) must be less than ltAlcoholByVolume ({})",
                            gt, lt
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Outcome of linking a beer to a bar or brewery.
///
/// Linking is idempotent: repeating a call that already succeeded reports
/// `AlreadyAssigned` and writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AssignmentOutcome {
    /// The association was created by this call
    Assigned,
    /// The association already existed
    AlreadyAssigned,
}

impl Beer {
    /// Build a new beer from its creation DTO and a store-assigned id.
    pub fn new(id: i32, input: CreateBeer) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            alcohol_by_volume: input.alcohol_by_volume,
            brewery_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateBeer DTO
    pub fn apply_update(&mut self, update: UpdateBeer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(abv) = update.alcohol_by_volume {
            self.alcohol_by_volume = abv;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_requires_a_bound() {
        let query = AbvRangeQuery::default();
        assert!(query.ensure_valid().is_err());
    }

    #[test]
    fn test_range_query_single_bound_is_valid() {
        let query = AbvRangeQuery {
            gt_alcohol_by_volume: Some(4.0),
            lt_alcohol_by_volume: None,
        };
        assert!(query.ensure_valid().is_ok());

        let query = AbvRangeQuery {
            gt_alcohol_by_volume: None,
            lt_alcohol_by_volume: Some(6.0),
        };
        assert!(query.ensure_valid().is_ok());
    }

    #[test]
    fn test_range_query_rejects_negative_bounds() {
        let query = AbvRangeQuery {
            gt_alcohol_by_volume: Some(-1.0),
            lt_alcohol_by_volume: None,
        };
        assert!(query.ensure_valid().is_err());
    }

    #[test]
    fn test_range_query_rejects_empty_interval() {
        let query = AbvRangeQuery {
            gt_alcohol_by_volume: Some(6.0),
            lt_alcohol_by_volume: Some(4.0),
        };
        assert!(query.ensure_valid().is_err());

        let query = AbvRangeQuery {
            gt_alcohol_by_volume: Some(5.0),
            lt_alcohol_by_volume: Some(5.0),
        };
        assert!(query.ensure_valid().is_err());
    }

    #[test]
    fn test_apply_update_overlays_only_given_fields() {
        let mut beer = Beer::new(
            1,
            CreateBeer {
                name: "Old Ale".to_string(),
                alcohol_by_volume: 7.2,
            },
        );

        beer.apply_update(UpdateBeer {
            name: None,
            alcohol_by_volume: Some(7.5),
        });

        assert_eq!(beer.name, "Old Ale");
        assert_eq!(beer.alcohol_by_volume, 7.5);
    }
}
