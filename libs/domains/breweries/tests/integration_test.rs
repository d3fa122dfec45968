//! Integration tests for the Breweries domain
//!
//! Uses real PostgreSQL via testcontainers to verify the brewery → beer
//! linkage: FK assignment, idempotency, the ON DELETE SET NULL behavior,
//! and the grouped listing.

use domain_beers::{BeerRepository, CreateBeer, PgBeerRepository};
use domain_breweries::*;
use test_utils::{TestDataBuilder, TestDatabase};

async fn seed(
    beers: &PgBeerRepository,
    repo: &PgBreweryRepository,
    builder: &TestDataBuilder,
) -> (Brewery, domain_beers::Beer) {
    let brewery = repo
        .create(CreateBrewery {
            name: builder.name("brewery", "main"),
        })
        .await
        .unwrap();
    let beer = beers
        .create(CreateBeer {
            name: builder.name("beer", "main"),
            alcohol_by_volume: 5.6,
        })
        .await
        .unwrap();
    (brewery, beer)
}

#[tokio::test]
async fn test_assign_beer_sets_fk_and_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgBreweryRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("brewery_assign");

    let (brewery, beer) = seed(&beers, &repo, &builder).await;

    assert!(repo.assign_beer(brewery.id, beer.id).await.unwrap());
    assert!(!repo.assign_beer(brewery.id, beer.id).await.unwrap());

    let linked = beers.get_by_id(beer.id).await.unwrap().unwrap();
    assert_eq!(linked.brewery_id, Some(brewery.id));
}

#[tokio::test]
async fn test_assign_beer_reassigns_between_breweries() {
    let db = TestDatabase::new().await;
    let repo = PgBreweryRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("brewery_reassign");

    let (first, beer) = seed(&beers, &repo, &builder).await;
    let second = repo
        .create(CreateBrewery {
            name: builder.name("brewery", "second"),
        })
        .await
        .unwrap();

    assert!(repo.assign_beer(first.id, beer.id).await.unwrap());
    assert!(repo.assign_beer(second.id, beer.id).await.unwrap());

    let linked = beers.get_by_id(beer.id).await.unwrap().unwrap();
    assert_eq!(linked.brewery_id, Some(second.id));
}

#[tokio::test]
async fn test_delete_brewery_nulls_beer_references() {
    let db = TestDatabase::new().await;
    let repo = PgBreweryRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("brewery_delete_nulls");

    let (brewery, beer) = seed(&beers, &repo, &builder).await;
    repo.assign_beer(brewery.id, beer.id).await.unwrap();

    assert!(repo.delete(brewery.id).await.unwrap());

    // ON DELETE SET NULL: the beer survives, the reference does not
    let orphan = beers.get_by_id(beer.id).await.unwrap().unwrap();
    assert_eq!(orphan.brewery_id, None);
}

#[tokio::test]
async fn test_get_beers_of_projects_only_linked_beers() {
    let db = TestDatabase::new().await;
    let repo = PgBreweryRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("brewery_beers_of");

    let (brewery, beer) = seed(&beers, &repo, &builder).await;
    beers
        .create(CreateBeer {
            name: builder.name("beer", "unlinked"),
            alcohol_by_volume: 4.0,
        })
        .await
        .unwrap();

    repo.assign_beer(brewery.id, beer.id).await.unwrap();

    let produced = repo.get_beers_of(brewery.id).await.unwrap();
    assert_eq!(produced.len(), 1);
    assert_eq!(produced[0].id, beer.id);
}

#[tokio::test]
async fn test_get_all_with_beers_groups_by_producer() {
    let db = TestDatabase::new().await;
    let repo = PgBreweryRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("brewery_grouping");

    let (producer, beer) = seed(&beers, &repo, &builder).await;
    let idle = repo
        .create(CreateBrewery {
            name: builder.name("brewery", "idle"),
        })
        .await
        .unwrap();

    repo.assign_beer(producer.id, beer.id).await.unwrap();

    let listed = repo.get_all_with_beers().await.unwrap();
    assert_eq!(listed.len(), 2);

    let producer_entry = listed
        .iter()
        .find(|(b, _)| b.id == producer.id)
        .expect("producer listed");
    assert_eq!(producer_entry.1.len(), 1);

    let idle_entry = listed
        .iter()
        .find(|(b, _)| b.id == idle.id)
        .expect("idle brewery listed");
    assert!(idle_entry.1.is_empty());
}
