//! Integration tests for the Bars domain
//!
//! Uses real PostgreSQL via testcontainers to verify the join semantics:
//! conflict-guarded assignment, the eager-fetch listing, and the cascades
//! on bar and beer deletion.

use domain_bars::*;
use domain_beers::{BeerRepository, CreateBeer, PgBeerRepository};
use test_utils::{TestDataBuilder, TestDatabase};

async fn seed(
    beers: &PgBeerRepository,
    repo: &PgBarRepository,
    builder: &TestDataBuilder,
) -> (Bar, domain_beers::Beer) {
    let bar = repo
        .create(CreateBar {
            name: builder.name("bar", "main"),
            address: "1 Test Street".to_string(),
        })
        .await
        .unwrap();
    let beer = beers
        .create(CreateBeer {
            name: builder.name("beer", "main"),
            alcohol_by_volume: 4.9,
        })
        .await
        .unwrap();
    (bar, beer)
}

#[tokio::test]
async fn test_assign_beer_creates_one_join_row_and_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgBarRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("bar_assign");

    let (bar, beer) = seed(&beers, &repo, &builder).await;

    assert!(repo.assign_beer(bar.id, beer.id).await.unwrap());
    assert!(!repo.assign_beer(bar.id, beer.id).await.unwrap());

    let served = repo.get_beers_served_at(bar.id).await.unwrap();
    assert_eq!(served.len(), 1);
    assert_eq!(served[0].id, beer.id);
}

#[tokio::test]
async fn test_concurrent_assignments_settle_on_a_single_row() {
    let db = TestDatabase::new().await;
    let repo = std::sync::Arc::new(PgBarRepository::new(db.connection()));
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("bar_assign_race");

    let (bar, beer) = seed(&beers, &repo, &builder).await;
    let (bar_id, beer_id) = (bar.id, beer.id);

    // Race several identical assignments; the composite key is the guard,
    // so exactly one reports "created" and the rest settle on "exists".
    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(
            async move { repo.assign_beer(bar_id, beer_id).await },
        ));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.get_beers_served_at(bar_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_all_with_beers_eager_fetches_join() {
    let db = TestDatabase::new().await;
    let repo = PgBarRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("bar_eager");

    let (serving, beer) = seed(&beers, &repo, &builder).await;
    let dry = repo
        .create(CreateBar {
            name: builder.name("bar", "dry"),
            address: "2 Empty Lane".to_string(),
        })
        .await
        .unwrap();

    repo.assign_beer(serving.id, beer.id).await.unwrap();

    let listed = repo.get_all_with_beers().await.unwrap();
    assert_eq!(listed.len(), 2);

    let serving_entry = listed
        .iter()
        .find(|(b, _)| b.id == serving.id)
        .expect("serving bar listed");
    assert_eq!(serving_entry.1.len(), 1);

    let dry_entry = listed
        .iter()
        .find(|(b, _)| b.id == dry.id)
        .expect("dry bar listed");
    assert!(dry_entry.1.is_empty());
}

#[tokio::test]
async fn test_delete_bar_cascades_join_rows() {
    let db = TestDatabase::new().await;
    let repo = PgBarRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("bar_delete_cascade");

    let (bar, beer) = seed(&beers, &repo, &builder).await;
    repo.assign_beer(bar.id, beer.id).await.unwrap();

    assert!(repo.delete(bar.id).await.unwrap());

    // The join rows are gone with the bar; the beer survives
    assert!(repo.get_by_id(bar.id).await.unwrap().is_none());
    assert!(beers.get_by_id(beer.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_beer_cascades_join_rows() {
    let db = TestDatabase::new().await;
    let repo = PgBarRepository::new(db.connection());
    let beers = PgBeerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("beer_delete_cascade");

    let (bar, beer) = seed(&beers, &repo, &builder).await;
    repo.assign_beer(bar.id, beer.id).await.unwrap();

    assert!(beers.delete(beer.id).await.unwrap());

    // Beer-side cascade: the bar no longer serves anything
    let served = repo.get_beers_served_at(bar.id).await.unwrap();
    assert!(served.is_empty());
}
