//! Handler tests for the Bars domain
//!
//! Drives the bar router over shared in-memory stores, covering CRUD, the
//! empty-is-404 listing policy, and the join assignment flow.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_bars::*;
use domain_beers::{BeerRepository, CreateBeer, InMemoryBeerRepository};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

type Service = BarService<InMemoryBarRepository, InMemoryBeerRepository>;

fn app() -> (Router, Service, InMemoryBeerRepository) {
    let beers = InMemoryBeerRepository::new();
    let repository = InMemoryBarRepository::with_beer_store(beers.clone());
    let service = BarService::new(repository, beers.clone());
    (handlers::router(service.clone()), service, beers)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn seed_bar(service: &Service, name: &str) -> Bar {
    service
        .create_bar(CreateBar {
            name: name.to_string(),
            address: "42 Taproom Way".to_string(),
        })
        .await
        .unwrap()
}

async fn seed_beer(beers: &InMemoryBeerRepository, name: &str, abv: f64) -> domain_beers::Beer {
    beers
        .create(CreateBeer {
            name: name.to_string(),
            alcohol_by_volume: abv,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_bar_returns_201_and_round_trips() {
    let (app, _, _) = app();

    let request = post_json(
        "/",
        json!({ "name": "The Thirsty Crow", "address": "9 High St" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bar: Bar = json_body(response.into_body()).await;
    assert!(bar.id > 0);
    assert_eq!(bar.name, "The Thirsty Crow");
    assert_eq!(bar.address, "9 High St");
}

#[tokio::test]
async fn test_create_bar_requires_name_and_address() {
    let (app, _, _) = app();

    let request = post_json("/", json!({ "name": "No Address" }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = post_json("/", json!({ "name": "", "address": "Somewhere" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_bars_empty_is_404() {
    let (app, _, _) = app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_update_delete_flow() {
    let (app, service, _) = app();
    let created = seed_bar(&service, "Flow Bar").await;

    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Bar = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "address": "New Premises" })).unwrap(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Bar updated successfully.");

    let updated = service.get_bar(created.id).await.unwrap();
    assert_eq!(updated.address, "New Premises");
    assert_eq!(updated.name, "Flow Bar");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_ids_rejected_before_lookup() {
    let (app, _, _) = app();

    for uri in ["/0", "/-1", "/abc"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "uri '{}' should be rejected",
            uri
        );
    }
}

#[tokio::test]
async fn test_assign_beer_success_then_already_assigned() {
    let (app, service, beers) = app();
    let bar = seed_bar(&service, "Join Bar").await;
    let beer = seed_beer(&beers, "Joined Ale", 5.4).await;

    let body = json!({ "barId": bar.id, "beerId": beer.id });

    let response = app
        .clone()
        .oneshot(post_json("/beer", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(message["message"], "Beer assigned to bar successfully.");

    let response = app.oneshot(post_json("/beer", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(message["message"], "Beer is already assigned to this bar.");

    // Exactly one join row either way
    let served = service.beers_served_at(bar.id).await.unwrap();
    assert_eq!(served.len(), 1);
}

#[tokio::test]
async fn test_assign_beer_missing_parent_returns_404() {
    let (app, service, beers) = app();
    let bar = seed_bar(&service, "Existing Bar").await;
    let beer = seed_beer(&beers, "Existing Beer", 4.7).await;

    let response = app
        .clone()
        .oneshot(post_json("/beer", json!({ "barId": 999, "beerId": beer.id })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post_json("/beer", json!({ "barId": bar.id, "beerId": 999 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_beer_rejects_invalid_body() {
    let (app, _, _) = app();

    let response = app
        .clone()
        .oneshot(post_json("/beer", json!({ "barId": 0, "beerId": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json("/beer", json!({ "barId": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_beers_served_at_bar() {
    let (app, service, beers) = app();
    let bar = seed_bar(&service, "Taps Galore").await;
    let on_tap = seed_beer(&beers, "On Tap", 5.0).await;
    seed_beer(&beers, "Not Here", 6.0).await;

    service
        .assign_beer(AssignBeerToBar {
            bar_id: bar.id,
            beer_id: on_tap.id,
        })
        .await
        .unwrap();

    let request = Request::builder()
        .uri(format!("/{}/beer", bar.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let served: Vec<domain_beers::Beer> = json_body(response.into_body()).await;
    assert_eq!(served.len(), 1);
    assert_eq!(served[0].id, on_tap.id);

    // A bar with no beers on tap reports 404 under the empty-is-not-found policy
    let empty_bar = seed_bar(&service, "Dry Bar").await;
    let request = Request::builder()
        .uri(format!("/{}/beer", empty_bar.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_bars_with_beers() {
    let (app, service, beers) = app();
    let serving = seed_bar(&service, "Serving").await;
    let dry = seed_bar(&service, "Dry").await;
    let beer = seed_beer(&beers, "Shared Pils", 4.6).await;

    service
        .assign_beer(AssignBeerToBar {
            bar_id: serving.id,
            beer_id: beer.id,
        })
        .await
        .unwrap();

    let request = Request::builder()
        .uri("/beer")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<serde_json::Value> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 2);

    let serving_entry = listed
        .iter()
        .find(|b| b["id"] == serving.id)
        .expect("serving bar listed");
    assert_eq!(serving_entry["beers"].as_array().unwrap().len(), 1);

    let dry_entry = listed.iter().find(|b| b["id"] == dry.id).expect("dry bar listed");
    assert!(dry_entry["beers"].as_array().unwrap().is_empty());
}
