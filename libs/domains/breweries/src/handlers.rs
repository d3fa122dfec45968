use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    IdPath, MessageResponse, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_beers::{AssignmentOutcome, Beer, BeerRepository};

use crate::error::{BreweryError, BreweryResult};
use crate::models::{
    AssignBeerToBrewery, Brewery, BreweryWithBeers, CreateBrewery, UpdateBrewery,
};
use crate::repository::BreweryRepository;
use crate::service::BreweryService;

pub const TAG: &str = "brewery";

/// OpenAPI documentation for the Brewery API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_breweries,
        create_brewery,
        list_breweries_with_beers,
        assign_beer,
        get_brewery,
        update_brewery,
        delete_brewery,
        list_beers_of_brewery,
    ),
    components(
        schemas(
            Brewery,
            BreweryWithBeers,
            CreateBrewery,
            UpdateBrewery,
            AssignBeerToBrewery,
            Beer,
            MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Brewery management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the brewery router with all HTTP endpoints
pub fn router<R, B>(service: BreweryService<R, B>) -> Router
where
    R: BreweryRepository + 'static,
    B: BeerRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_breweries).post(create_brewery))
        .route("/beer", get(list_breweries_with_beers).post(assign_beer))
        .route(
            "/{id}",
            get(get_brewery).put(update_brewery).delete(delete_brewery),
        )
        .route("/{id}/beer", get(list_beers_of_brewery))
        .with_state(shared_service)
}

/// List all breweries
///
/// An empty result set is reported as 404, not as an empty list.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of breweries", body = Vec<Brewery>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_breweries<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
) -> BreweryResult<Json<Vec<Brewery>>> {
    let breweries = service.list_breweries().await?;

    if breweries.is_empty() {
        return Err(BreweryError::NoneFound);
    }

    Ok(Json(breweries))
}

/// Create a new brewery
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBrewery,
    responses(
        (status = 201, description = "Brewery created successfully", body = Brewery),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_brewery<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    ValidatedJson(input): ValidatedJson<CreateBrewery>,
) -> BreweryResult<impl IntoResponse> {
    let brewery = service.create_brewery(input).await?;

    Ok((StatusCode::CREATED, Json(brewery)))
}

/// List all breweries with the beers they produce
#[utoipa::path(
    get,
    path = "/beer",
    tag = TAG,
    responses(
        (status = 200, description = "Breweries with their beers", body = Vec<BreweryWithBeers>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_breweries_with_beers<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
) -> BreweryResult<Json<Vec<BreweryWithBeers>>> {
    let breweries = service.list_breweries_with_beers().await?;

    if breweries.is_empty() {
        return Err(BreweryError::NoneFound);
    }

    Ok(Json(breweries))
}

/// Assign a beer to a brewery
///
/// Idempotent: a repeated call reports the existing association instead of
/// failing. Both 200 variants differ only in the message text.
#[utoipa::path(
    post,
    path = "/beer",
    tag = TAG,
    request_body = AssignBeerToBrewery,
    responses(
        (status = 200, description = "Beer assigned (or already assigned)", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn assign_beer<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    ValidatedJson(input): ValidatedJson<AssignBeerToBrewery>,
) -> BreweryResult<Json<MessageResponse>> {
    let outcome = service.assign_beer(input).await?;

    let message = match outcome {
        AssignmentOutcome::Assigned => "Beer assigned to brewery successfully.",
        AssignmentOutcome::AlreadyAssigned => "Beer is already assigned to this brewery.",
    };

    Ok(Json(MessageResponse::new(message)))
}

/// Get a brewery by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Brewery id")
    ),
    responses(
        (status = 200, description = "Brewery found", body = Brewery),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_brewery<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    IdPath(id): IdPath,
) -> BreweryResult<Json<Brewery>> {
    let brewery = service.get_brewery(id).await?;
    Ok(Json(brewery))
}

/// Update a brewery
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Brewery id")
    ),
    request_body = UpdateBrewery,
    responses(
        (status = 200, description = "Brewery updated successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_brewery<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateBrewery>,
) -> BreweryResult<Json<MessageResponse>> {
    service.update_brewery(id, input).await?;
    Ok(Json(MessageResponse::new("Brewery updated successfully.")))
}

/// Delete a brewery
///
/// Beers produced by the brewery survive with their reference cleared.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Brewery id")
    ),
    responses(
        (status = 200, description = "Brewery deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_brewery<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    IdPath(id): IdPath,
) -> BreweryResult<Json<MessageResponse>> {
    service.delete_brewery(id).await?;
    Ok(Json(MessageResponse::new("Brewery deleted successfully.")))
}

/// List the beers produced by a brewery
#[utoipa::path(
    get,
    path = "/{id}/beer",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Brewery id")
    ),
    responses(
        (status = 200, description = "Beers produced by the brewery", body = Vec<Beer>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers_of_brewery<R: BreweryRepository, B: BeerRepository>(
    State(service): State<Arc<BreweryService<R, B>>>,
    IdPath(id): IdPath,
) -> BreweryResult<Json<Vec<Beer>>> {
    let beers = service.beers_of(id).await?;

    if beers.is_empty() {
        return Err(BreweryError::NoneFound);
    }

    Ok(Json(beers))
}
