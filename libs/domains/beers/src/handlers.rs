use axum::{
    extract::{Query, State},
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

use crate::error::{BeerError, BeerResult};
use crate::models::{AbvRangeQuery, Beer, CreateBeer, UpdateBeer};
use crate::repository::BeerRepository;
use crate::service::BeerService;

pub const TAG: &str = "beer";

/// OpenAPI documentation for the Beer API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_beers_by_alcohol_range,
        create_beer,
        get_beer,
        update_beer,
        delete_beer,
    ),
    components(
        schemas(Beer, CreateBeer, UpdateBeer, AbvRangeQuery, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Beer catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the beer router with all HTTP endpoints
pub fn router<R: BeerRepository + 'static>(service: BeerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_beers_by_alcohol_range).post(create_beer))
        .route("/{id}", get(get_beer).put(update_beer).delete(delete_beer))
        .with_state(shared_service)
}

/// List beers within an alcohol-by-volume range
///
/// At least one bound is required; both bounds are exclusive. An empty
/// result set is reported as 404, not as an empty list.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(AbvRangeQuery),
    responses(
        (status = 200, description = "Beers within the range", body = Vec<Beer>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers_by_alcohol_range<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    Query(query): Query<AbvRangeQuery>,
) -> BeerResult<Json<Vec<Beer>>> {
    query.ensure_valid().map_err(BeerError::Validation)?;

    let beers = service.beers_by_alcohol_range(query).await?;

    if beers.is_empty() {
        return Err(BeerError::NoneFound);
    }

    Ok(Json(beers))
}

/// Create a new beer
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBeer,
    responses(
        (status = 201, description = "Beer created successfully", body = Beer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBeer>,
) -> BeerResult<impl IntoResponse> {
    let beer = service.create_beer(input).await?;

    Ok((StatusCode::CREATED, Json(beer)))
}

/// Get a beer by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    responses(
        (status = 200, description = "Beer found", body = Beer),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    IdPath(id): IdPath,
) -> BeerResult<Json<Beer>> {
    let beer = service.get_beer(id).await?;
    Ok(Json(beer))
}

/// Update a beer
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    request_body = UpdateBeer,
    responses(
        (status = 200, description = "Beer updated successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateBeer>,
) -> BeerResult<Json<MessageResponse>> {
    service.update_beer(id, input).await?;
    Ok(Json(MessageResponse::new("Beer updated successfully.")))
}

/// Delete a beer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Beer id")
    ),
    responses(
        (status = 200, description = "Beer deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    IdPath(id): IdPath,
) -> BeerResult<Json<MessageResponse>> {
    service.delete_beer(id).await?;
    Ok(Json(MessageResponse::new("Beer deleted successfully.")))
}
