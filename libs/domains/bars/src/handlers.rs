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

use crate::error::{BarError, BarResult};
use crate::models::{AssignBeerToBar, Bar, BarWithBeers, CreateBar, UpdateBar};
use crate::repository::BarRepository;
use crate::service::BarService;

pub const TAG: &str = "bar";

/// OpenAPI documentation for the Bar API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_bars,
        create_bar,
        list_bars_with_beers,
        assign_beer,
        get_bar,
        update_bar,
        delete_bar,
        list_beers_served_at,
    ),
    components(
        schemas(
            Bar,
            BarWithBeers,
            CreateBar,
            UpdateBar,
            AssignBeerToBar,
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
        (name = TAG, description = "Bar management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the bar router with all HTTP endpoints
pub fn router<R, B>(service: BarService<R, B>) -> Router
where
    R: BarRepository + 'static,
    B: BeerRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_bars).post(create_bar))
        .route("/beer", get(list_bars_with_beers).post(assign_beer))
        .route("/{id}", get(get_bar).put(update_bar).delete(delete_bar))
        .route("/{id}/beer", get(list_beers_served_at))
        .with_state(shared_service)
}

/// List all bars
///
/// An empty result set is reported as 404, not as an empty list.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of bars", body = Vec<Bar>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_bars<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
) -> BarResult<Json<Vec<Bar>>> {
    let bars = service.list_bars().await?;

    if bars.is_empty() {
        return Err(BarError::NoneFound);
    }

    Ok(Json(bars))
}

/// Create a new bar
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBar,
    responses(
        (status = 201, description = "Bar created successfully", body = Bar),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_bar<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    ValidatedJson(input): ValidatedJson<CreateBar>,
) -> BarResult<impl IntoResponse> {
    let bar = service.create_bar(input).await?;

    Ok((StatusCode::CREATED, Json(bar)))
}

/// List all bars with the beers they serve
#[utoipa::path(
    get,
    path = "/beer",
    tag = TAG,
    responses(
        (status = 200, description = "Bars with their beers", body = Vec<BarWithBeers>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_bars_with_beers<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
) -> BarResult<Json<Vec<BarWithBeers>>> {
    let bars = service.list_bars_with_beers().await?;

    if bars.is_empty() {
        return Err(BarError::NoneFound);
    }

    Ok(Json(bars))
}

/// Record that a bar serves a beer
///
/// Idempotent: a repeated call reports the existing association instead of
/// failing. Both 200 variants differ only in the message text.
#[utoipa::path(
    post,
    path = "/beer",
    tag = TAG,
    request_body = AssignBeerToBar,
    responses(
        (status = 200, description = "Beer assigned (or already assigned)", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn assign_beer<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    ValidatedJson(input): ValidatedJson<AssignBeerToBar>,
) -> BarResult<Json<MessageResponse>> {
    let outcome = service.assign_beer(input).await?;

    let message = match outcome {
        AssignmentOutcome::Assigned => "Beer assigned to bar successfully.",
        AssignmentOutcome::AlreadyAssigned => "Beer is already assigned to this bar.",
    };

    Ok(Json(MessageResponse::new(message)))
}

/// Get a bar by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Bar id")
    ),
    responses(
        (status = 200, description = "Bar found", body = Bar),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_bar<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    IdPath(id): IdPath,
) -> BarResult<Json<Bar>> {
    let bar = service.get_bar(id).await?;
    Ok(Json(bar))
}

/// Update a bar
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Bar id")
    ),
    request_body = UpdateBar,
    responses(
        (status = 200, description = "Bar updated successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_bar<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateBar>,
) -> BarResult<Json<MessageResponse>> {
    service.update_bar(id, input).await?;
    Ok(Json(MessageResponse::new("Bar updated successfully.")))
}

/// Delete a bar
///
/// The bar's join rows go with it; the beers themselves survive.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Bar id")
    ),
    responses(
        (status = 200, description = "Bar deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_bar<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    IdPath(id): IdPath,
) -> BarResult<Json<MessageResponse>> {
    service.delete_bar(id).await?;
    Ok(Json(MessageResponse::new("Bar deleted successfully.")))
}

/// List the beers served at a bar
#[utoipa::path(
    get,
    path = "/{id}/beer",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Bar id")
    ),
    responses(
        (status = 200, description = "Beers served at the bar", body = Vec<Beer>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers_served_at<R: BarRepository, B: BeerRepository>(
    State(service): State<Arc<BarService<R, B>>>,
    IdPath(id): IdPath,
) -> BarResult<Json<Vec<Beer>>> {
    let beers = service.beers_served_at(id).await?;

    if beers.is_empty() {
        return Err(BarError::NoneFound);
    }

    Ok(Json(beers))
}
