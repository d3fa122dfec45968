use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::MessageResponse)
    ),
    info(
        title = "Taplist API",
        version = "0.1.0",
        description = "API for managing beers, bars, breweries and their associations"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/beer", api = domain_beers::handlers::ApiDoc),
        (path = "/brewery", api = domain_breweries::handlers::ApiDoc),
        (path = "/bar", api = domain_bars::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
