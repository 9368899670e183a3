// API layer - HTTP endpoints
pub mod health;
pub mod users;

use std::sync::Arc;

use poem::endpoint::StaticFilesEndpoint;
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, IntoEndpoint, IntoResponse, Response, Route};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ContentTypeError, ParseMultipartError, ParseRequestPayloadError};

pub use health::HealthApi;
pub use users::UserApi;

use crate::app_data::AppData;
use crate::config::BootstrapSettings;
use crate::errors::UserApiError;

/// Compose the HTTP application
///
/// ```text
/// /swagger   Swagger UI and OpenAPI document
/// /uploads   stored profile pictures
/// /          directory endpoints and /health
/// ```
pub fn routes(
    app_data: Arc<AppData>,
    settings: &BootstrapSettings,
) -> impl Endpoint<Output = Response> + use<> {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.connections.clone()),
            UserApi::new(app_data),
        ),
        "People Directory API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(settings.public_base_url());

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/uploads", StaticFilesEndpoint::new(settings.upload_dir()))
        .nest("/", api_service.into_endpoint().catch_all_error(render_request_error))
        .with(Cors::new())
        .with(Tracing)
}

/// Payloads that cannot be read at all get the same body as any other
/// validation failure; every other error keeps poem's response.
async fn render_request_error(err: poem::Error) -> Response {
    if is_payload_error(&err) {
        tracing::debug!("Rejected malformed request: {}", err);
        return UserApiError::validation_failed(err.to_string()).into_response();
    }

    err.into_response()
}

fn is_payload_error(err: &poem::Error) -> bool {
    err.is::<ParseRequestPayloadError>()
        || err.is::<ContentTypeError>()
        || err.is::<ParseMultipartError>()
}
