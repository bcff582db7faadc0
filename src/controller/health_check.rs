use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_home))
        .route("/health", get(get_health_check))
}

async fn get_home() -> &'static str {
    "Hello, welcome to the API!"
}

/// Misc endpoint for individual use case
async fn get_health_check() -> Result<StatusCode, StatusCode>
{
    Ok(StatusCode::OK)
}
