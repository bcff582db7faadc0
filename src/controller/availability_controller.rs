use axum::{Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use time::OffsetDateTime;
use crate::models::availability::seven_day_window;

pub fn router() -> Router {
    Router::new().route("/", get(get_seat_availability))
}

/// Rolling one week seat calendar, regenerated on every call. Anchored on
/// UTC so the window does not shift with host timezone configuration.
pub async fn get_seat_availability() -> impl IntoResponse {
    let today = OffsetDateTime::now_utc().date();
    let seats = seven_day_window(today);

    (StatusCode::OK, Json(seats)).into_response()
}
