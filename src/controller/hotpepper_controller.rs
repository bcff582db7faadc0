use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::routing::get;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::repositories::hotpepper_repo::{HotPepperRepo, SearchError};

pub fn router(app_state: AppState) -> Router {
    let hotpepper_repo = Arc::new(HotPepperRepo::new(
        app_state.http_client,
        app_state.config.hotpepper_api_key,
        app_state.config.hotpepper_api_url,
    ));

    Router::new()
        .route("/:genre", get(search_venues_by_genre))
        .route_layer(Extension(hotpepper_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct VenueSearchParam {
    #[serde(default)]
    pub query: String,
}

pub async fn search_venues_by_genre(
    Extension(hotpepper_repo): Extension<Arc<HotPepperRepo>>,
    Path(genre): Path<String>,
    Query(params): Query<VenueSearchParam>,
) -> impl IntoResponse {
    let search_res = hotpepper_repo
        .search_venues(
            &genre,
            &params.query,
        ).await;

    return match search_res {
        Ok(venues) => {
            (StatusCode::OK, Json(venues)).into_response()
        }
        Err(e @ SearchError::UpstreamStatus(_)) => {
            warn!("HotPepper search was rejected upstream due to: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() }))
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching HotPepper venues due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to search venues, please try again!" }))
            ).into_response()
        }
    };
}
