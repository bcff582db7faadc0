use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use crate::models::payment::{PaymentRequest, PaymentVerdict};
use crate::repositories::payment_gateway::{CredentialVerifier, FixedCredentialVerifier};

pub fn router() -> Router {
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(FixedCredentialVerifier::default());

    Router::new()
        .route("/", post(process_payment))
        .route_layer(Extension(verifier))
}

/// Three step gate: presence check, credential check, confirmation.
/// Nothing is persisted; the verdict is the whole outcome.
pub fn evaluate_payment(
    body: &PaymentRequest,
    verifier: &dyn CredentialVerifier,
) -> PaymentVerdict {
    if body.has_missing_input() {
        return PaymentVerdict {
            success: false,
            message: "Missing required payment details, please try again.".to_string(),
        };
    }

    if !verifier.verify(&body.card_number, &body.pin) {
        return PaymentVerdict {
            success: false,
            message: "Card number or PIN is incorrect, please try again.".to_string(),
        };
    }

    PaymentVerdict {
        success: true,
        message: format!("{} reservation confirmed!", body.course),
    }
}

pub async fn process_payment(
    Extension(verifier): Extension<Arc<dyn CredentialVerifier>>,
    Json(body): Json<PaymentRequest>,
) -> impl IntoResponse {
    let verdict = evaluate_payment(&body, verifier.as_ref());

    // Missing fields are the only verdict reported as a client error; a
    // credential mismatch still answers 200 with success set to false.
    let status = if body.has_missing_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    (status, Json(verdict)).into_response()
}
