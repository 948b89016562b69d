use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, FromRef, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http::StatusCode;

use super::{ContactResponse, ContactService};

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ContactService: FromRef<S>,
{
    // Message length is never enforced, so the body is read whole.
    Router::new().route(
        "/api/contact",
        post(post_contact).layer(DefaultBodyLimit::disable()),
    )
}

/// `POST /api/contact`: 200 with `{"success":true}` once the email is handed off,
/// 500 with the generic error otherwise.
pub async fn post_contact(State(service): State<ContactService>, body: Bytes) -> Response {
    match service.submit_json(&body).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::sent())).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::not_sent()),
        )
            .into_response(),
    }
}
