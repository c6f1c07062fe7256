use crate::api::response::HealthBody;
use crate::api::upload::read_upload;
use crate::api::AppState;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

/// `POST /convert` — multipart upload in, DOCX attachment or JSON error out.
pub async fn convert_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match multipart {
        Ok(mut multipart) => read_upload(&mut multipart).await,
        Err(rejection) => {
            debug!("Not a multipart request: {}", rejection.body_text());
            None
        }
    };

    state.converter.process(upload).await.into_response()
}

/// `GET /health` — liveness only; the engine is not exercised.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody::healthy(state.converter.engine_name()))
}
