//! Image upload. Accepts one image file (≤ 5 MB) under a caller-chosen
//! folder prefix and returns the public URL the editor stores in block
//! data.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::storage::{MediaStore, MAX_UPLOAD_BYTES};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/media", post(upload))
}

async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> ApiResult<Json<Value>> {
    let mut folder = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("folder") => {
                folder = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable folder field: {e}")))?;
            }
            Some("file") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let Some(extension) = MediaStore::extension_for(&content_type) else {
                    return Err(ApiError::UnsupportedMediaType(format!(
                        "{content_type:?} is not an accepted image type"
                    )));
                };
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable file field: {e}")))?;
                if bytes.len() > MAX_UPLOAD_BYTES {
                    return Err(ApiError::PayloadTooLarge);
                }
                let url = state
                    .media()
                    .store(&folder, extension, &bytes)
                    .await
                    .map_err(|e| ApiError::Internal(format!("media write failed: {e}")))?;
                tracing::info!(%url, size = bytes.len(), "stored uploaded image");
                return Ok(Json(json!({ "url": url })));
            }
            _ => {}
        }
    }

    Err(ApiError::BadRequest("missing file field".into()))
}
