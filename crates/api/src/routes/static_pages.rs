//! Admin access to the built-in marketing pages' fixed-shape content.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use kemas_core::lang::Localized;
use kemas_core::page::model::{StaticContent, StaticPage, STATIC_PAGE_KEYS};

use crate::error::{ApiError, ApiResult};
use crate::repo;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/static/{page_key}", get(get_static).put(put_static))
}

fn check_key(page_key: &str) -> ApiResult<()> {
    if STATIC_PAGE_KEYS.contains(&page_key) {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!(
            "no static page named {page_key:?}"
        )))
    }
}

async fn get_static(
    State(state): State<AppState>,
    Path(page_key): Path<String>,
) -> ApiResult<Json<StaticPage>> {
    check_key(&page_key)?;
    Ok(Json(repo::statics::get(state.pool(), &page_key).await?))
}

async fn put_static(
    State(state): State<AppState>,
    Path(page_key): Path<String>,
    Json(content): Json<Localized<StaticContent>>,
) -> ApiResult<Json<StaticPage>> {
    check_key(&page_key)?;
    repo::statics::upsert(state.pool(), &page_key, &content).await?;
    tracing::info!(%page_key, "saved static page content");
    Ok(Json(repo::statics::get(state.pool(), &page_key).await?))
}
