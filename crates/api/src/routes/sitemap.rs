use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::ApiResult;
use crate::repo;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap))
}

async fn sitemap(State(state): State<AppState>) -> ApiResult<Response> {
    let posts = repo::posts::list(state.pool()).await?;
    let xml = kemas_render::sitemap::sitemap_xml(&state.config().public_base_url, &posts);
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}
