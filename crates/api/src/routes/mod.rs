pub mod admin;
pub mod contact;
pub mod health;
pub mod media;
pub mod posts;
pub mod site;
pub mod sitemap;
pub mod static_pages;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Assemble the full router. The public catch-all is merged last so every
/// exact route (admin API, contact, media, sitemap) wins over it.
pub fn build_router(state: AppState) -> Router {
    let media_files = ServeDir::new(state.media().root());
    Router::new()
        .merge(health::routes())
        .merge(admin::routes())
        .merge(static_pages::routes())
        .merge(posts::routes())
        .merge(contact::routes())
        .merge(media::routes())
        .merge(sitemap::routes())
        .nest_service("/media", media_files)
        .merge(site::routes())
        .with_state(state)
}
