//! Minimal blog CRUD: enough for the resolver and the sitemap to have
//! real published slugs to work with.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use chrono::Utc;
use kemas_core::lang::Localized;
use kemas_core::page::model::{validate_slug, Post};

use crate::error::{ApiError, ApiResult, FieldError};
use crate::repo;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/posts", get(list_posts).post(create_post))
        .route("/v1/posts/{slug}", put(update_post).delete(delete_post))
}

async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(repo::posts::list(state.pool()).await?))
}

#[derive(Debug, Deserialize)]
struct CreatePostRequest {
    slug: String,
    title: Localized<String>,
    #[serde(default)]
    body: Localized<String>,
    #[serde(default)]
    published: bool,
    #[serde(default = "default_true")]
    indexable: bool,
}

fn default_true() -> bool {
    true
}

async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<Json<Post>> {
    validate_slug(&request.slug)
        .map_err(|e| ApiError::Validation(vec![FieldError::new("slug", &e.to_string())]))?;
    if repo::posts::get_by_slug(state.pool(), &request.slug).await?.is_some() {
        return Err(ApiError::Conflict(format!(
            "slug {:?} is already in use",
            request.slug
        )));
    }

    let post = Post {
        id: Uuid::new_v4(),
        slug: request.slug,
        title: request.title,
        body: request.body,
        published: request.published,
        indexable: request.indexable,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let post = repo::posts::insert(state.pool(), &post).await?;
    tracing::info!(slug = %post.slug, "created post");
    Ok(Json(post))
}

#[derive(Debug, Deserialize)]
struct UpdatePostRequest {
    title: Option<Localized<String>>,
    body: Option<Localized<String>>,
    published: Option<bool>,
    indexable: Option<bool>,
}

async fn update_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdatePostRequest>,
) -> ApiResult<Json<Post>> {
    let mut post = repo::posts::get_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no post with slug {slug:?}")))?;

    if let Some(title) = request.title {
        post.title = title;
    }
    if let Some(body) = request.body {
        post.body = body;
    }
    if let Some(published) = request.published {
        post.published = published;
    }
    if let Some(indexable) = request.indexable {
        post.indexable = indexable;
    }

    repo::posts::update(state.pool(), &post).await?;
    Ok(Json(post))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    if !repo::posts::delete_by_slug(state.pool(), &slug).await? {
        return Err(ApiError::NotFound(format!("no post with slug {slug:?}")));
    }
    tracing::info!(%slug, "deleted post");
    Ok(Json(json!({ "deleted": slug })))
}
